//! Ideal-best and ideal-worst vectors of a weighted matrix.

use tracing::debug;

use crate::{
    matrix::Matrix,
    table::{Impact, ImpactVector},
};

/// The direction-aware extremes of each weighted criterion column.
///
/// # Examples
/// ```
/// use topsis_core::{IdealSolution, Matrix, RawTable, validate};
///
/// let table = RawTable::new(
///     vec!["Id".into(), "Gain".into(), "Cost".into()],
///     vec![
///         vec!["x".into(), "1".into(), "5".into()],
///         vec!["y".into(), "3".into(), "2".into()],
///     ],
/// );
/// let input = validate(&table, "1,1", "+,-")?;
/// let weighted = Matrix::from_rows(2, vec![vec![1.0, 5.0], vec![3.0, 2.0]])
///     .expect("rows share a width");
/// let ideal = IdealSolution::resolve(&weighted, input.impacts());
/// assert_eq!(ideal.best(), &[3.0, 2.0]);
/// assert_eq!(ideal.worst(), &[1.0, 5.0]);
/// # Ok::<(), topsis_core::TopsisError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IdealSolution {
    best: Vec<f64>,
    worst: Vec<f64>,
}

impl IdealSolution {
    /// Derives both ideal vectors from `weighted`, one pass per column.
    ///
    /// Beneficial columns take the maximum as best and the minimum as worst;
    /// cost columns take the reverse.
    #[must_use]
    pub fn resolve(weighted: &Matrix, impacts: &ImpactVector) -> Self {
        let (best, worst) = impacts
            .as_slice()
            .iter()
            .enumerate()
            .map(|(col, impact)| {
                let (min, max) = column_extremes(weighted, col);
                match impact {
                    Impact::Beneficial => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();
        let ideal = Self { best, worst };
        debug!(best = ?ideal.best, worst = ?ideal.worst, "ideal solution resolved");
        ideal
    }

    /// The ideal-best vector.
    #[must_use]
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// The ideal-worst vector.
    #[must_use]
    pub fn worst(&self) -> &[f64] {
        &self.worst
    }
}

fn column_extremes(matrix: &Matrix, col: usize) -> (f64, f64) {
    matrix
        .column(col)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::beneficial(Impact::Beneficial, 9.0, 1.0)]
    #[case::cost(Impact::Cost, 1.0, 9.0)]
    fn direction_selects_extremes(#[case] impact: Impact, #[case] best: f64, #[case] worst: f64) {
        let weighted = Matrix::from_flat(3, 2, vec![4.0, 0.5, 9.0, 0.5, 1.0, 0.5]);
        let impacts = ImpactVector::new(vec![impact, Impact::Beneficial]);
        let ideal = IdealSolution::resolve(&weighted, &impacts);
        assert_eq!(ideal.best(), &[best, 0.5]);
        assert_eq!(ideal.worst(), &[worst, 0.5]);
    }
}
