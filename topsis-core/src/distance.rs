//! Separation measures and closeness coefficients.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    Result,
    error::TopsisError,
    ideal::IdealSolution,
    matrix::Matrix,
    table::DecisionTable,
};

/// An alternative's Euclidean distances to the two ideal vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Separation {
    /// Distance to the ideal-best vector.
    pub to_best: f64,
    /// Distance to the ideal-worst vector.
    pub to_worst: f64,
}

impl Separation {
    /// Measures `row` against both vectors of `ideal`.
    ///
    /// # Examples
    /// ```
    /// use topsis_core::Separation;
    ///
    /// let separation = Separation::measure(&[3.0, 4.0], &[0.0, 0.0], &[3.0, 4.0]);
    /// assert_eq!(separation.to_best, 5.0);
    /// assert_eq!(separation.to_worst, 0.0);
    /// ```
    #[must_use]
    pub fn measure(row: &[f64], best: &[f64], worst: &[f64]) -> Self {
        Self {
            to_best: euclidean(row, best),
            to_worst: euclidean(row, worst),
        }
    }

    /// The closeness coefficient `to_worst / (to_best + to_worst)`, or `None`
    /// when the denominator is zero or not finite.
    #[must_use]
    pub fn closeness(self) -> Option<f64> {
        let total = self.to_best + self.to_worst;
        (total.is_finite() && total > 0.0).then(|| self.to_worst / total)
    }
}

/// Computes the closeness score of every alternative.
///
/// # Errors
/// Returns [`TopsisError::DivisionByZero`] for the first alternative whose
/// distances to both ideal vectors are zero.
pub fn closeness_scores(
    table: &DecisionTable,
    weighted: &Matrix,
    ideal: &IdealSolution,
) -> Result<Vec<f64>> {
    separations(weighted, ideal)
        .into_iter()
        .enumerate()
        .map(|(row, separation)| {
            separation
                .closeness()
                .ok_or_else(|| TopsisError::DivisionByZero {
                    row,
                    identifier: table.identifier(row).unwrap_or_default().to_owned(),
                })
        })
        .collect()
}

/// Euclidean distance, scaled by the largest component difference so the
/// squares neither overflow nor underflow.
fn euclidean(left: &[f64], right: &[f64]) -> f64 {
    let diffs = left.iter().zip(right).map(|(l, r)| l - r);
    let scale = diffs.clone().fold(0.0, |largest, diff| f64::max(largest, diff.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let unit = diffs
        .map(|diff| {
            let ratio = diff / scale;
            ratio * ratio
        })
        .sum::<f64>()
        .sqrt();
    scale * unit
}

/// Measures every row of `weighted` against `ideal`, in row order.
#[must_use]
pub fn separations(weighted: &Matrix, ideal: &IdealSolution) -> Vec<Separation> {
    #[cfg(feature = "parallel")]
    {
        separations_parallel(weighted, ideal)
    }
    #[cfg(not(feature = "parallel"))]
    {
        separations_serial(weighted, ideal)
    }
}

#[cfg_attr(
    all(feature = "parallel", not(test)),
    expect(dead_code, reason = "the parallel build only calls the serial path from tests")
)]
fn separations_serial(weighted: &Matrix, ideal: &IdealSolution) -> Vec<Separation> {
    weighted
        .rows_iter()
        .map(|row| Separation::measure(row, ideal.best(), ideal.worst()))
        .collect()
}

#[cfg(feature = "parallel")]
fn separations_parallel(weighted: &Matrix, ideal: &IdealSolution) -> Vec<Separation> {
    weighted
        .as_slice()
        .par_chunks_exact(weighted.cols().max(1))
        .map(|row| Separation::measure(row, ideal.best(), ideal.worst()))
        .collect()
}
