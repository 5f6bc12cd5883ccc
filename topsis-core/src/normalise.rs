//! Vector normalisation and weighting of the criteria matrix.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::{
    Result,
    error::{DegenerateReason, TopsisError},
    matrix::Matrix,
    table::{DecisionTable, WeightVector},
};

/// Scales every criterion column of `table` to unit Euclidean norm.
///
/// Each column is first divided by its largest magnitude, so the norm never
/// overflows or underflows for finite cells.
///
/// # Errors
/// Returns [`TopsisError::DegenerateColumn`] for the first column whose
/// values are all zero.
///
/// # Examples
/// ```
/// use topsis_core::{RawTable, normalise, validate};
///
/// let table = RawTable::new(
///     vec!["Id".into(), "A".into(), "B".into()],
///     vec![
///         vec!["x".into(), "3".into(), "1".into()],
///         vec!["y".into(), "4".into(), "1".into()],
///     ],
/// );
/// let input = validate(&table, "1,1", "+,+")?;
/// let normalised = normalise(input.table())?;
/// assert_eq!(normalised.column(0).collect::<Vec<_>>(), vec![0.6, 0.8]);
/// # Ok::<(), topsis_core::TopsisError>(())
/// ```
pub fn normalise(table: &DecisionTable) -> Result<Matrix> {
    let criteria = table.criteria();
    let norms = column_norms(criteria);

    if let Some(criterion) = norms.iter().position(|norm| norm.scale == 0.0) {
        return Err(TopsisError::DegenerateColumn {
            criterion,
            name: table
                .criterion_names()
                .get(criterion)
                .cloned()
                .unwrap_or_default(),
            reason: DegenerateReason::ZeroNorm,
        });
    }
    debug!(?norms, "criterion norms computed");

    let values = criteria
        .rows_iter()
        .flat_map(|row| row.iter().zip(&norms).map(|(value, norm)| norm.apply(*value)))
        .collect();
    Ok(Matrix::from_flat(criteria.rows(), criteria.cols(), values))
}

/// Multiplies each column of `normalised` by its weight.
///
/// Weights are relative: each is divided by the largest weight first, so a
/// column of unit-norm values never leaves `[-1, 1]` and scaling every weight
/// by the same factor leaves the result unchanged.
#[must_use]
pub fn apply_weights(normalised: &Matrix, weights: &WeightVector) -> Matrix {
    let largest = weights.as_slice().iter().copied().fold(0.0, f64::max);
    let relative: Vec<f64> = weights
        .as_slice()
        .iter()
        .map(|weight| if largest > 0.0 { weight / largest } else { *weight })
        .collect();
    let values = normalised
        .rows_iter()
        .flat_map(|row| {
            row.iter()
                .zip(&relative)
                .map(|(value, weight)| value * weight)
        })
        .collect();
    Matrix::from_flat(normalised.rows(), normalised.cols(), values)
}

/// A column norm held as `scale * unit`, where `scale` is the largest
/// magnitude in the column and `unit` the norm of the column divided by it.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ScaledNorm {
    scale: f64,
    unit: f64,
}

impl ScaledNorm {
    fn of(values: impl Iterator<Item = f64> + Clone) -> Self {
        let scale = values
            .clone()
            .fold(0.0, |largest, value| f64::max(largest, value.abs()));
        if scale == 0.0 {
            return Self { scale, unit: 0.0 };
        }
        let unit = values
            .map(|value| {
                let ratio = value / scale;
                ratio * ratio
            })
            .sum::<f64>()
            .sqrt();
        Self { scale, unit }
    }

    const fn apply(self, value: f64) -> f64 {
        value / self.scale / self.unit
    }
}

fn column_norm(matrix: &Matrix, col: usize) -> ScaledNorm {
    ScaledNorm::of(matrix.column(col))
}

fn column_norms(matrix: &Matrix) -> Vec<ScaledNorm> {
    #[cfg(feature = "parallel")]
    {
        column_norms_parallel(matrix)
    }
    #[cfg(not(feature = "parallel"))]
    {
        column_norms_serial(matrix)
    }
}

#[cfg_attr(
    all(feature = "parallel", not(test)),
    expect(dead_code, reason = "the parallel build only calls the serial path from tests")
)]
fn column_norms_serial(matrix: &Matrix) -> Vec<ScaledNorm> {
    (0..matrix.cols())
        .map(|col| column_norm(matrix, col))
        .collect()
}

#[cfg(feature = "parallel")]
fn column_norms_parallel(matrix: &Matrix) -> Vec<ScaledNorm> {
    (0..matrix.cols())
        .into_par_iter()
        .map(|col| column_norm(matrix, col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mobile_table, raw_table};
    use crate::{RawTable, validate};

    use rstest::rstest;

    #[test]
    fn normalised_columns_have_unit_norm() {
        let input = validate(&mobile_table(), "1,1,1,1", "+,+,+,-").expect("valid input");
        let normalised = normalise(input.table()).expect("normalisation must succeed");
        for col in 0..normalised.cols() {
            let norm = normalised.column(col).map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "column {col} has norm {norm}");
        }
    }

    #[test]
    fn zero_column_is_degenerate() {
        let table = raw_table(&["Id", "A", "B"], &[&["x", "1", "0"], &["y", "2", "0.0"]]);
        let input = validate(&table, "1,1", "+,-").expect("valid input");
        let err = normalise(input.table()).expect_err("zero column must fail");
        assert_eq!(
            err,
            TopsisError::DegenerateColumn {
                criterion: 1,
                name: "B".to_owned(),
                reason: DegenerateReason::ZeroNorm,
            }
        );
    }

    #[rstest]
    #[case::huge(["1e200", "3e200", "2e200"])]
    #[case::tiny(["1e-300", "3e-300", "2e-300"])]
    fn extreme_magnitudes_normalise_like_ordinary_ones(#[case] cells: [&str; 3]) {
        let extreme = raw_table(
            &["Id", "A", "B"],
            &[&["x", cells[0], "1"], &["y", cells[1], "2"], &["z", cells[2], "3"]],
        );
        let ordinary = raw_table(
            &["Id", "A", "B"],
            &[&["x", "1", "1"], &["y", "3", "2"], &["z", "2", "3"]],
        );
        let column = |table: RawTable| {
            let input = validate(&table, "1,1", "+,-").expect("valid input");
            let normalised = normalise(input.table()).expect("normalisation must succeed");
            normalised.column(0).collect::<Vec<_>>()
        };
        let scaled = column(extreme);
        assert!(scaled.iter().all(|value| value.is_finite()), "{scaled:?}");
        for (got, want) in scaled.iter().zip(column(ordinary)) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    #[test]
    fn weights_are_relative_to_the_largest() {
        let normalised = Matrix::from_flat(2, 2, vec![0.6, 0.5, 0.8, 0.5]);
        let weighted = apply_weights(&normalised, &WeightVector::new(vec![2.0, 0.5]));
        assert_eq!(weighted.as_slice(), &[0.6, 0.125, 0.8, 0.125]);
    }

    #[rstest]
    #[case::huge(1e300)]
    #[case::subnormal(1e-320)]
    fn uniform_weights_of_any_magnitude_weigh_equally(#[case] weight: f64) {
        let normalised = Matrix::from_flat(2, 2, vec![0.6, 0.5, 0.8, 0.5]);
        let weighted = apply_weights(&normalised, &WeightVector::new(vec![weight, weight]));
        assert_eq!(weighted, normalised);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_norms_match_serial_bitwise() {
        let mut seed = 0.37_f64;
        let values = std::iter::repeat_with(|| {
            seed = 3.9 * seed * (1.0 - seed);
            seed * 1e3 - 250.0
        })
        .take(64 * 9)
        .collect();
        let matrix = Matrix::from_flat(64, 9, values);
        let bits = |norms: Vec<ScaledNorm>| {
            norms
                .into_iter()
                .map(|norm| (norm.scale.to_bits(), norm.unit.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            bits(column_norms_parallel(&matrix)),
            bits(column_norms_serial(&matrix))
        );
    }
}
