//! The ranking pipeline: validate, normalise, weight, resolve the ideal
//! solution, score, and rank.

use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    distance::closeness_scores,
    ideal::IdealSolution,
    normalise::{apply_weights, normalise},
    rank::dense_ranks,
    result::{RankedAlternative, ResultTable},
    table::RawTable,
    validate::{ValidatedInput, validate},
};

/// Ranks the alternatives of `table` with TOPSIS.
///
/// `weights_spec` and `impacts_spec` are comma-separated lists such as
/// `"1,1,2"` and `"+,-,+"`. The computation is pure and all-or-nothing: the
/// same inputs always produce the same [`ResultTable`], and no partial result
/// accompanies an error.
///
/// # Errors
/// Returns any error of [`validate`], then
/// [`crate::TopsisError::DegenerateColumn`] when a criterion column has zero
/// norm and [`crate::TopsisError::DivisionByZero`] when an alternative
/// coincides with both ideal solutions.
///
/// # Examples
/// ```
/// use topsis_core::{RawTable, compute_ranking};
///
/// let row = |cells: &[&str]| cells.iter().map(|c| (*c).to_owned()).collect::<Vec<_>>();
/// let table = RawTable::new(
///     row(&["Model", "Price", "Storage"]),
///     vec![row(&["M1", "250", "16"]), row(&["M2", "200", "32"])],
/// );
/// let result = compute_ranking(&table, "1,1", "-,+")?;
/// let best = result.by_rank()[0];
/// assert_eq!(best.identifier(), "M2");
/// assert_eq!(best.score(), 1.0);
/// # Ok::<(), topsis_core::TopsisError>(())
/// ```
#[instrument(
    name = "topsis.compute_ranking",
    err,
    skip(table),
    fields(alternatives = field::Empty, criteria = field::Empty),
)]
pub fn compute_ranking(table: &RawTable, weights_spec: &str, impacts_spec: &str) -> Result<ResultTable> {
    let input = validate(table, weights_spec, impacts_spec)?;
    let span = Span::current();
    span.record("alternatives", input.table().alternative_count());
    span.record("criteria", input.table().criterion_count());
    input.rank()
}

impl ValidatedInput {
    /// Runs the ranking stages on already validated input.
    ///
    /// # Errors
    /// Returns [`crate::TopsisError::DegenerateColumn`] or
    /// [`crate::TopsisError::DivisionByZero`].
    pub fn rank(&self) -> Result<ResultTable> {
        let table = self.table();
        let normalised = normalise(table)?;
        let weighted = apply_weights(&normalised, self.weights());
        let ideal = IdealSolution::resolve(&weighted, self.impacts());
        let scores = closeness_scores(table, &weighted, &ideal)?;
        let ranks = dense_ranks(&scores);

        let alternatives: Vec<RankedAlternative> = table
            .rows()
            .iter()
            .zip(scores)
            .zip(ranks)
            .map(|((fields, score), rank)| RankedAlternative::new(fields.clone(), score, rank))
            .collect();
        let result = ResultTable::new(table.headers(), alternatives);

        info!(
            alternatives = result.len(),
            best = result.by_rank().first().map(|best| best.identifier()),
            "ranking completed"
        );
        Ok(result)
    }
}
