//! Input validation: turns a raw table and two comma-separated specifications
//! into a [`ValidatedInput`] or a classified [`TopsisError`].

use tracing::{debug, instrument};

use crate::{
    Result,
    error::{ListKind, NonNumericCell, TopsisError},
    matrix::Matrix,
    table::{DecisionTable, Impact, ImpactVector, RawTable, WeightVector},
};

/// Smallest column count: one identifier plus two criteria.
pub const MIN_COLUMNS: usize = 3;

/// The validated inputs of a ranking run.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedInput {
    table: DecisionTable,
    weights: WeightVector,
    impacts: ImpactVector,
}

impl ValidatedInput {
    /// The validated decision table.
    #[must_use]
    pub const fn table(&self) -> &DecisionTable {
        &self.table
    }

    /// The validated weights.
    #[must_use]
    pub const fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// The validated impacts.
    #[must_use]
    pub const fn impacts(&self) -> &ImpactVector {
        &self.impacts
    }
}

/// Validates `table`, `weights_spec` and `impacts_spec`.
///
/// Checks run in a fixed order and the first failing check is reported:
/// table shape, criterion cells, list format, counts, weight tokens, then
/// impact tokens. The criterion check inspects every cell and reports all
/// offenders at once.
///
/// # Errors
/// - [`TopsisError::TooFewColumns`], [`TopsisError::RaggedRow`] or
///   [`TopsisError::NoAlternatives`] for a malformed table.
/// - [`TopsisError::NonNumericCriteria`] when criterion cells do not parse.
/// - [`TopsisError::NotCommaSeparated`] when a specification has no comma.
/// - [`TopsisError::CountMismatch`] when counts disagree.
/// - [`TopsisError::NonNumericWeight`] or [`TopsisError::NonPositiveWeight`]
///   for a bad weight.
/// - [`TopsisError::InvalidImpact`] for an impact other than `+` or `-`.
///
/// # Examples
/// ```
/// use topsis_core::{ErrorKind, RawTable, validate};
///
/// let table = RawTable::new(
///     vec!["Id".into(), "A".into(), "B".into()],
///     vec![vec!["x".into(), "1".into(), "2".into()]],
/// );
/// let input = validate(&table, "1,2", "+,-")?;
/// assert_eq!(input.weights().as_slice(), &[1.0, 2.0]);
///
/// let err = validate(&table, "1,2", "+,x").expect_err("x is not an impact");
/// assert_eq!(err.kind(), ErrorKind::Value);
/// # Ok::<(), topsis_core::TopsisError>(())
/// ```
#[instrument(
    name = "topsis.validate",
    err,
    skip(table),
    fields(columns = table.column_count(), rows = table.len()),
)]
pub fn validate(table: &RawTable, weights_spec: &str, impacts_spec: &str) -> Result<ValidatedInput> {
    check_shape(table)?;
    let criteria = parse_criteria(table)?;
    let criterion_count = criteria.cols();

    let weight_tokens = split_list(weights_spec, ListKind::Weights)?;
    let impact_tokens = split_list(impacts_spec, ListKind::Impacts)?;
    if weight_tokens.len() != criterion_count || impact_tokens.len() != criterion_count {
        return Err(TopsisError::CountMismatch {
            weights: weight_tokens.len(),
            impacts: impact_tokens.len(),
            criteria: criterion_count,
        });
    }

    let weights = parse_weights(&weight_tokens)?;
    let impacts = parse_impacts(&impact_tokens)?;
    debug!(criteria = criterion_count, "input validated");

    Ok(ValidatedInput {
        table: DecisionTable::new(table.headers().to_vec(), table.rows().to_vec(), criteria),
        weights,
        impacts,
    })
}

fn check_shape(table: &RawTable) -> Result<()> {
    let columns = table.column_count();
    if columns < MIN_COLUMNS {
        return Err(TopsisError::TooFewColumns { columns });
    }
    if let Some((row, fields)) = table
        .rows()
        .iter()
        .enumerate()
        .find(|(_, fields)| fields.len() != columns)
    {
        return Err(TopsisError::RaggedRow {
            row,
            expected: columns,
            found: fields.len(),
        });
    }
    if table.is_empty() {
        return Err(TopsisError::NoAlternatives);
    }
    Ok(())
}

/// Parses every criterion cell column by column, collecting all failures.
fn parse_criteria(table: &RawTable) -> Result<Matrix> {
    let headers = table.headers();
    let criterion_count = headers.len().saturating_sub(1);
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(criterion_count);
    let mut failures = Vec::new();

    for (column, name) in headers.iter().enumerate().skip(1) {
        let mut values = Vec::with_capacity(table.len());
        for (row, fields) in table.rows().iter().enumerate() {
            let raw = fields.get(column).map_or("", String::as_str);
            match parse_finite(raw) {
                Some(value) => values.push(value),
                None => failures.push(NonNumericCell {
                    row,
                    column,
                    column_name: name.clone(),
                    value: raw.to_owned(),
                }),
            }
        }
        columns.push(values);
    }

    if !failures.is_empty() {
        return Err(TopsisError::NonNumericCriteria { cells: failures });
    }

    let values = (0..table.len())
        .flat_map(|row| {
            columns
                .iter()
                .filter_map(move |column| column.get(row).copied())
        })
        .collect();
    Ok(Matrix::from_flat(table.len(), criterion_count, values))
}

fn split_list(spec: &str, list: ListKind) -> Result<Vec<&str>> {
    if !spec.contains(',') {
        return Err(TopsisError::NotCommaSeparated {
            list,
            spec: spec.to_owned(),
        });
    }
    Ok(spec.split(',').map(str::trim).collect())
}

fn parse_weights(tokens: &[&str]) -> Result<WeightVector> {
    let mut weights = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        let value = parse_finite(token).ok_or_else(|| TopsisError::NonNumericWeight {
            index,
            token: (*token).to_owned(),
        })?;
        weights.push(value);
    }
    if let Some((index, token)) = weights
        .iter()
        .zip(tokens)
        .enumerate()
        .find_map(|(index, (weight, token))| (*weight <= 0.0).then_some((index, *token)))
    {
        return Err(TopsisError::NonPositiveWeight {
            index,
            token: token.to_owned(),
        });
    }
    Ok(WeightVector::new(weights))
}

fn parse_impacts(tokens: &[&str]) -> Result<ImpactVector> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            Impact::from_token(token).ok_or_else(|| TopsisError::InvalidImpact {
                index,
                token: (*token).to_owned(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(ImpactVector::new)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
