//! Decision table types: the raw input table and its validated counterparts.

use std::fmt;

use crate::matrix::Matrix;

/// A table exactly as a collaborator read it: one header row and string rows.
///
/// Column 0 holds an opaque identifier; columns 1.. hold criterion values.
/// Nothing is checked on construction; see [`crate::validate`].
///
/// # Examples
/// ```
/// use topsis_core::RawTable;
///
/// let table = RawTable::new(
///     vec!["Model".into(), "Price".into(), "Storage".into()],
///     vec![vec!["M1".into(), "250".into(), "16".into()]],
/// );
/// assert_eq!(table.column_count(), 3);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a raw table from a header row and data rows.
    #[must_use]
    pub const fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Returns the header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns declared by the header.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no data rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Desirability direction of a criterion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Impact {
    /// Higher values are preferable (`+`).
    Beneficial,
    /// Lower values are preferable (`-`).
    Cost,
}

impl Impact {
    /// Parses an impact token; only the exact symbols `+` and `-` are accepted.
    ///
    /// # Examples
    /// ```
    /// use topsis_core::Impact;
    ///
    /// assert_eq!(Impact::from_token("+"), Some(Impact::Beneficial));
    /// assert_eq!(Impact::from_token("-"), Some(Impact::Cost));
    /// assert_eq!(Impact::from_token("x"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Beneficial),
            "-" => Some(Self::Cost),
            _ => None,
        }
    }

    /// The symbol this impact is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Beneficial => '+',
            Self::Cost => '-',
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Beneficial => Self::Cost,
            Self::Cost => Self::Beneficial,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Validated positive criterion weights, aligned with the criterion columns.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub(crate) const fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Returns the weights in criterion order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of weights.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no weights.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validated impacts, aligned with the criterion columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub(crate) const fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Returns the impacts in criterion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    /// Number of impacts.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no impacts.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A validated decision table.
///
/// Keeps every row verbatim for echoing into the result, alongside the parsed
/// criterion values.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    criteria: Matrix,
}

impl DecisionTable {
    pub(crate) const fn new(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        criteria: Matrix,
    ) -> Self {
        Self {
            headers,
            rows,
            criteria,
        }
    }

    /// Returns the header row, identifier column included.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the criterion column headers.
    #[must_use]
    pub fn criterion_names(&self) -> &[String] {
        self.headers.get(1..).unwrap_or_default()
    }

    /// Returns the verbatim rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the identifier of row `row`.
    #[must_use]
    pub fn identifier(&self, row: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|fields| fields.first())
            .map(String::as_str)
    }

    /// Returns the parsed criterion values.
    #[must_use]
    pub const fn criteria(&self) -> &Matrix {
        &self.criteria
    }

    /// Number of alternatives.
    #[must_use]
    pub const fn alternative_count(&self) -> usize {
        self.criteria.rows()
    }

    /// Number of criteria.
    #[must_use]
    pub const fn criterion_count(&self) -> usize {
        self.criteria.cols()
    }
}
