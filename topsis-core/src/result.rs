//! Result types for ranking runs.
//!
//! A [`ResultTable`] echoes the input table and appends the closeness score
//! and dense rank of each alternative.

use crate::rank::Rank;

/// Header of the appended closeness score column.
pub const SCORE_COLUMN: &str = "Topsis Score";
/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// How closeness scores are rendered as text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScoreFormat {
    /// Shortest representation that round-trips to the same `f64`, always
    /// with a fractional part (`1.0`, not `1`).
    #[default]
    Shortest,
    /// A fixed number of decimal places.
    Fixed(usize),
}

impl ScoreFormat {
    /// Renders `score`.
    ///
    /// # Examples
    /// ```
    /// use topsis_core::ScoreFormat;
    ///
    /// assert_eq!(ScoreFormat::Shortest.render(0.25), "0.25");
    /// assert_eq!(ScoreFormat::Shortest.render(1.0), "1.0");
    /// assert_eq!(ScoreFormat::Fixed(3).render(0.25), "0.250");
    /// ```
    #[must_use]
    pub fn render(self, score: f64) -> String {
        match self {
            Self::Shortest => format!("{score:?}"),
            Self::Fixed(decimals) => format!("{score:.decimals$}"),
        }
    }
}

/// One alternative of a [`ResultTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct RankedAlternative {
    fields: Vec<String>,
    score: f64,
    rank: Rank,
}

impl RankedAlternative {
    pub(crate) const fn new(fields: Vec<String>, score: f64, rank: Rank) -> Self {
        Self {
            fields,
            score,
            rank,
        }
    }

    /// The input fields, verbatim.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The identifier field.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.fields.first().map_or("", String::as_str)
    }

    /// The closeness score.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// The dense rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }
}

/// The input table plus `Topsis Score` and `Rank` columns, in input row order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultTable {
    headers: Vec<String>,
    alternatives: Vec<RankedAlternative>,
}

impl ResultTable {
    pub(crate) fn new(input_headers: &[String], alternatives: Vec<RankedAlternative>) -> Self {
        let mut headers = input_headers.to_vec();
        headers.push(SCORE_COLUMN.to_owned());
        headers.push(RANK_COLUMN.to_owned());
        Self {
            headers,
            alternatives,
        }
    }

    /// All headers, the two appended columns included.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The ranked alternatives in input order.
    #[must_use]
    pub fn alternatives(&self) -> &[RankedAlternative] {
        &self.alternatives
    }

    /// Number of alternatives.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns whether the table has no alternatives.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Closeness scores in input order.
    pub fn scores(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.alternatives.iter().map(RankedAlternative::score)
    }

    /// Ranks in input order.
    pub fn ranks(&self) -> impl ExactSizeIterator<Item = Rank> + '_ {
        self.alternatives.iter().map(RankedAlternative::rank)
    }

    /// Alternatives ordered by rank, ties kept in input order.
    #[must_use]
    pub fn by_rank(&self) -> Vec<&RankedAlternative> {
        let mut ordered: Vec<&RankedAlternative> = self.alternatives.iter().collect();
        ordered.sort_by_key(|alternative| alternative.rank);
        ordered
    }

    /// Renders every row as text fields, score formatted with `format`.
    pub fn records(&self, format: ScoreFormat) -> impl Iterator<Item = Vec<String>> + '_ {
        self.alternatives.iter().map(move |alternative| {
            let mut record = alternative.fields.clone();
            record.push(format.render(alternative.score));
            record.push(alternative.rank.to_string());
            record
        })
    }
}
