//! Synthetic decision tables for benchmarking.
//!
//! Tables are generated eagerly from a seeded RNG so every benchmark run ranks
//! identical input. Cells are rendered as text because the ranking entry point
//! starts from a raw table.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use topsis_core::RawTable;

/// Errors that may occur during synthetic table generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested alternative count was zero.
    #[error("alternative count must be greater than zero")]
    ZeroAlternatives,
    /// Fewer than two criteria were requested.
    #[error("at least two criteria are required, got {criteria}")]
    TooFewCriteria {
        /// The requested criterion count.
        criteria: usize,
    },
}

/// Configuration for synthetic table generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of alternatives to generate.
    pub alternatives: usize,
    /// Number of criterion columns.
    pub criteria: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A random decision table with matching weight and impact specifications.
///
/// Criterion values are drawn from `[1, 1000)`, weights from `[0.5, 5)`, and
/// impacts alternate between `+` and `-`.
///
/// # Examples
///
/// ```
/// use topsis_benches::source::{SyntheticConfig, SyntheticTable};
/// use topsis_core::compute_ranking;
///
/// let config = SyntheticConfig { alternatives: 10, criteria: 4, seed: 42 };
/// let synthetic = SyntheticTable::generate(&config).expect("valid config");
/// let result = compute_ranking(
///     synthetic.table(),
///     synthetic.weights_spec(),
///     synthetic.impacts_spec(),
/// )
/// .expect("synthetic tables rank");
/// assert_eq!(result.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticTable {
    table: RawTable,
    weights_spec: String,
    impacts_spec: String,
}

impl SyntheticTable {
    /// Generates a table from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroAlternatives`] if `alternatives` is zero,
    /// or [`SyntheticError::TooFewCriteria`] if `criteria` is below two.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.alternatives == 0 {
            return Err(SyntheticError::ZeroAlternatives);
        }
        if config.criteria < 2 {
            return Err(SyntheticError::TooFewCriteria {
                criteria: config.criteria,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut headers = Vec::with_capacity(config.criteria.saturating_add(1));
        headers.push("Alternative".to_owned());
        headers.extend((0..config.criteria).map(|c| format!("C{c}")));

        let rows = (0..config.alternatives)
            .map(|index| {
                let mut row = Vec::with_capacity(config.criteria.saturating_add(1));
                row.push(format!("A{index}"));
                row.extend(
                    (0..config.criteria).map(|_| rng.gen_range(1.0_f64..1_000.0).to_string()),
                );
                row
            })
            .collect();

        let weights: Vec<String> = (0..config.criteria)
            .map(|_| rng.gen_range(0.5_f64..5.0).to_string())
            .collect();
        let impacts: Vec<&str> = (0..config.criteria)
            .map(|c: usize| if c.is_multiple_of(2) { "+" } else { "-" })
            .collect();

        Ok(Self {
            table: RawTable::new(headers, rows),
            weights_spec: weights.join(","),
            impacts_spec: impacts.join(","),
        })
    }

    /// The generated raw table.
    #[must_use]
    pub const fn table(&self) -> &RawTable {
        &self.table
    }

    /// Comma-separated weights, one per criterion.
    #[must_use]
    pub fn weights_spec(&self) -> &str {
        &self.weights_spec
    }

    /// Comma-separated impacts, one per criterion.
    #[must_use]
    pub fn impacts_spec(&self) -> &str {
        &self.impacts_spec
    }
}
