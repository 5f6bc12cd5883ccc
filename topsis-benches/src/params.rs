//! Benchmark parameter types.

use std::fmt;

/// Shape of a ranking benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct RankingBenchParams {
    /// Number of alternatives (rows).
    pub alternatives: usize,
    /// Number of criterion columns.
    pub criteria: usize,
}

impl fmt::Display for RankingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},c={}", self.alternatives, self.criteria)
    }
}
