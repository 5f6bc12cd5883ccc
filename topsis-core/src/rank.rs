//! Dense ranking of closeness scores.

use std::{cmp::Ordering, fmt};

/// Dense rank of an alternative; 1 is best.
///
/// # Examples
/// ```
/// use topsis_core::Rank;
///
/// let rank = Rank::new(2);
/// assert_eq!(rank.get(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(usize);

impl Rank {
    /// Creates a rank.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(rank: usize) -> Self { Self(rank) }

    /// Returns the numeric rank.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Assigns dense ranks to `scores`, highest score first.
///
/// Bit-identical scores share a rank and the next distinct score takes the
/// next rank, so the ranks used are exactly `1..=k` for `k` distinct scores.
///
/// # Examples
/// ```
/// use topsis_core::{Rank, dense_ranks};
///
/// let ranks = dense_ranks(&[0.4, 0.9, 0.4, 0.1]);
/// let ranks: Vec<usize> = ranks.into_iter().map(Rank::get).collect();
/// assert_eq!(ranks, vec![2, 1, 2, 3]);
/// ```
#[must_use]
pub fn dense_ranks(scores: &[f64]) -> Vec<Rank> {
    let mut distinct = scores.to_vec();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup_by(|a, b| a.to_bits() == b.to_bits());

    scores
        .iter()
        .map(|score| {
            let better = distinct.partition_point(|d| d.total_cmp(score) == Ordering::Greater);
            Rank(better + 1)
        })
        .collect()
}
