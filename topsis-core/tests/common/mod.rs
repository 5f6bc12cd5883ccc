//! Helpers shared by the `topsis-core` integration tests.
#![expect(dead_code, reason = "each test crate uses a different subset")]

use proptest::prelude::*;
use test_strategy::Arbitrary;
use topsis_core::RawTable;

/// Builds a [`RawTable`] from string literals.
pub fn raw_table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|h| (*h).to_owned()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_owned()).collect())
            .collect(),
    )
}

/// Parses CSV text with a header line into a [`RawTable`]; no quoting.
pub fn table_from_csv(text: &str) -> RawTable {
    let mut lines = text.lines().filter(|line| !line.is_empty());
    let split = |line: &str| line.split(',').map(str::to_owned).collect::<Vec<_>>();
    let headers = lines.next().map(split).unwrap_or_default();
    RawTable::new(headers, lines.map(split).collect())
}

/// Direction of a generated criterion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub enum Direction {
    /// Rendered as `+`.
    Beneficial,
    /// Rendered as `-`.
    Cost,
}

impl Direction {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Beneficial => "+",
            Self::Cost => "-",
        }
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Beneficial => Self::Cost,
            Self::Cost => Self::Beneficial,
        }
    }
}

/// A generated decision problem.
#[derive(Clone, Debug)]
pub struct Decision {
    pub values: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
    pub directions: Vec<Direction>,
}

impl Decision {
    /// Number of criteria.
    pub fn criteria(&self) -> usize {
        self.weights.len()
    }

    /// Renders the problem as a raw table with identifiers `alt0`, `alt1`, ...
    pub fn table(&self) -> RawTable {
        let mut headers = vec!["Alternative".to_owned()];
        headers.extend((0..self.criteria()).map(|c| format!("C{c}")));
        let rows = self
            .values
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let mut fields = vec![format!("alt{index}")];
                fields.extend(row.iter().map(|value| format!("{value:e}")));
                fields
            })
            .collect();
        RawTable::new(headers, rows)
    }

    pub fn weights_spec(&self) -> String {
        join(self.weights.iter().map(|weight| format!("{weight:e}")))
    }

    pub fn impacts_spec(&self) -> String {
        join(self.directions.iter().map(|d| d.symbol().to_owned()))
    }

    /// Flips the direction of `column` and reflects its values around the
    /// column mean.
    pub fn mirrored(&self, column: usize) -> Self {
        let count: f64 = self.values.iter().map(|_| 1.0).sum();
        let mean = self
            .values
            .iter()
            .filter_map(|row| row.get(column))
            .sum::<f64>()
            / count;
        let mut mirrored = self.clone();
        for row in &mut mirrored.values {
            if let Some(value) = row.get_mut(column) {
                *value = 2.0 * mean - *value;
            }
        }
        if let Some(direction) = mirrored.directions.get_mut(column) {
            *direction = direction.flipped();
        }
        mirrored
    }

    /// The same problem with every weight multiplied by `factor`.
    pub fn reweighted(&self, factor: f64) -> Self {
        let mut scaled = self.clone();
        for weight in &mut scaled.weights {
            *weight *= factor;
        }
        scaled
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(",")
}

fn decisions<V, W>(cell: V, weight: W) -> impl Strategy<Value = Decision>
where
    V: Strategy<Value = f64> + Clone,
    W: Strategy<Value = f64> + Clone,
{
    (2_usize..=8, 2_usize..=5)
        .prop_flat_map(move |(rows, criteria)| {
            (
                prop::collection::vec(prop::collection::vec(cell.clone(), criteria), rows),
                prop::collection::vec(weight.clone(), criteria),
                prop::collection::vec(any::<Direction>(), criteria),
            )
        })
        .prop_map(|(values, weights, directions)| Decision {
            values,
            weights,
            directions,
        })
}

/// Positive numbers spread evenly over `10^-300..10^300` by exponent.
pub fn magnitude() -> impl Strategy<Value = f64> + Clone {
    (-300.0_f64..300.0).prop_map(|exponent| 10_f64.powf(exponent))
}

/// Decision problems with 2..=8 alternatives and 2..=5 criteria, values in
/// `[1, 1000)` and weights in `[0.1, 5)`.
pub fn decision_strategy() -> impl Strategy<Value = Decision> {
    decisions(1.0_f64..1_000.0, 0.1_f64..5.0)
}

/// Like [`decision_strategy`], but values and weights span six hundred
/// orders of magnitude.
pub fn wide_decision_strategy() -> impl Strategy<Value = Decision> {
    decisions(magnitude(), magnitude())
}
