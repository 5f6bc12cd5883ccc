//! Dense row-major storage for criterion values.

/// Row-major matrix of `f64` values; rows are alternatives, columns criteria.
///
/// # Examples
/// ```
/// use topsis_core::Matrix;
///
/// let matrix = Matrix::from_rows(2, vec![vec![1.0, 2.0], vec![3.0, 4.0]])
///     .expect("rows share a width");
/// assert_eq!(matrix.row(1), Some(&[3.0, 4.0][..]));
/// assert_eq!(matrix.column(0).collect::<Vec<_>>(), vec![1.0, 3.0]);
/// assert!(Matrix::from_rows(2, vec![vec![1.0], vec![3.0, 4.0]]).is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from rows that all have `cols` values, or `None` when
    /// any row has a different width.
    #[must_use]
    pub fn from_rows(cols: usize, rows: Vec<Vec<f64>>) -> Option<Self> {
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let row_count = rows.len();
        Some(Self {
            rows: row_count,
            cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_flat(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows * cols, "flat buffer size mismatch");
        Self { rows, cols, values }
    }

    /// Number of rows (alternatives).
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (criteria).
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.cols {
            return None;
        }
        self.row(row).and_then(|values| values.get(col).copied())
    }

    /// Returns a row slice, or `None` when out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.rows_iter().nth(row)
    }

    /// Iterates over row slices in order.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        // `chunks_exact(0)` panics, and a zero-width matrix has no values.
        self.values.chunks_exact(self.cols.max(1))
    }

    /// Iterates over the values of column `col` from top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        let take = if col < self.cols { self.rows } else { 0 };
        self.values
            .iter()
            .skip(col)
            .step_by(self.cols.max(1))
            .take(take)
            .copied()
    }

    /// Returns the underlying row-major buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
