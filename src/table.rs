//! The distance table used by the tabulating engine.
//!
//! A `CostTable` holds the full `(m+1) x (n+1)` grid of prefix distances as
//! one flat buffer indexed `i * cols + j`. Cell `(i, j)` is the edit
//! distance between the first `i` units of one sequence and the first `j`
//! units of the other. The table is owned by a single computation and
//! dropped when it returns.

/// Flat `(m+1) x (n+1)` grid of prefix edit distances.
#[derive(Debug, Clone)]
pub struct CostTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl CostTable {
    /// Allocate the table for sequence lengths `m` and `n` with the border
    /// base cases installed: `(i, 0) = i` and `(0, j) = j`, the cost of
    /// reaching the empty prefix by pure deletions or insertions.
    pub fn with_base_cases(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        let mut table = Self {
            cells: vec![0; rows * cols],
            rows,
            cols,
        };
        for i in 1..rows {
            table.set(i, 0, i);
        }
        for j in 1..cols {
            table.set(0, j, j);
        }
        table
    }

    /// Number of rows, `m + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: usize) {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j] = value;
    }

    /// The bottom-right cell: the edit distance between the two complete
    /// sequences once the fill has run.
    #[inline]
    pub fn corner(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}
