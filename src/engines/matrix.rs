//! Bottom-up tabulating engine.
//!
//! Fills the complete `(m+1) x (n+1)` prefix-distance table in row-major
//! order and reads the answer out of the bottom-right cell. Predictable
//! layout, no recursion: the workhorse default.

use crate::error::DistanceError;
use crate::table::CostTable;
use crate::traits::EditDistance;
use crate::utils::ensure_within_budget;

/// Tabulating Levenshtein engine.
///
/// One call allocates one [`CostTable`] and drops it on return; the engine
/// itself holds only configuration and is freely shared across calls.
///
/// ```
/// use lev_dp::{EditDistance, MatrixDistance};
///
/// let engine = MatrixDistance::new();
/// assert_eq!(engine.distance_str("kitten", "sitting")?, 3);
/// assert_eq!(engine.distance(b"flaw", b"lawn")?, 2);
/// # Ok::<(), lev_dp::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatrixDistance {
    cell_budget: Option<usize>,
}

impl MatrixDistance {
    /// Engine with no cell budget: any input that fits in memory is accepted.
    pub fn new() -> Self {
        Self { cell_budget: None }
    }

    /// Engine that refuses inputs whose table would exceed `budget` cells.
    ///
    /// The table for lengths `m` and `n` takes `(m+1) * (n+1)` cells; a
    /// call over budget fails with [`DistanceError::BudgetExceeded`] before
    /// allocating anything.
    pub fn with_cell_budget(budget: usize) -> Self {
        Self {
            cell_budget: Some(budget),
        }
    }

    /// The configured cell budget, if any.
    pub fn cell_budget(&self) -> Option<usize> {
        self.cell_budget
    }
}

impl EditDistance for MatrixDistance {
    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> Result<usize, DistanceError> {
        let m = s.len();
        let n = t.len();
        ensure_within_budget(m, n, self.cell_budget)?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("matrix_fill", rows = m + 1, cols = n + 1);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = CostTable::with_base_cases(m, n);
        for i in 1..=m {
            for j in 1..=n {
                let cost = usize::from(s[i - 1] != t[j - 1]);
                let deletion = table.get(i - 1, j) + 1;
                let insertion = table.get(i, j - 1) + 1;
                let substitution = table.get(i - 1, j - 1) + cost;
                table.set(i, j, deletion.min(insertion).min(substitution));
            }
        }
        Ok(table.corner())
    }
}
