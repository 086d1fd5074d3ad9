//! Top-down memoized engine.
//!
//! Decomposes the problem by suffix position: `remaining(i, j)` is the
//! distance between `s[i..]` and `t[j..]`. A per-call map keyed by the
//! position pair caches every solved subproblem, so each distinct `(i, j)`
//! is evaluated at most once and total work stays O(m*n) despite the
//! exponential shape of the bare recursion tree.
//!
//! Call depth grows with `m + n` in the worst case. For adversarially long
//! inputs prefer [`MatrixDistance`](crate::engines::matrix::MatrixDistance)
//! or run on a thread with a deeper stack; the answer is identical either
//! way.

use std::collections::HashMap;

use crate::error::DistanceError;
use crate::traits::EditDistance;
use crate::utils::ensure_within_budget;

/// Memoized recursive Levenshtein engine.
///
/// The memo map is created empty for each top-level call and dropped when
/// it returns; nothing is shared across calls, so one engine value can
/// serve concurrent callers.
///
/// ```
/// use lev_dp::{EditDistance, MemoizedDistance};
///
/// let engine = MemoizedDistance::new();
/// assert_eq!(engine.distance_str("kitten", "sitting")?, 3);
/// # Ok::<(), lev_dp::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoizedDistance {
    cell_budget: Option<usize>,
}

impl MemoizedDistance {
    /// Engine with no cell budget.
    pub fn new() -> Self {
        Self { cell_budget: None }
    }

    /// Engine that refuses inputs whose worst-case memo population,
    /// `(m+1) * (n+1)` entries, would exceed `budget`.
    ///
    /// The accounting matches the tabulating engine cell for cell, so a
    /// budget admits the same inputs under either strategy.
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

impl EditDistance for MemoizedDistance {
    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> Result<usize, DistanceError> {
        ensure_within_budget(s.len(), t.len(), self.cell_budget)?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("memo_search", m = s.len(), n = t.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut search = Search {
            s,
            t,
            cache: HashMap::new(),
        };
        Ok(search.remaining(0, 0))
    }
}

/// One top-level call's working state: the two sequences and the memo map.
struct Search<'a, T> {
    s: &'a [T],
    t: &'a [T],
    cache: HashMap<(usize, usize), usize>,
}

impl<T: PartialEq> Search<'_, T> {
    /// Distance between the suffixes `s[i..]` and `t[j..]`.
    fn remaining(&mut self, i: usize, j: usize) -> usize {
        // One side exhausted: only insertions or deletions remain.
        if i == self.s.len() || j == self.t.len() {
            return (self.s.len() - i) + (self.t.len() - j);
        }
        if let Some(&hit) = self.cache.get(&(i, j)) {
            return hit;
        }
        let result = if self.s[i] == self.t[j] {
            self.remaining(i + 1, j + 1)
        } else {
            let insertion = self.remaining(i, j + 1);
            let deletion = self.remaining(i + 1, j);
            let substitution = self.remaining(i + 1, j + 1);
            1 + insertion.min(deletion).min(substitution)
        };
        self.cache.insert((i, j), result);
        result
    }
}
