//! Anti-diagonal wavefront engine (feature `parallel`).
//!
//! Every cell on the anti-diagonal `k = i + j` depends only on diagonals
//! `k-1` and `k-2`, so one diagonal is a unit of parallel work: all of its
//! cells are computed concurrently, and only the last two finished
//! diagonals stay live. An extension beyond the two core engines; it must
//! agree with them on every input.

use rayon::prelude::*;

use crate::error::DistanceError;
use crate::utils::ensure_within_budget;

/// Wavefront Levenshtein engine.
///
/// Not an [`EditDistance`](crate::traits::EditDistance) implementor: the
/// concurrent sweep reads both sequences from every worker, so the unit
/// type needs the stricter `Sync` bound that the shared contract does not
/// impose.
///
/// ```
/// use lev_dp::engines::diagonal::DiagonalDistance;
///
/// let engine = DiagonalDistance::new();
/// assert_eq!(engine.distance(b"kitten", b"sitting")?, 3);
/// # Ok::<(), lev_dp::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiagonalDistance {
    cell_budget: Option<usize>,
}

impl DiagonalDistance {
    /// Engine with no cell budget.
    pub fn new() -> Self {
        Self { cell_budget: None }
    }

    /// Engine that refuses inputs visiting more than `budget` cells, with
    /// the same `(m+1) * (n+1)` accounting as the other engines.
    pub fn with_cell_budget(budget: usize) -> Self {
        Self {
            cell_budget: Some(budget),
        }
    }

    /// The configured cell budget, if any.
    pub fn cell_budget(&self) -> Option<usize> {
        self.cell_budget
    }

    /// Distance between `s` and `t`, sweeping one anti-diagonal at a time.
    pub fn distance<T>(&self, s: &[T], t: &[T]) -> Result<usize, DistanceError>
    where
        T: PartialEq + Sync,
    {
        let m = s.len();
        let n = t.len();
        ensure_within_budget(m, n, self.cell_budget)?;
        if m == 0 {
            return Ok(n);
        }
        if n == 0 {
            return Ok(m);
        }

        // Diagonal vectors are indexed by the row i of each cell; entries
        // outside a diagonal's valid row range are stale and never read.
        let mut prev2 = vec![0usize; m + 1]; // diagonal k-2
        let mut prev1 = vec![0usize; m + 1]; // diagonal k-1
        let mut curr = vec![0usize; m + 1];

        // k = 0 holds only (0,0); k = 1 holds (0,1) and (1,0).
        prev2[0] = 0;
        prev1[0] = 1;
        prev1[1] = 1;

        for k in 2..=(m + n) {
            let lo = k.saturating_sub(n);
            let hi = m.min(k);

            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("wavefront_sweep", k, width = hi - lo + 1);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let (front2, front1) = (&prev2, &prev1);
            curr[lo..=hi].par_iter_mut().enumerate().for_each(|(offset, cell)| {
                let i = lo + offset;
                let j = k - i;
                *cell = if i == 0 {
                    j
                } else if j == 0 {
                    i
                } else {
                    let cost = usize::from(s[i - 1] != t[j - 1]);
                    let deletion = front1[i - 1] + 1;
                    let insertion = front1[i] + 1;
                    let substitution = front2[i - 1] + cost;
                    deletion.min(insertion).min(substitution)
                };
            });

            std::mem::swap(&mut prev2, &mut prev1);
            std::mem::swap(&mut prev1, &mut curr);
        }

        // Diagonal m+n holds the single cell (m, n).
        Ok(prev1[m])
    }

    /// Distance between two strings compared by Unicode scalar value, as in
    /// [`EditDistance::distance_str`](crate::traits::EditDistance::distance_str).
    pub fn distance_str(&self, s: &str, t: &str) -> Result<usize, DistanceError> {
        let s: Vec<char> = s.chars().collect();
        let t: Vec<char> = t.chars().collect();
        self.distance(&s, &t)
    }
}
