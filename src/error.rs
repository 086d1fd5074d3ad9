//! Error conditions surfaced by the distance engines.
//!
//! The distance computation itself is total: any two finite sequences have a
//! well-defined edit distance. The only failures worth naming are resource
//! exhaustion conditions, raised *before* any work is done so a call either
//! runs to completion or does nothing.

use std::error::Error;
use std::fmt;

/// Failure modes of a distance computation.
///
/// Both variants are detected up front from the input lengths alone; no
/// partially filled table or partially populated cache is ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The computation would materialize more DP cells than the configured
    /// budget allows.
    ///
    /// `cells` is the `(m+1)·(n+1)` cell count the inputs require; `budget`
    /// is the configured ceiling.
    BudgetExceeded { cells: usize, budget: usize },

    /// The `(m+1)·(n+1)` cell count does not fit in `usize`.
    ///
    /// Inputs this long cannot be tabulated or memoized on this platform at
    /// all, budget or not.
    CellCountOverflow { rows: usize, cols: usize },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::BudgetExceeded { cells, budget } => {
                write!(
                    f,
                    "distance computation requires {cells} DP cells, exceeding the budget of {budget}"
                )
            }
            DistanceError::CellCountOverflow { rows, cols } => {
                write!(
                    f,
                    "DP cell count {rows} x {cols} overflows the addressable range"
                )
            }
        }
    }
}

impl Error for DistanceError {}
