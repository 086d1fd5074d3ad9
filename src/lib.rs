//! Levenshtein distance, two ways.
//!
//! This crate computes the exact Levenshtein (edit) distance between two
//! sequences: the minimum number of single-unit insertions, deletions, and
//! substitutions transforming one into the other. Two engines implement the
//! same contract and are interchangeable behind the [`EditDistance`] trait:
//!
//! 1. [`MatrixDistance`] tabulates the full `(m+1) x (n+1)` prefix-distance
//!    grid bottom-up and reads the bottom-right cell.
//! 2. [`MemoizedDistance`] recurses top-down over suffix positions, caching
//!    every solved subproblem in a per-call memo map.
//!
//! Both run in O(m*n) time and space and agree on every input; the choice
//! trades explicit tabulation against lazy recursion.
//!
//! ## Quick start
//! ```
//! use lev_dp::{EditDistance, MatrixDistance, MemoizedDistance};
//!
//! let table = MatrixDistance::new();
//! let memo = MemoizedDistance::new();
//! assert_eq!(table.distance_str("kitten", "sitting")?, 3);
//! assert_eq!(memo.distance_str("kitten", "sitting")?, 3);
//! # Ok::<(), lev_dp::DistanceError>(())
//! ```
//!
//! ## Resource budgets
//! Engines are total over finite inputs; the only failure mode is resource
//! exhaustion. An engine built with a cell budget refuses, up front, any
//! input pair whose `(m+1) * (n+1)` working set would exceed it:
//! ```
//! use lev_dp::{DistanceError, EditDistance, MatrixDistance};
//!
//! let engine = MatrixDistance::with_cell_budget(1_000);
//! let long = "x".repeat(100);
//! assert!(matches!(
//!     engine.distance_str(&long, &long),
//!     Err(DistanceError::BudgetExceeded { .. })
//! ));
//! ```
//!
//! ## Extras
//! - [`DistanceBuilder`] configures a strategy-dispatching front-end.
//! - With feature `parallel`, [`engines::diagonal`] adds an anti-diagonal
//!   wavefront engine that fills independent diagonals concurrently.
//! - With feature `tracing`, the fill and search phases emit trace spans.

pub mod builder;
pub mod engines;
pub mod error;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::{Distance, DistanceBuilder, Strategy};
pub use crate::engines::matrix::MatrixDistance;
pub use crate::engines::memo::MemoizedDistance;
pub use crate::error::DistanceError;
pub use crate::traits::EditDistance;
