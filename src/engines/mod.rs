//! The distance engines.
//!
//! Each module implements the same contract with a different evaluation
//! strategy:
//! - [`matrix`]  : bottom-up fill of the full prefix-distance table.
//! - [`memo`]    : top-down recursion on suffixes with a per-call memo map.
//! - `diagonal`  : anti-diagonal wavefront fill, one diagonal at a time in
//!   parallel (feature `parallel`).
//!
//! The first two are interchangeable behind
//! [`EditDistance`](crate::traits::EditDistance) and demonstrate the
//! space/time trade-off between explicit tabulation and lazy memoized
//! recursion; the wavefront variant is an extension with a stricter `Sync`
//! bound on the unit type.

pub mod matrix;
pub mod memo;

#[cfg(feature = "parallel")]
pub mod diagonal;
