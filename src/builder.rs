//! The thin caller over the engines: pick a strategy, carry a budget.

use crate::engines::matrix::MatrixDistance;
use crate::engines::memo::MemoizedDistance;
use crate::error::DistanceError;
use crate::traits::EditDistance;

/// Which engine a [`Distance`] front-end dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Bottom-up table fill. Bounded stack, predictable layout; the default.
    #[default]
    Matrix,
    /// Top-down memoized recursion. Touches only the subproblems the input
    /// actually reaches, at the price of call depth up to `m + n`.
    Memoized,
}

/// Builder for a configured [`Distance`] front-end.
///
/// ```
/// use lev_dp::{DistanceBuilder, EditDistance, Strategy};
///
/// let distance = DistanceBuilder::new()
///     .with_strategy(Strategy::Memoized)
///     .with_cell_budget(1 << 20)
///     .build();
/// assert_eq!(distance.distance_str("kitten", "sitting")?, 3);
/// # Ok::<(), lev_dp::DistanceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceBuilder {
    strategy: Strategy,
    cell_budget: Option<usize>,
}

impl DistanceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Cap the DP cells, `(m+1) * (n+1)`, one call may materialize.
    pub fn with_cell_budget(mut self, budget: usize) -> Self {
        self.cell_budget = Some(budget);
        self
    }

    pub fn build(self) -> Distance {
        let Self {
            strategy,
            cell_budget,
        } = self;
        let engines = match strategy {
            Strategy::Matrix => Engines::Matrix(match cell_budget {
                Some(b) => MatrixDistance::with_cell_budget(b),
                None => MatrixDistance::new(),
            }),
            Strategy::Memoized => Engines::Memoized(match cell_budget {
                Some(b) => MemoizedDistance::with_cell_budget(b),
                None => MemoizedDistance::new(),
            }),
        };
        Distance { strategy, engines }
    }
}

/// A strategy selection frozen into a single [`EditDistance`] value.
#[derive(Debug, Clone)]
pub struct Distance {
    strategy: Strategy,
    engines: Engines,
}

#[derive(Debug, Clone)]
enum Engines {
    Matrix(MatrixDistance),
    Memoized(MemoizedDistance),
}

impl Distance {
    /// The strategy this front-end dispatches to.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl EditDistance for Distance {
    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> Result<usize, DistanceError> {
        match &self.engines {
            Engines::Matrix(engine) => engine.distance(s, t),
            Engines::Memoized(engine) => engine.distance(s, t),
        }
    }
}
