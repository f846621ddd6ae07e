use safepath_core::{Cell, GridError};
use thiserror::Error;

/// Failure of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The matrix is empty, ragged, or disagrees with its declared shape.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(#[from] GridError),
    /// The search space is exhausted without reaching the target.
    #[error("no path from {origin} to {target}")]
    Unreachable { origin: Cell, target: Cell },
}

impl SolveError {
    /// Whether this is the [`Unreachable`](Self::Unreachable) outcome, as
    /// opposed to rejected input.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}
