use safepath_core::GridError;
use safepath_paths::SolveError;
use thiserror::Error;

/// Failures that end a run.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),
    /// A solve failure other than an unreachable target.
    #[error("cannot solve grid: {0}")]
    Solve(#[from] SolveError),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code: 2 for rejected input, 1 for anything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Grid(_) | AppError::Solve(SolveError::InvalidDimensions(_)) => 2,
            AppError::Solve(_) => 1,
            AppError::Io(_) => 1,
        }
    }
}
