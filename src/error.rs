use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Generation failed: {0}")]
    GenerationFailure(String),
    #[error("Problem not found: {0}")]
    NotFound(String),
    #[error("A solve request is already in progress")]
    Busy,
    #[error("Solve request cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, SolverError>;
