use thiserror::Error;

// Unified error type for banded-solve

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("invalid dimension {0}: systems must have at least one unknown")]
    InvalidDimension(usize),
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("no linear system loaded; call load_system before solve")]
    UninitializedSystem,
    #[error("zero diagonal entry at row {0}")]
    SingularDiagonal(usize),
    #[error("zero pivot at row {0}")]
    SingularPivot(usize),
    #[error("invalid experiment parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
