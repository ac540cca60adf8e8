use thiserror::Error;

/// Top-level error type for rope curve computations.
#[derive(Debug, Error)]
pub enum RopeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("expected {expected} control points, got {actual}")]
    ControlPointCount { expected: usize, actual: usize },

    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Errors related to solver operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to curve sampling.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RopeError`].
pub type Result<T> = std::result::Result<T, RopeError>;
