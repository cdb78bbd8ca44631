use thiserror::Error;

/// Top-level error type for circle union computations.
#[derive(Debug, Error)]
pub enum CircleUnionError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("circle radius must not be negative, got {radius}")]
    NegativeRadius { radius: f64 },

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to union operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("too many circles: {count} exceeds the configured maximum of {max}")]
    TooManyCircles { count: usize, max: usize },
}

/// Convenience type alias for results using [`CircleUnionError`].
pub type Result<T> = std::result::Result<T, CircleUnionError>;
