pub mod config;
pub mod coordinate;
pub mod geometry;
pub mod ops;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Coordinates cannot be empty")]
    EmptyCoordinates,
    #[error("Invalid Coordinate Type: {0}")]
    InvalidCoordinateType(String),
    #[error("Dimension Mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Division By Zero: {0}")]
    DivisionByZero(String),
    #[error("Zero Vector: {0}")]
    ZeroVector(String),
    #[error("Unrepresentable: {0}")]
    Unrepresentable(String),
    #[error("Unsupported Dimension: operation is defined for 3 dimensions, found {found}")]
    UnsupportedDimension { found: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// Logs a rejected operation and hands the error back for returning.
pub(crate) fn reject(err: VectorError) -> VectorError {
    tracing::debug!(error = %err, "vector operation rejected");
    err
}

// Re-export main types for convenience
pub use bigdecimal::BigDecimal;
pub use config::GeometryConfig;
pub use coordinate::Coordinate;
pub use geometry::AngleUnit;
pub use vector::Vector;
