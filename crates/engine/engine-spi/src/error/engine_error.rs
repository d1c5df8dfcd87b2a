//! Engine error types
//!
//! Defines the standardized error type for all engine operations.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during risk index computation and forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No record matches the requested key
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too few qualifying historical periods for trend estimation
    #[error("Insufficient history: need at least {required} periods, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// Missing or malformed identifying fields in a request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The scorer collaborator is not ready to serve predictions
    #[error("Scorer unavailable: {0}")]
    ScorerUnavailable(String),

    /// An aggregation group contains no entities
    #[error("No data available for aggregation")]
    NoData,
}
