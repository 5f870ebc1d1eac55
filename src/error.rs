//! Error types for the meteo-features library.

use thiserror::Error;

/// Result type alias for feature-engineering operations.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors that can occur while building weather features.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Required input columns are absent from the frame.
    #[error("missing required columns: {columns:?}")]
    MissingColumns { columns: Vec<String> },

    /// A named column was expected on the frame but not found.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Column length does not match the timestamp count.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),
}
