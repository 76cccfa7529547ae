//! Data error types.

use thiserror::Error;

/// Data source errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Invalid generator or source configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// Source exists but cannot serve data
    #[error("Data source '{source_name}' unavailable: {reason}")]
    Unavailable { source_name: String, reason: String },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
