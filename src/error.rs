//! Error types for the sweep harness.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for harness operations.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Bad size, bad n or empty sequence
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result does not fit the candidate's integer type
    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BenchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn overflow(msg: impl Into<String>) -> Self {
        Self::ArithmeticOverflow(msg.into())
    }
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;
