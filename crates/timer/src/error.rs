//! Error types for timer configuration.

use thiserror::Error;

/// Errors raised while building a timer from configuration.
///
/// Measurement itself never fails; these only come from parsing settings.
#[derive(Debug, Error)]
pub enum TimerError {
    /// Configuration document could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Unknown log level name
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

/// Result type for timer configuration.
pub type TimerResult<T> = Result<T, TimerError>;
