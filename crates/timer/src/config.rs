//! Timer configuration

use crate::error::{TimerError, TimerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used when a timer is not given one.
pub const DEFAULT_LABEL: &str = "Elapsed time";

/// Severity the timer line is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(TimerError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Timer settings.
///
/// Any label is accepted, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerConfig {
    /// Label printed at the start of the timer line.
    pub name: String,

    /// Level the line is logged at when going through `tracing`.
    pub level: LogLevel,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LABEL.to_string(),
            level: LogLevel::default(),
        }
    }
}

impl TimerConfig {
    /// Create a config with the default label and level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> TimerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this config to JSON.
    pub fn to_json(&self) -> TimerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
