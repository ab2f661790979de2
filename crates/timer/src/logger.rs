//! Logging collaborators that receive timer lines

use crate::config::LogLevel;
use std::sync::{Arc, Mutex, PoisonError};

/// Sink for the line a timer emits when a measurement ends.
///
/// The timer relies on nothing beyond this single call: no return value,
/// no failure contract.
pub trait Logger {
    /// Write one message to the sink.
    fn log(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    #[inline]
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[inline]
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[inline]
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Forwards timer lines to `tracing` under the `timer` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    /// Create a logger emitting at `INFO`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger emitting at the given level.
    pub fn with_level(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level the lines are emitted at.
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        match self.level {
            LogLevel::Trace => tracing::trace!(target: "timer", "{}", message),
            LogLevel::Debug => tracing::debug!(target: "timer", "{}", message),
            LogLevel::Info => tracing::info!(target: "timer", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "timer", "{}", message),
            LogLevel::Error => tracing::error!(target: "timer", "{}", message),
        }
    }
}

/// Records every line in memory.
///
/// Clones share one buffer, so a handle kept by the caller sees what the
/// timer logged.
#[derive(Debug, Clone, Default)]
pub struct CaptureLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureLogger {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Logger for CaptureLogger {
    fn log(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// Adapts a closure into a [`Logger`].
///
/// ```rust
/// use timer::{FnLogger, Logger};
///
/// let logger = FnLogger(|line: &str| println!("{line}"));
/// logger.log("* done");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnLogger<F>(pub F);

impl<F: Fn(&str)> Logger for FnLogger<F> {
    #[inline]
    fn log(&self, message: &str) {
        (self.0)(message);
    }
}
