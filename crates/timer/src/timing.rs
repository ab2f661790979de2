//! Scope timing: the `Timer` and its RAII guard

use crate::clock::{Clock, MonotonicClock};
use crate::config::{TimerConfig, DEFAULT_LABEL};
use crate::logger::{Logger, TracingLogger};
use std::ops::Deref;
use std::time::Duration;

/// Minimum width of the label column in the timer line.
pub const LABEL_WIDTH: usize = 12;

/// Format the line logged when a measurement ends.
///
/// The label is left-aligned and padded to [`LABEL_WIDTH`] characters;
/// longer labels are kept whole. Seconds and minutes use two decimals.
///
/// ```rust
/// use timer::{format_elapsed, Duration};
///
/// let line = format_elapsed("Code1", Duration::from_secs(1));
/// assert_eq!(line, "* Code1        | 1.00s (0.02m)");
/// ```
pub fn format_elapsed(name: &str, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    format!(
        "* {name:<width$} | {secs:.2}s ({mins:.2}m)",
        width = LABEL_WIDTH,
        mins = secs / 60.0
    )
}

/// A labelled timer that logs how long a scope took.
///
/// Entering the timer with [`enter`](Timer::enter) records the start
/// reading and hands back a [`TimerGuard`]. Dropping the guard ends the
/// measurement and logs exactly one line through the timer's [`Logger`],
/// whether the scope finished normally, returned early, or unwound from a
/// panic.
///
/// The guard borrows the timer mutably, so one instance can only run one
/// measurement at a time. Entering again after the guard is gone starts a
/// fresh interval.
///
/// # Example
///
/// ```rust
/// use timer::{CaptureLogger, Timer};
///
/// let logger = CaptureLogger::new();
/// let mut timer = Timer::with_logger("load", logger.clone());
///
/// let rows = timer.time(|| vec![1, 2, 3]);
///
/// assert_eq!(rows, vec![1, 2, 3]);
/// assert_eq!(logger.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Timer<L = TracingLogger, C = MonotonicClock> {
    name: String,
    start_time: Option<Duration>,
    logger: L,
    clock: C,
}

impl Timer {
    /// Create a timer with the default label, logging through `tracing`.
    #[inline]
    pub fn new() -> Self {
        Self::named(DEFAULT_LABEL)
    }

    /// Create a timer with the given label, logging through `tracing`.
    #[inline]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_logger(name, TracingLogger::new())
    }

    /// Create a timer from configuration.
    pub fn from_config(config: &TimerConfig) -> Self {
        Self::with_logger(config.name.clone(), TracingLogger::with_level(config.level))
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Logger> Timer<L> {
    /// Create a timer that hands its line to `logger`.
    #[inline]
    pub fn with_logger(name: impl Into<String>, logger: L) -> Self {
        Self::with_parts(name, logger, MonotonicClock::new())
    }
}

impl<L: Logger, C: Clock> Timer<L, C> {
    /// Create a timer with an explicit logger and clock.
    pub fn with_parts(name: impl Into<String>, logger: L, clock: C) -> Self {
        Self {
            name: name.into(),
            start_time: None,
            logger,
            clock,
        }
    }

    /// Get the label of this timer.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clock reading taken at the most recent entry, if any.
    #[inline]
    pub fn start_time(&self) -> Option<Duration> {
        self.start_time
    }

    /// Get the logger this timer reports to.
    #[inline]
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Get the clock this timer reads.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start a measurement.
    ///
    /// The returned guard logs the elapsed time when dropped.
    pub fn enter(&mut self) -> TimerGuard<'_, L, C> {
        tracing::trace!(target: "timer", name = %self.name, "timer entered");
        self.start_time = Some(self.clock.now());
        TimerGuard { timer: self }
    }

    /// Run `f` inside one measurement and return its value unchanged.
    ///
    /// Errors returned by `f` and panics raised in it reach the caller
    /// untouched, after the line has been logged.
    pub fn time<R>(&mut self, f: impl FnOnce() -> R) -> R {
        let _scope = self.enter();
        f()
    }

    fn elapsed_since_start(&self) -> Duration {
        match self.start_time {
            Some(start) => self.clock.now().saturating_sub(start),
            None => Duration::ZERO,
        }
    }
}

/// An active measurement on a [`Timer`].
///
/// Dereferences to the timer so the label and start reading can be
/// inspected inside the scope. Logs on drop.
#[must_use = "the measurement ends as soon as the guard is dropped"]
pub struct TimerGuard<'a, L: Logger, C: Clock> {
    timer: &'a mut Timer<L, C>,
}

impl<L: Logger, C: Clock> TimerGuard<'_, L, C> {
    /// Time elapsed since the measurement started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed_since_start()
    }
}

impl<L: Logger, C: Clock> Deref for TimerGuard<'_, L, C> {
    type Target = Timer<L, C>;

    fn deref(&self) -> &Self::Target {
        self.timer
    }
}

impl<L: Logger, C: Clock> Drop for TimerGuard<'_, L, C> {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        self.timer
            .logger
            .log(&format_elapsed(&self.timer.name, elapsed));
    }
}

/// Macro for easy scope timing.
///
/// Times the rest of the enclosing block and logs when the block ends.
/// Without arguments the default label is used.
///
/// # Example
///
/// ```rust
/// use timer::{time_scope, CaptureLogger};
///
/// let logger = CaptureLogger::new();
/// {
///     time_scope!("work", logger.clone());
///     // ... work ...
/// } // Timer logs here
/// assert_eq!(logger.len(), 1);
/// ```
#[macro_export]
macro_rules! time_scope {
    () => {
        let mut __timer = $crate::Timer::new();
        let _scope = __timer.enter();
    };
    ($name:expr) => {
        let mut __timer = $crate::Timer::named($name);
        let _scope = __timer.enter();
    };
    ($name:expr, $logger:expr) => {
        let mut __timer = $crate::Timer::with_logger($name, $logger);
        let _scope = __timer.enter();
    };
}
