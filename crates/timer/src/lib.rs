//! Scoped Timing
//!
//! This crate measures elapsed wall-clock time around a block of code or a
//! function call and logs a one-line summary when the measurement ends:
//! - RAII scope timing through [`Timer::enter`] and [`time_scope!`]
//! - Closure timing through [`Timer::time`]
//! - Function wrapping through [`timed`] and the [`timed!`] macro
//!
//! Every measurement produces exactly one line of the form
//! `* <label> | <secs>s (<mins>m)`, handed to an injected [`Logger`].
//!
//! # Example
//!
//! ```rust
//! use timer::{CaptureLogger, Timer};
//!
//! let logger = CaptureLogger::new();
//! let mut timer = Timer::with_logger("Code1", logger.clone());
//! {
//!     let _scope = timer.enter();
//!     // ... work ...
//! }
//! assert_eq!(logger.len(), 1);
//! assert!(logger.lines()[0].starts_with("* Code1        | "));
//! ```

mod clock;
mod config;
mod decorator;
mod error;
mod logger;
mod timing;

pub use clock::*;
pub use config::*;
pub use decorator::*;
pub use error::*;
pub use logger::*;
pub use timing::*;

/// Re-export for convenience
pub use std::time::Duration;
