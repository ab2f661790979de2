//! Function wrappers that time every call

use crate::config::DEFAULT_LABEL;
use crate::logger::{Logger, TracingLogger};
use crate::timing::Timer;

/// Wrap `f` so each call is timed under the default label.
///
/// The wrapper takes the same argument and returns the same value as `f`.
/// Functions of several arguments can take them as a tuple.
///
/// ```rust
/// use timer::timed;
///
/// let area = timed(|(w, h): (u32, u32)| w * h);
/// assert_eq!(area((3, 4)), 12);
/// ```
pub fn timed<A, R>(f: impl Fn(A) -> R) -> impl Fn(A) -> R {
    timed_with(TracingLogger::new(), f)
}

/// Like [`timed`], reporting to the given logger.
pub fn timed_with<A, R, L: Logger>(logger: L, f: impl Fn(A) -> R) -> impl Fn(A) -> R {
    timed_named(DEFAULT_LABEL, logger, f)
}

/// Like [`timed_with`], logging under `name` instead of the default label.
///
/// ```rust
/// use timer::{timed_named, CaptureLogger};
///
/// let logger = CaptureLogger::new();
/// let square = timed_named("square", logger.clone(), |x: i64| x * x);
/// assert_eq!(square(9), 81);
/// assert!(logger.lines()[0].starts_with("* square       | "));
/// ```
pub fn timed_named<A, R, L: Logger>(
    name: impl Into<String>,
    logger: L,
    f: impl Fn(A) -> R,
) -> impl Fn(A) -> R {
    let name = name.into();
    move |args| Timer::with_logger(name.as_str(), &logger).time(|| f(args))
}

/// Like [`timed_with`], for closures that mutate their captures.
pub fn timed_mut<A, R, L: Logger>(logger: L, mut f: impl FnMut(A) -> R) -> impl FnMut(A) -> R {
    move |args| Timer::with_logger(DEFAULT_LABEL, &logger).time(|| f(args))
}

/// Define a function whose every call is timed.
///
/// The generated function keeps the name, visibility, attributes, doc
/// comments, parameter list and return type written in the macro. Any
/// parameter pattern is accepted (`mut x: T`, `(a, b): (T, U)`, `&self`),
/// so the macro also works on methods inside an `impl` block. Generic
/// functions and `where` clauses are not supported; wrap a closure with
/// [`timed_named`] for those.
///
/// Two optional prefixes, in either order, configure the timer:
/// - `name = expr;` sets the label (default `"Elapsed time"`)
/// - `logger = expr;` picks the [`Logger`](crate::Logger); without it the
///   line goes through `tracing`
///
/// Both expressions are evaluated on each call.
///
/// # Example
///
/// ```rust
/// use timer::{timed, CaptureLogger};
///
/// timed! {
///     /// Sum of squares up to `n`.
///     pub fn sum_squares(n: u64) -> u64 {
///         (1..=n).map(|i| i * i).sum()
///     }
/// }
///
/// assert_eq!(sum_squares(3), 14);
///
/// thread_local! {
///     static LINES: CaptureLogger = CaptureLogger::new();
/// }
///
/// timed! {
///     name = "Code1";
///     logger = LINES.with(|logger| logger.clone());
///     fn shout(text: &str) -> String {
///         text.to_uppercase()
///     }
/// }
///
/// assert_eq!(shout("hi"), "HI");
/// assert!(LINES.with(|l| l.lines())[0].starts_with("* Code1        | "));
/// ```
#[macro_export]
macro_rules! timed {
    (
        @wrap ($name:expr) ($logger:expr)
        $(#[$meta:meta])*
        $vis:vis fn $fname:ident ( $($params:tt)* ) $(-> $ret:ty)? $body:block
    ) => {
        $(#[$meta])*
        $vis fn $fname( $($params)* ) $(-> $ret)? {
            $crate::Timer::with_logger($name, $logger).time(move || $(-> $ret)? { $body })
        }
    };
    (name = $name:expr; logger = $logger:expr; $($item:tt)*) => {
        $crate::timed!(@wrap ($name) ($logger) $($item)*);
    };
    (logger = $logger:expr; name = $name:expr; $($item:tt)*) => {
        $crate::timed!(@wrap ($name) ($logger) $($item)*);
    };
    (name = $name:expr; $($item:tt)*) => {
        $crate::timed!(@wrap ($name) ($crate::TracingLogger::new()) $($item)*);
    };
    (logger = $logger:expr; $($item:tt)*) => {
        $crate::timed!(@wrap ($crate::DEFAULT_LABEL) ($logger) $($item)*);
    };
    ($(#[$meta:meta])* $vis:vis fn $($rest:tt)*) => {
        $crate::timed!(
            @wrap ($crate::DEFAULT_LABEL) ($crate::TracingLogger::new())
            $(#[$meta])* $vis fn $($rest)*
        );
    };
}
