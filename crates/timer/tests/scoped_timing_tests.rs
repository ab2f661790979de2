//! Integration tests for scoped timing
//! Exercises the public surface the way calling code uses it: scopes,
//! closures, nesting, reuse and wrapped functions, with both the real
//! clock and a manual one.

use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, sleep};
use timer::{
    format_elapsed, time_scope, timed, timed_named, timed_with, CaptureLogger, Duration,
    ManualClock, Timer, TimerConfig,
};

/// Pull the seconds and minutes values out of a timer line.
fn parse_line(line: &str) -> (String, f64, f64) {
    let body = line.strip_prefix("* ").expect("line starts with '* '");
    let (label, rest) = body.rsplit_once(" | ").expect("label separator");
    let (secs, rest) = rest.split_once("s (").expect("seconds field");
    let mins = rest.strip_suffix("m)").expect("minutes field");
    (
        label.to_string(),
        secs.parse().expect("seconds parse"),
        mins.parse().expect("minutes parse"),
    )
}

#[test]
fn sleeping_block_is_measured_within_tolerance() {
    for millis in [0u64, 30, 120] {
        let logger = CaptureLogger::new();
        let mut timer = Timer::with_logger("sleep", logger.clone());
        timer.time(|| sleep(Duration::from_millis(millis)));

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        let (label, secs, mins) = parse_line(&lines[0]);
        assert_eq!(label, "sleep       ");
        let expected = millis as f64 / 1000.0;
        assert!((secs - expected).abs() < 0.05, "{secs}s for {expected}s");
        assert!((mins - secs / 60.0).abs() <= 0.01);
    }
}

#[test]
fn guard_exposes_timer_inside_scope() {
    let logger = CaptureLogger::new();
    let mut timer = Timer::with_logger("inspect", logger.clone());
    {
        let scope = timer.enter();
        assert_eq!(scope.name(), "inspect");
        assert!(scope.start_time().is_some());
        sleep(Duration::from_millis(5));
        assert!(scope.elapsed() >= Duration::from_millis(4));
    }
    assert_eq!(logger.len(), 1);
}

#[test]
fn nested_scopes_are_independent() {
    let logger = CaptureLogger::new();
    let clock = ManualClock::new();
    let mut outer = Timer::with_parts("outer", logger.clone(), clock.clone());
    let mut inner = Timer::with_parts("inner", logger.clone(), clock.clone());

    outer.time(|| {
        clock.advance(Duration::from_millis(500));
        inner.time(|| clock.advance(Duration::from_secs(60)));
        clock.advance(Duration::from_millis(500));
    });

    let lines = logger.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "* inner        | 60.00s (1.00m)");
    assert_eq!(lines[1], "* outer        | 61.00s (1.02m)");
}

#[test]
fn reused_timer_reports_each_interval() {
    let logger = CaptureLogger::new();
    let mut timer = Timer::with_logger("twice", logger.clone());

    timer.time(|| sleep(Duration::from_millis(80)));
    sleep(Duration::from_millis(50));
    timer.time(|| sleep(Duration::from_millis(10)));

    let lines = logger.lines();
    assert_eq!(lines.len(), 2);
    let (_, first, _) = parse_line(&lines[0]);
    let (_, second, _) = parse_line(&lines[1]);
    assert!(first >= 0.07, "first interval {first}");
    assert!(second < 0.06, "second interval should not include the first: {second}");
}

#[test]
fn panic_in_scope_is_logged_then_propagated() {
    let logger = CaptureLogger::new();
    let mut timer = Timer::with_logger("fails", logger.clone());

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _scope = timer.enter();
        let empty: Vec<u8> = Vec::new();
        empty[3]
    }));

    assert!(result.is_err());
    assert_eq!(logger.len(), 1);
    assert!(logger.lines()[0].starts_with("* fails        | "));
}

#[test]
fn error_result_passes_through_unchanged() {
    #[derive(Debug, PartialEq)]
    struct LoadError(&'static str);

    fn load(timer: &mut Timer<CaptureLogger>) -> Result<u32, LoadError> {
        let _scope = timer.enter();
        let raw: Result<u32, LoadError> = Err(LoadError("missing file"));
        let value = raw?;
        Ok(value + 1)
    }

    let logger = CaptureLogger::new();
    let mut timer = Timer::with_logger("load", logger.clone());
    assert_eq!(load(&mut timer), Err(LoadError("missing file")));
    assert_eq!(logger.len(), 1);
}

timed! {
    logger = SHARED.with(|logger| logger.clone());
    /// `x` scaled by `y`.
    fn f(x: i32, y: i32) -> i32 {
        x * y
    }
}

thread_local! {
    static SHARED: CaptureLogger = CaptureLogger::new();
}

#[test]
fn wrapped_function_matches_direct_call() {
    let direct = 7 * 2;
    assert_eq!(f(7, 2), direct);

    let lines = SHARED.with(|logger| logger.lines());
    assert_eq!(lines.len(), 1);
    let (label, _, _) = parse_line(&lines[0]);
    assert_eq!(label, "Elapsed time");
}

timed! {
    name = "Code1";
    logger = SHARED.with(|logger| logger.clone());
    fn labelled_sum(values: &[u64]) -> u64 {
        values.iter().sum()
    }
}

#[test]
fn labelled_wrapped_function_logs_custom_label() {
    assert_eq!(labelled_sum(&[1, 2, 3]), 6);

    let lines = SHARED.with(|logger| logger.lines());
    assert_eq!(lines.len(), 1);
    let (label, _, _) = parse_line(&lines[0]);
    assert_eq!(label, "Code1       ");

    let logger = CaptureLogger::new();
    let wrapped = timed_named("Code2", logger.clone(), |n: u64| n * 3);
    assert_eq!(wrapped(4), 12);
    let (label, _, _) = parse_line(&logger.lines()[0]);
    assert_eq!(label, "Code2       ");
}

#[test]
fn higher_order_wrapper_logs_once_per_call() {
    let logger = CaptureLogger::new();
    let wrapped = timed_with(logger.clone(), |(x, y): (i32, i32)| x + y);
    let plain = |(x, y): (i32, i32)| x + y;

    for args in [(1, 2), (10, -3), (0, 0)] {
        assert_eq!(wrapped(args), plain(args));
    }
    assert_eq!(logger.len(), 3);

    let untraced = timed(|s: &str| s.len());
    assert_eq!(untraced("hello"), 5);
}

#[test]
fn distinct_timers_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let logger = CaptureLogger::new();
                let mut timer = Timer::with_logger(format!("worker-{i}"), logger.clone());
                timer.time(|| sleep(Duration::from_millis(10)));
                logger.lines()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let lines = handle.join().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(&format!("* worker-{i}     | ")));
    }
}

#[test]
fn config_driven_timer_and_macro_scope() {
    let config = TimerConfig::from_json(r#"{"name": "configured"}"#).unwrap();
    let mut timer = Timer::from_config(&config);
    assert_eq!(timer.name(), "configured");
    assert_eq!(timer.time(|| 5), 5);

    let logger = CaptureLogger::new();
    {
        time_scope!(String::from("block"), logger.clone());
    }
    assert_eq!(logger.lines().len(), 1);
    assert_eq!(
        format_elapsed("block", Duration::ZERO),
        "* block        | 0.00s (0.00m)"
    );
}
