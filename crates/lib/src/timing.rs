//! Wall-clock timing of closures.

use std::time::{Duration, Instant};

use tracing::info;

/// Runs `f` and logs how long it took under `label` at info level.
///
/// ```
/// # use genery::timing::timed;
/// let sum = timed("sum", || (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// ```
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let (result, elapsed) = measure(f);
    let secs = elapsed.as_secs_f64();
    info!(
        label,
        elapsed_ms = secs * 1000.0,
        "{label}   {:8.5} min   {:8.5} s   {:8.5} ms",
        secs / 60.0,
        secs,
        secs * 1000.0
    );
    result
}

/// Runs `f` and returns its result together with the elapsed time.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let result = f();
    (result, started.elapsed())
}
