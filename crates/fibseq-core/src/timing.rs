//! Wall-clock timing for a generation run.

use std::time::{Duration, Instant};

use tracing::debug;

/// The result of a timed call: the callee's value plus the elapsed
/// wall-clock time, measured on a monotonic clock.
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Run `f`, sampling a monotonic clock immediately before and after.
///
/// Truncation to whole seconds happens only when the duration is printed,
/// not here.
#[allow(clippy::cast_possible_truncation)]
pub fn time<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    debug!(elapsed_ms = elapsed.as_millis() as u64, "timed run complete");
    Timed { value, elapsed }
}
