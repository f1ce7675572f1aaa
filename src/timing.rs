//! Wall-clock timing helpers.

use std::time::{Duration, Instant};

/// Run `f` and log how long it took at info level, as
/// `"{label} took 00h 00m 00.123s"`.
pub fn timed<T, F>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    tracing::info!("{label} took {}", format_duration(start.elapsed()));
    result
}

/// Render a duration as `"{hh}h {mm}m {ss}.{ms}s"` with zero-padded
/// fields.
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;
    let s = total_s % 60;
    let total_m = total_s / 60;
    let m = total_m % 60;
    let h = total_m / 60;
    format!("{h:02}h {m:02}m {s:02}.{ms:03}s")
}
