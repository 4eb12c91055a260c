//! CLI to Config conversion utilities

use anyhow::{Context, Result};
use std::time::Duration;

/// Parse a time string (e.g., "500us", "200ms", "1s") to a duration
///
/// A bare number is taken as milliseconds.
pub fn parse_iteration_time(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();

    let (num_str, unit_ns) = if s.ends_with("us") {
        (s.trim_end_matches("us"), 1_000u64)
    } else if s.ends_with("ms") {
        (s.trim_end_matches("ms"), 1_000_000)
    } else if s.ends_with("s") {
        (s.trim_end_matches("s"), 1_000_000_000)
    } else {
        (s.as_str(), 1_000_000)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid time format: {}", s))?;

    let nanos = num
        .checked_mul(unit_ns)
        .with_context(|| format!("Time out of range: {}", s))?;

    Ok(Duration::from_nanos(nanos))
}

/// Convert a duration to whole milliseconds, rounding sub-millisecond values up
pub fn duration_to_millis(duration: Duration) -> u64 {
    let millis = duration.as_millis() as u64;
    if Duration::from_millis(millis) < duration {
        millis + 1
    } else {
        millis
    }
}
