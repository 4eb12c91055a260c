//! Invocation latency histogram using HdrHistogram
//!
//! Records the wall time of every measured sweep. One sweep over a 1024-entry
//! buffer typically lands in the low microseconds, so the histogram tracks
//! values from 1ns up to one minute at 3 significant digits.
//!
//! # Example
//!
//! ```
//! use udivbench::stats::histogram::LatencyHistogram;
//! use std::time::Duration;
//!
//! let mut hist = LatencyHistogram::new();
//! hist.record_nanos(2_100);
//! hist.record_nanos(2_300);
//!
//! let p50 = hist.percentile(50.0).unwrap();
//! assert!(p50 >= Duration::from_nanos(2_000));
//! ```

use crate::Result;
use hdrhistogram::Histogram;
use std::time::Duration;

/// Largest trackable value: one minute in nanoseconds
const MAX_TRACKABLE_NANOS: u64 = 60_000_000_000;

/// Latency histogram wrapper
#[derive(Debug, Clone)]
pub struct LatencyHistogram {
    histogram: Histogram<u64>,
}

impl LatencyHistogram {
    pub fn new() -> Self {
        let histogram = Histogram::new_with_bounds(1, MAX_TRACKABLE_NANOS, 3)
            .expect("Failed to create histogram with valid bounds");

        Self { histogram }
    }

    /// Record one latency sample in nanoseconds
    ///
    /// Values outside 1ns..=60s are clamped into range.
    #[inline]
    pub fn record_nanos(&mut self, nanos: u64) {
        let value = nanos.clamp(1, MAX_TRACKABLE_NANOS);
        // Cannot fail after clamping
        let _ = self.histogram.record(value);
    }

    #[inline]
    pub fn record(&mut self, latency: Duration) {
        self.record_nanos(latency.as_nanos().min(u64::MAX as u128) as u64);
    }

    /// Value at `percentile` (0.0 - 100.0), or None if empty
    pub fn percentile(&self, percentile: f64) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }

        Some(Duration::from_nanos(self.histogram.value_at_percentile(percentile)))
    }

    pub fn min(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.min()))
    }

    pub fn max(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.max()))
    }

    pub fn mean(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.mean() as u64))
    }

    pub fn stddev(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.stdev() as u64))
    }

    /// Number of recorded samples
    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.len() == 0
    }

    /// Merge another histogram into this one
    ///
    /// Used to combine the invocations of several trials.
    pub fn merge(&mut self, other: &LatencyHistogram) -> Result<()> {
        self.histogram
            .add(&other.histogram)
            .map_err(|e| anyhow::anyhow!("Failed to merge histograms: {}", e))?;
        Ok(())
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_histogram() {
        let hist = LatencyHistogram::new();
        assert_eq!(hist.len(), 0);
        assert!(hist.is_empty());
        assert!(hist.percentile(50.0).is_none());
        assert!(hist.min().is_none());
        assert!(hist.mean().is_none());
    }

    #[test]
    fn test_percentile() {
        let mut hist = LatencyHistogram::new();
        for i in 1..=100 {
            hist.record_nanos(i * 100);
        }

        let p50 = hist.percentile(50.0).unwrap();
        let p99 = hist.percentile(99.0).unwrap();

        assert!(p50.as_nanos() >= 4_900 && p50.as_nanos() <= 5_100);
        assert!(p99.as_nanos() >= 9_800 && p99.as_nanos() <= 10_000);
    }

    #[test]
    fn test_min_max_mean() {
        let mut hist = LatencyHistogram::new();
        hist.record(Duration::from_micros(1));
        hist.record(Duration::from_micros(2));
        hist.record(Duration::from_micros(3));

        let min = hist.min().unwrap().as_nanos();
        let max = hist.max().unwrap().as_nanos();
        let mean = hist.mean().unwrap().as_nanos();
        assert!((995..=1_005).contains(&min));
        assert!((2_995..=3_005).contains(&max));
        assert!((1_990..=2_010).contains(&mean));
    }

    #[test]
    fn test_clamping() {
        let mut hist = LatencyHistogram::new();
        hist.record_nanos(0);
        hist.record(Duration::from_secs(3600));

        assert_eq!(hist.len(), 2);
        assert_eq!(hist.min().unwrap(), Duration::from_nanos(1));
        assert!(hist.max().unwrap() <= Duration::from_secs(61));
    }

    #[test]
    fn test_merge() {
        let mut hist1 = LatencyHistogram::new();
        hist1.record_nanos(1_000);
        hist1.record_nanos(2_000);

        let mut hist2 = LatencyHistogram::new();
        hist2.record_nanos(3_000);
        hist2.record_nanos(4_000);

        hist1.merge(&hist2).unwrap();

        assert_eq!(hist1.len(), 4);
        let mean = hist1.mean().unwrap().as_nanos();
        assert!((2_400..=2_600).contains(&mean));
    }
}
