//! Statistics collection
//!
//! Two views of the same measurement are kept for each operation:
//!
//! - **Iteration scores**: average nanoseconds per invocation over one timed
//!   iteration, the figure reported as the benchmark score.
//! - **Invocation latency**: an HdrHistogram of every individual sweep, for
//!   percentiles.
//!
//! # Example
//!
//! ```
//! use udivbench::stats::OperationStats;
//! use std::time::Duration;
//!
//! let mut stats = OperationStats::new();
//! stats.record_invocation(2_000);
//! stats.record_invocation(2_200);
//! stats.record_iteration(Duration::from_nanos(4_200), 2);
//!
//! assert_eq!(stats.scores(), &[2_100.0]);
//! assert_eq!(stats.invocations(), 2);
//! ```

pub mod histogram;

use crate::config::workload::TrialConfig;
use crate::kernel::Operation;
use crate::util::time::nanos_per_op;
use crate::Result;
use histogram::LatencyHistogram;
use std::time::Duration;

/// Measurements of one operation under one trial configuration
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    scores: Vec<f64>,
    invocations: u64,
    measured_time: Duration,
    latency: LatencyHistogram,
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the wall time of a single invocation
    #[inline]
    pub fn record_invocation(&mut self, nanos: u64) {
        self.latency.record_nanos(nanos);
    }

    /// Close a measured iteration of `invocations` calls taking `elapsed`
    pub fn record_iteration(&mut self, elapsed: Duration, invocations: u64) {
        self.scores.push(nanos_per_op(elapsed, invocations));
        self.invocations += invocations;
        self.measured_time += elapsed;
    }

    /// Per-iteration scores in ns/op, in recording order
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    pub fn measured_time(&self) -> Duration {
        self.measured_time
    }

    pub fn latency(&self) -> &LatencyHistogram {
        &self.latency
    }

    /// Mean of the iteration scores
    pub fn mean_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
    }

    pub fn min_score(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::min)
    }

    pub fn max_score(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::max)
    }

    /// Mean score divided by the buffer size: nanoseconds per single division
    pub fn mean_per_element(&self, buffer_size: usize) -> Option<f64> {
        if buffer_size == 0 {
            return None;
        }
        self.mean_score().map(|score| score / buffer_size as f64)
    }

    /// Append the measurements of another trial
    pub fn merge(&mut self, other: &OperationStats) -> Result<()> {
        self.scores.extend_from_slice(&other.scores);
        self.invocations += other.invocations;
        self.measured_time += other.measured_time;
        self.latency.merge(&other.latency)
    }
}

/// Final result for one (trial configuration, operation) pair
#[derive(Debug, Clone)]
pub struct OperationResult {
    pub operation: Operation,
    pub trial: TrialConfig,
    pub stats: OperationStats,
}
