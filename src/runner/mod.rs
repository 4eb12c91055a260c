//! Trial runner
//!
//! Drives the measured workload through an explicit loop:
//!
//! ```text
//! for each trial configuration and operation:
//!     for each trial (fresh thread, fresh buffers):
//!         setup(config)                         once
//!         warmup iterations                     discarded
//!         measured iterations                   scored in ns/op
//! ```
//!
//! An iteration calls [`run_operation`] back to back until the configured
//! iteration time has elapsed, timing each call individually. Trials never
//! overlap and never share buffers.
//!
//! A panic inside a trial, such as a division by zero, is fatal. It is
//! reported as [`BenchError::TrialPanicked`] and the sweep stops.

pub mod affinity;

use crate::config::workload::TrialConfig;
use crate::config::{RunnerConfig, WorkloadConfig};
use crate::error::BenchError;
use crate::kernel::Operation;
use crate::operand::{self, BufferSet};
use crate::stats::{OperationResult, OperationStats};
use crate::util::fast_time::FastInstant;
use crate::Result;
use anyhow::Context;
use std::any::Any;
use std::hint::black_box;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Allocate and populate the buffers for one trial
///
/// Idempotent: equal configurations yield identical buffers.
pub fn setup(config: &TrialConfig) -> std::result::Result<BufferSet, BenchError> {
    if config.buffer_size == 0 {
        return Err(BenchError::InvalidBufferSize(config.buffer_size));
    }

    Ok(operand::generate(config))
}

/// Run one sweep of `operation` over `buffers`
#[inline]
pub fn run_operation(operation: Operation, buffers: &mut BufferSet) {
    operation.run(buffers);
}

/// Run one sweep of the operation called `name`
pub fn run_named(name: &str, buffers: &mut BufferSet) -> std::result::Result<(), BenchError> {
    let operation: Operation = name.parse()?;
    run_operation(operation, buffers);
    Ok(())
}

/// Times operations according to a [`RunnerConfig`]
#[derive(Debug, Clone)]
pub struct TrialRunner {
    warmup_iterations: usize,
    measurement_iterations: usize,
    iteration_time: Duration,
    trials: usize,
    cpu_cores: Option<Vec<usize>>,
}

impl TrialRunner {
    pub fn new(settings: &RunnerConfig) -> Result<Self> {
        let cpu_cores = match settings.cpu_cores {
            Some(ref list) => Some(affinity::parse_cpu_list(list).context("Invalid cpu_cores")?),
            None => None,
        };

        Ok(Self {
            warmup_iterations: settings.warmup_iterations,
            measurement_iterations: settings.measurement_iterations,
            iteration_time: settings.iteration_time(),
            trials: settings.trials,
            cpu_cores,
        })
    }

    /// Measure every operation under every trial configuration of `workload`
    pub fn run_sweep(&self, workload: &WorkloadConfig) -> Result<Vec<OperationResult>> {
        let trial_configs = workload.trial_configs();
        let total = trial_configs.len() * workload.operations.len();
        let mut results = Vec::with_capacity(total);

        for trial in &trial_configs {
            for &operation in &workload.operations {
                info!(
                    "[{}/{}] {} ({})",
                    results.len() + 1,
                    total,
                    operation,
                    trial
                );
                results.push(self.measure(*trial, operation)?);
            }
        }

        Ok(results)
    }

    /// Run all trials of one operation and merge their measurements
    pub fn measure(&self, trial: TrialConfig, operation: Operation) -> Result<OperationResult> {
        let mut stats = OperationStats::new();

        for index in 0..self.trials {
            let trial_stats = self.run_isolated(trial, operation, index)?;
            debug!(
                trial = index,
                mean_ns_per_op = trial_stats.mean_score().unwrap_or_default(),
                invocations = trial_stats.invocations(),
                "trial complete"
            );
            stats.merge(&trial_stats)?;
        }

        Ok(OperationResult {
            operation,
            trial,
            stats,
        })
    }

    /// Run one trial on its own thread
    pub fn run_isolated(
        &self,
        trial: TrialConfig,
        operation: Operation,
        index: usize,
    ) -> Result<OperationStats> {
        let runner = self.clone();
        let name = format!("trial-{}-{}", operation, index);

        run_on_thread(name, self.cpu_cores.clone(), move || {
            runner.run_trial(trial, operation)
        })
        .map_err(|payload| BenchError::TrialPanicked {
            operation: operation.to_string(),
            trial: index,
            message: panic_message(&*payload),
        })?
    }

    /// Run one trial on the calling thread
    pub fn run_trial(&self, trial: TrialConfig, operation: Operation) -> Result<OperationStats> {
        let mut buffers = setup(&trial)?;
        let mut stats = OperationStats::new();

        for iteration in 0..self.warmup_iterations {
            let (elapsed, invocations) =
                run_iteration(operation, &mut buffers, self.iteration_time, None);
            debug!(iteration, ?elapsed, invocations, "warmup iteration");
        }

        for iteration in 0..self.measurement_iterations {
            let (elapsed, invocations) =
                run_iteration(operation, &mut buffers, self.iteration_time, Some(&mut stats));
            stats.record_iteration(elapsed, invocations);
            debug!(iteration, ?elapsed, invocations, "measured iteration");
        }

        Ok(stats)
    }
}

/// Invoke `operation` until `iteration_time` has elapsed
///
/// Always performs at least one invocation. Returns the iteration's wall time
/// and invocation count. Per-invocation times go to `stats` when given.
pub fn run_iteration(
    operation: Operation,
    buffers: &mut BufferSet,
    iteration_time: Duration,
    mut stats: Option<&mut OperationStats>,
) -> (Duration, u64) {
    let budget = iteration_time.as_nanos().min(u64::MAX as u128) as u64;
    let mut invocations = 0u64;
    let start = FastInstant::now();

    loop {
        let before = FastInstant::now();
        run_operation(operation, black_box(&mut *buffers));
        let after = FastInstant::now();

        black_box(&buffers.quotients);
        black_box(&buffers.remainders);

        if let Some(stats) = stats.as_deref_mut() {
            stats.record_invocation(after.nanos_since(before));
        }
        invocations += 1;

        if after.nanos_since(start) >= budget {
            return (after.duration_since(start), invocations);
        }
    }
}

/// Run `work` on a named thread, optionally pinned, and wait for it
///
/// A panic in `work` comes back as the panic payload.
fn run_on_thread<T, F>(
    name: String,
    cpu_cores: Option<Vec<usize>>,
    work: F,
) -> std::result::Result<Result<T>, Box<dyn Any + Send + 'static>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let spawned = thread::Builder::new().name(name.clone()).spawn(move || {
        if let Some(ref cores) = cpu_cores {
            if let Err(e) = affinity::set_cpu_affinity(cores) {
                warn!("{}: continuing unpinned: {:#}", name, e);
            }
        }
        work()
    });

    match spawned {
        Ok(handle) => handle.join(),
        Err(e) => Ok(Err(anyhow::Error::new(e).context("Failed to spawn trial thread"))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
