//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! A [`Config`] describes a whole sweep: which divisor types, buffer sizes
//! and operations to measure, how the runner times them, and where results
//! go. Each (divisor type, buffer size) pair becomes one [`TrialConfig`].

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;
pub mod workload;

use crate::kernel::Operation;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use workload::*;

/// Complete sweep configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Build the effective configuration from CLI arguments
    ///
    /// Starts from the TOML file named by `--config` (or defaults) and
    /// applies CLI overrides on top.
    pub fn from_cli(cli: &cli::Cli) -> crate::Result<Self> {
        let base = match cli.config {
            Some(ref path) => toml::parse_toml_file(path)?,
            None => Config::default(),
        };

        toml::merge_cli_with_config(cli, base)
    }
}

/// What to measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Divisor sign-shaping policies to sweep
    #[serde(default = "default_divisor_types")]
    pub divisor_types: Vec<DivisorType>,
    /// Operand buffer lengths to sweep
    #[serde(default = "default_buffer_sizes")]
    pub buffer_sizes: Vec<usize>,
    /// Operations to measure for every trial configuration
    #[serde(default = "default_operations")]
    pub operations: Vec<Operation>,
}

impl WorkloadConfig {
    /// Trial configurations in sweep order (divisor type major)
    pub fn trial_configs(&self) -> Vec<TrialConfig> {
        self.divisor_types
            .iter()
            .flat_map(|&ty| {
                self.buffer_sizes
                    .iter()
                    .map(move |&size| TrialConfig::new(ty, size))
            })
            .collect()
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            divisor_types: default_divisor_types(),
            buffer_sizes: default_buffer_sizes(),
            operations: default_operations(),
        }
    }
}

fn default_divisor_types() -> Vec<DivisorType> {
    DivisorType::ALL.to_vec()
}

fn default_buffer_sizes() -> Vec<usize> {
    vec![DEFAULT_BUFFER_SIZE]
}

fn default_operations() -> Vec<Operation> {
    Operation::ALL.to_vec()
}

/// How each operation is timed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Iterations run and discarded before measuring
    #[serde(default = "default_warmup_iterations")]
    pub warmup_iterations: usize,
    /// Iterations whose scores are reported
    #[serde(default = "default_measurement_iterations")]
    pub measurement_iterations: usize,
    /// Wall time of one iteration in milliseconds
    #[serde(default = "default_iteration_time_ms")]
    pub iteration_time_ms: u64,
    /// Independent trials per operation, each on a fresh thread with fresh buffers
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// CPU cores to pin trial threads to (e.g. "2" or "0,2-3")
    #[serde(default)]
    pub cpu_cores: Option<String>,
}

impl RunnerConfig {
    pub fn iteration_time(&self) -> Duration {
        Duration::from_millis(self.iteration_time_ms)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: default_warmup_iterations(),
            measurement_iterations: default_measurement_iterations(),
            iteration_time_ms: default_iteration_time_ms(),
            trials: default_trials(),
            cpu_cores: None,
        }
    }
}

fn default_warmup_iterations() -> usize {
    5
}

fn default_measurement_iterations() -> usize {
    5
}

fn default_iteration_time_ms() -> u64 {
    1000
}

fn default_trials() -> usize {
    3
}

/// Where and how results are reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report file path
    #[serde(default)]
    pub json_output: Option<PathBuf>,
    /// Pretty-print the JSON report
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
    /// Show per-invocation latency percentiles in the text report
    #[serde(default)]
    pub show_percentiles: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_output: None,
            pretty_json: default_pretty_json(),
            show_percentiles: false,
        }
    }
}

fn default_pretty_json() -> bool {
    true
}
