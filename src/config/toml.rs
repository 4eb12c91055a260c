//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{duration_to_millis, parse_iteration_time};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Workload lists replace, never extend
    if !cli.divisor_types.is_empty() {
        config.workload.divisor_types = cli.divisor_types.clone();
    }
    if !cli.buffer_sizes.is_empty() {
        config.workload.buffer_sizes = cli.buffer_sizes.clone();
    }
    if !cli.operations.is_empty() {
        config.workload.operations = cli.operations.clone();
    }

    // Runner
    if let Some(warmup) = cli.warmup_iterations {
        config.runner.warmup_iterations = warmup;
    }
    if let Some(measurement) = cli.measurement_iterations {
        config.runner.measurement_iterations = measurement;
    }
    if let Some(ref time_str) = cli.iteration_time {
        let time = parse_iteration_time(time_str).context("Invalid iteration time")?;
        config.runner.iteration_time_ms = duration_to_millis(time);
    }
    if let Some(trials) = cli.trials {
        config.runner.trials = trials;
    }
    if let Some(ref cores) = cli.cpu_cores {
        config.runner.cpu_cores = Some(cores.clone());
    }

    // Output
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.compact_json {
        config.output.pretty_json = false;
    }
    if cli.show_percentiles {
        config.output.show_percentiles = true;
    }

    Ok(config)
}
