//! Configuration validation

use super::*;
use crate::runner::affinity::parse_cpu_list;
use anyhow::{Context, Result};
use tracing::warn;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_workload(&config.workload)?;
    validate_runner(&config.runner)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate workload configuration
pub fn validate_workload(workload: &WorkloadConfig) -> Result<()> {
    if workload.divisor_types.is_empty() {
        anyhow::bail!("at least one divisor type is required");
    }

    if workload.buffer_sizes.is_empty() {
        anyhow::bail!("at least one buffer size is required");
    }

    if let Some(&size) = workload.buffer_sizes.iter().find(|&&size| size == 0) {
        return Err(crate::error::BenchError::InvalidBufferSize(size).into());
    }

    if workload.operations.is_empty() {
        anyhow::bail!("at least one operation is required");
    }

    if has_duplicates(&workload.divisor_types)
        || has_duplicates(&workload.buffer_sizes)
        || has_duplicates(&workload.operations)
    {
        warn!("workload lists contain duplicates; duplicated entries are measured again");
    }

    Ok(())
}

/// Validate runner configuration
pub fn validate_runner(runner: &RunnerConfig) -> Result<()> {
    if runner.measurement_iterations == 0 {
        anyhow::bail!("measurement_iterations must be at least 1");
    }

    if runner.trials == 0 {
        anyhow::bail!("trials must be at least 1");
    }

    if runner.iteration_time_ms == 0 {
        anyhow::bail!("iteration_time_ms must be at least 1");
    }

    if let Some(ref cores) = runner.cpu_cores {
        let cores = parse_cpu_list(cores).context("Invalid cpu_cores")?;
        let available = num_cpus::get();
        if let Some(&core) = cores.iter().find(|&&core| core >= available) {
            anyhow::bail!(
                "cpu core {} does not exist ({} cores available)",
                core,
                available
            );
        }
    }

    if runner.warmup_iterations == 0 {
        warn!("warmup disabled; first measured iterations may run cache-cold");
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.json_output {
        if path.as_os_str().is_empty() {
            anyhow::bail!("json_output path cannot be empty");
        }
        if path.is_dir() {
            anyhow::bail!("json_output must be a file, got directory {}", path.display());
        }
    }

    Ok(())
}

fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| items[..i].contains(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_lists_rejected() {
        let mut config = Config::default();
        config.workload.divisor_types.clear();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.workload.buffer_sizes.clear();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.workload.operations.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_buffer_size_rejected() {
        let mut config = Config::default();
        config.workload.buffer_sizes = vec![1024, 0];
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::error::BenchError>(),
            Some(&crate::error::BenchError::InvalidBufferSize(0))
        );
    }

    #[test]
    fn test_runner_zero_values_rejected() {
        let mut config = Config::default();
        config.runner.measurement_iterations = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.runner.trials = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.runner.iteration_time_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_warmup_allowed() {
        let mut config = Config::default();
        config.runner.warmup_iterations = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_cpu_cores_validated() {
        let mut config = Config::default();
        config.runner.cpu_cores = Some("0".to_string());
        assert!(validate_config(&config).is_ok());

        config.runner.cpu_cores = Some("three".to_string());
        assert!(validate_config(&config).is_err());

        config.runner.cpu_cores = Some("100000".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_json_output_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.json_output = Some(dir.path().to_path_buf());
        assert!(validate_config(&config).is_err());

        config.output.json_output = Some(dir.path().join("results.json"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_has_duplicates() {
        assert!(has_duplicates(&[1, 2, 1]));
        assert!(!has_duplicates(&[1, 2, 3]));
        assert!(!has_duplicates::<u8>(&[]));
    }
}
