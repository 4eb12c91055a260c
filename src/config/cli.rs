//! CLI argument parsing using clap

use crate::config::workload::DivisorType;
use crate::kernel::Operation;
use clap::Parser;
use std::path::PathBuf;

/// udivbench - unsigned 64-bit division microbenchmark
#[derive(Parser, Debug)]
#[command(name = "udivbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI options override its values)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // === Workload Options ===
    /// Divisor types to sweep: mixed, positive, negative (comma-separated)
    #[arg(short = 'D', long = "divisor-type", value_delimiter = ',')]
    pub divisor_types: Vec<DivisorType>,

    /// Operand buffer sizes to sweep (comma-separated)
    #[arg(short = 'b', long = "buffer-size", value_delimiter = ',')]
    pub buffer_sizes: Vec<usize>,

    /// Operations to measure (comma-separated, e.g. divideUnsigned,remainderUnsigned)
    #[arg(short = 'o', long = "operation", value_delimiter = ',')]
    pub operations: Vec<Operation>,

    // === Runner Options ===
    /// Warmup iterations per trial
    #[arg(short = 'w', long)]
    pub warmup_iterations: Option<usize>,

    /// Measured iterations per trial
    #[arg(short = 'i', long)]
    pub measurement_iterations: Option<usize>,

    /// Wall time of one iteration (e.g. 200ms, 1s, 500us)
    #[arg(short = 'r', long)]
    pub iteration_time: Option<String>,

    /// Independent trials per operation
    #[arg(short = 't', long)]
    pub trials: Option<usize>,

    /// CPU cores to pin trial threads to (e.g. "2" or "0,2-3")
    #[arg(long)]
    pub cpu_cores: Option<String>,

    // === Output Options ===
    /// JSON report file path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Write the JSON report on a single line
    #[arg(long)]
    pub compact_json: bool,

    /// Show per-invocation latency percentiles
    #[arg(long)]
    pub show_percentiles: bool,

    // === Runtime Options ===
    /// List available operations and exit
    #[arg(long)]
    pub list: bool,

    /// Validate configuration and print the plan without measuring
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "UDIVBENCH_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.buffer_sizes.contains(&0) {
            anyhow::bail!("buffer-size must be at least 1");
        }

        if self.measurement_iterations == Some(0) {
            anyhow::bail!("measurement-iterations must be at least 1");
        }

        if self.trials == Some(0) {
            anyhow::bail!("trials must be at least 1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["udivbench"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.divisor_types.is_empty());
        assert!(cli.buffer_sizes.is_empty());
        assert!(cli.operations.is_empty());
        assert!(!cli.list);
        assert!(!cli.dry_run);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_lists() {
        let cli = Cli::try_parse_from([
            "udivbench",
            "--divisor-type",
            "positive,negative",
            "-b",
            "64,1024",
            "--operation",
            "divideUnsigned,remainderUnsignedConstant",
        ])
        .unwrap();

        assert_eq!(cli.divisor_types, vec![DivisorType::Positive, DivisorType::Negative]);
        assert_eq!(cli.buffer_sizes, vec![64, 1024]);
        assert_eq!(
            cli.operations,
            vec![Operation::DivideUnsigned, Operation::RemainderUnsignedConstant]
        );
    }

    #[test]
    fn test_cli_repeated_flags() {
        let cli = Cli::try_parse_from(["udivbench", "-D", "mixed", "-D", "negative"]).unwrap();
        assert_eq!(cli.divisor_types, vec![DivisorType::Mixed, DivisorType::Negative]);
    }

    #[test]
    fn test_cli_rejects_unknown_operation() {
        assert!(Cli::try_parse_from(["udivbench", "--operation", "multiply"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_divisor_type() {
        assert!(Cli::try_parse_from(["udivbench", "--divisor-type", "zero"]).is_err());
    }

    #[test]
    fn test_cli_validate_zero_values() {
        let cli = Cli::try_parse_from(["udivbench", "-b", "0"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["udivbench", "--trials", "0"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["udivbench", "-i", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }
}
