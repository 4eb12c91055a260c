//! udivbench CLI entry point

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, info};
use udivbench::config::{cli::Cli, validator, Config};
use udivbench::output;
use udivbench::runner::TrialRunner;
use udivbench::util::time::format_duration;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    udivbench::logging::init_logging(&cli.log_level).context("Failed to initialize logging")?;

    if cli.list {
        output::text::print_operations();
        return Ok(());
    }

    cli.validate()?;

    let config = Config::from_cli(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    debug!(?config, "effective configuration");

    println!("udivbench v{}", env!("CARGO_PKG_VERSION"));
    println!();
    output::text::print_plan(&config);

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();

    let runner = TrialRunner::new(&config.runner)?;
    let start = Instant::now();
    let results = runner.run_sweep(&config.workload)?;
    info!("sweep finished in {}", format_duration(start.elapsed()));

    println!();
    output::report(&config, &results)?;

    Ok(())
}
