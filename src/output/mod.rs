//! Result reporting
//!
//! - **text**: plan and results table on stdout
//! - **json**: machine-readable report file

pub mod json;
pub mod text;

use crate::config::Config;
use crate::stats::OperationResult;
use crate::Result;
use tracing::info;

/// Emit every report the configuration asks for
pub fn report(config: &Config, results: &[OperationResult]) -> Result<()> {
    text::print_results(results, config.output.show_percentiles);

    if let Some(ref path) = config.output.json_output {
        let report = json::JsonReport::new(config, results);
        json::write_json_output(path, &report, config.output.pretty_json)?;
        info!("JSON report written to {}", path.display());
    }

    Ok(())
}
