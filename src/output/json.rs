//! JSON output formatting
//!
//! One report per run: tool metadata, the effective runner settings, and
//! one entry per (trial configuration, operation) with iteration scores and
//! invocation latency percentiles.

use crate::config::{Config, RunnerConfig};
use crate::config::workload::DivisorType;
use crate::kernel::Operation;
use crate::stats::histogram::LatencyHistogram;
use crate::stats::OperationResult;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Latency percentiles in nanoseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonLatency {
    pub min_ns: u64,
    pub max_ns: u64,
    pub mean_ns: u64,
    pub p50_ns: u64,
    pub p90_ns: u64,
    pub p99_ns: u64,
    pub p99_9_ns: u64,
}

impl JsonLatency {
    /// None for an empty histogram
    pub fn from_histogram(hist: &LatencyHistogram) -> Option<Self> {
        let nanos = |d: Option<Duration>| d.map(|d| d.as_nanos() as u64);

        Some(Self {
            min_ns: nanos(hist.min())?,
            max_ns: nanos(hist.max())?,
            mean_ns: nanos(hist.mean())?,
            p50_ns: nanos(hist.percentile(50.0))?,
            p90_ns: nanos(hist.percentile(90.0))?,
            p99_ns: nanos(hist.percentile(99.0))?,
            p99_9_ns: nanos(hist.percentile(99.9))?,
        })
    }
}

/// Result of one benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResult {
    pub benchmark: Operation,
    pub divisor_type: DivisorType,
    pub buffer_size: usize,
    pub mode: String,
    pub unit: String,
    /// Mean of `scores`
    pub score: f64,
    pub scores: Vec<f64>,
    pub ns_per_division: f64,
    pub invocations: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<JsonLatency>,
}

impl JsonResult {
    pub fn from_result(result: &OperationResult) -> Self {
        let stats = &result.stats;

        Self {
            benchmark: result.operation,
            divisor_type: result.trial.divisor_type,
            buffer_size: result.trial.buffer_size,
            mode: "avgt".to_string(),
            unit: "ns/op".to_string(),
            score: stats.mean_score().unwrap_or_default(),
            scores: stats.scores().to_vec(),
            ns_per_division: stats
                .mean_per_element(result.trial.buffer_size)
                .unwrap_or_default(),
            invocations: stats.invocations(),
            latency: JsonLatency::from_histogram(stats.latency()),
        }
    }
}

/// Complete JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub tool: String,
    pub version: String,
    /// RFC 3339 start time of the run
    pub timestamp: String,
    pub runner: RunnerConfig,
    pub results: Vec<JsonResult>,
}

impl JsonReport {
    pub fn new(config: &Config, results: &[OperationResult]) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            runner: config.runner.clone(),
            results: results.iter().map(JsonResult::from_result).collect(),
        }
    }
}

/// Write the report to `output_path`
pub fn write_json_output(output_path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }

    writer.flush()?;
    Ok(())
}
