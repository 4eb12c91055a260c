//! Human-readable text output

use crate::config::Config;
use crate::kernel::Operation;
use crate::stats::OperationResult;
use crate::util::time::{format_duration, format_rate, rate_from_nanos_per_op};
use std::fmt::Write;
use std::time::Duration;

const PERCENTILES: [f64; 4] = [50.0, 90.0, 99.0, 99.9];

/// Print the sweep plan before measuring
pub fn print_plan(config: &Config) {
    print!("{}", render_plan(config));
}

pub fn render_plan(config: &Config) -> String {
    let workload = &config.workload;
    let runner = &config.runner;
    let mut out = String::new();

    let divisor_types: Vec<&str> = workload.divisor_types.iter().map(|t| t.as_str()).collect();
    let buffer_sizes: Vec<String> = workload.buffer_sizes.iter().map(|s| s.to_string()).collect();
    let operations: Vec<&str> = workload.operations.iter().map(|op| op.name()).collect();

    let _ = writeln!(out, "Configuration:");
    let _ = writeln!(out, "  Divisor types: {}", divisor_types.join(", "));
    let _ = writeln!(out, "  Buffer sizes:  {}", buffer_sizes.join(", "));
    let _ = writeln!(out, "  Operations:    {}", operations.join(", "));
    let _ = writeln!(
        out,
        "  Warmup:        {} iterations, {} each",
        runner.warmup_iterations,
        format_duration(runner.iteration_time())
    );
    let _ = writeln!(
        out,
        "  Measurement:   {} iterations, {} each",
        runner.measurement_iterations,
        format_duration(runner.iteration_time())
    );
    let _ = writeln!(out, "  Trials:        {}", runner.trials);
    if let Some(ref cores) = runner.cpu_cores {
        let _ = writeln!(out, "  CPU cores:     {}", cores);
    }

    let benchmarks = workload.trial_configs().len() * workload.operations.len();
    let per_benchmark = runner.iteration_time()
        * ((runner.warmup_iterations + runner.measurement_iterations) * runner.trials) as u32;
    let _ = writeln!(
        out,
        "  Estimated:     {} benchmarks, ~{}",
        benchmarks,
        format_duration(per_benchmark * benchmarks as u32)
    );

    out
}

/// Print the operation list for `--list`
pub fn print_operations() {
    for op in Operation::ALL {
        let divisor = if op.uses_runtime_divisor() {
            "runtime divisor"
        } else {
            "constant divisor"
        };
        println!("{:<32} {}", op.name(), divisor);
    }
}

/// Print the results table
pub fn print_results(results: &[OperationResult], show_percentiles: bool) {
    print!("{}", render_results(results, show_percentiles));
}

/// Render results in a JMH-like table, scores in ns/op
pub fn render_results(results: &[OperationResult], show_percentiles: bool) -> String {
    let mut out = String::new();

    let name_width = results
        .iter()
        .map(|r| r.operation.name().len())
        .max()
        .unwrap_or(0)
        .max("Benchmark".len());

    let _ = writeln!(
        out,
        "{:<name_width$}  {:>13}  {:>12}  {:>4}  {:>4}  {:>12}  {:>12}  {:>10}  {:>9}",
        "Benchmark",
        "(divisorType)",
        "(bufferSize)",
        "Mode",
        "Cnt",
        "Score",
        "Min",
        "Max",
        "Units",
        name_width = name_width,
    );

    for result in results {
        let stats = &result.stats;
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>13}  {:>12}  {:>4}  {:>4}  {:>12.3}  {:>12.3}  {:>10.3}  {:>9}",
            result.operation.name(),
            result.trial.divisor_type.as_str(),
            result.trial.buffer_size,
            "avgt",
            stats.scores().len(),
            stats.mean_score().unwrap_or_default(),
            stats.min_score().unwrap_or_default(),
            stats.max_score().unwrap_or_default(),
            "ns/op",
            name_width = name_width,
        );
    }

    if show_percentiles && !results.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Invocation latency:");
        for result in results {
            let latency = result.stats.latency();
            let percentiles: Vec<String> = PERCENTILES
                .iter()
                .map(|&p| {
                    let value = latency.percentile(p).unwrap_or(Duration::ZERO);
                    format!("p{}={}", p, format_duration(value))
                })
                .collect();
            let per_element = result
                .stats
                .mean_per_element(result.trial.buffer_size)
                .unwrap_or_default();

            let _ = writeln!(
                out,
                "  {:<name_width$} {:<8} {:>6}  {}  ({:.3} ns/div, {} div/s)",
                result.operation.name(),
                result.trial.divisor_type.as_str(),
                result.trial.buffer_size,
                percentiles.join(" "),
                per_element,
                format_rate(rate_from_nanos_per_op(per_element)),
                name_width = name_width,
            );
        }
    }

    out
}
