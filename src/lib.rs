//! udivbench - unsigned 64-bit division microbenchmark
//!
//! Measures the cost of unsigned 64-bit division and remainder under
//! different divisor distributions, and compares runtime divisors against
//! constant divisors the compiler can strength-reduce.
//!
//! # Architecture
//!
//! - **Operand generation**: reproducible dividend/divisor buffers from a fixed-seed PRNG
//! - **Kernels**: seven division/remainder sweeps over those buffers
//! - **Runner**: warmup, measured iterations and isolated trials around the kernels
//! - **Stats and output**: ns/op scores, latency histograms, text and JSON reports
//!
//! # Example
//!
//! ```
//! use udivbench::config::workload::{DivisorType, TrialConfig};
//! use udivbench::kernel::Operation;
//! use udivbench::runner::{run_operation, setup};
//!
//! let mut buffers = setup(&TrialConfig::new(DivisorType::Mixed, 1024)).unwrap();
//! run_operation(Operation::DivideUnsigned, &mut buffers);
//! ```

pub mod config;
pub mod error;
pub mod kernel;
pub mod logging;
pub mod operand;
pub mod output;
pub mod runner;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use error::BenchError;
pub use kernel::Operation;
pub use operand::BufferSet;

/// Result type used throughout udivbench
pub type Result<T> = anyhow::Result<T>;
