//! Typed errors for the benchmark domain

use thiserror::Error;

/// Errors raised while resolving or running a benchmark
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("unknown divisor type: {0} (expected mixed, positive or negative)")]
    UnknownDivisorType(String),

    #[error("buffer size must be positive, got {0}")]
    InvalidBufferSize(usize),

    #[error("trial {trial} of {operation} panicked: {message}")]
    TrialPanicked {
        operation: String,
        trial: usize,
        message: String,
    },
}
