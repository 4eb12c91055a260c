//! Workload definition structures

use crate::error::BenchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference operand buffer length
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Sign-shaping policy applied to generated divisors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DivisorType {
    /// Divisors keep whatever sign the random source produced
    Mixed,
    /// Divisors are forced strictly positive
    Positive,
    /// Divisors are forced strictly negative
    Negative,
}

impl DivisorType {
    /// All policies, in the order a default sweep visits them
    pub const ALL: [DivisorType; 3] = [Self::Mixed, Self::Positive, Self::Negative];

    /// Lowercase name used in configuration files and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl Default for DivisorType {
    fn default() -> Self {
        Self::Mixed
    }
}

impl fmt::Display for DivisorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DivisorType {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            _ => Err(BenchError::UnknownDivisorType(s.to_string())),
        }
    }
}

/// Configuration of a single trial
///
/// Immutable for the duration of the trial. Two trials with equal
/// configurations see identical operand buffers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrialConfig {
    pub divisor_type: DivisorType,
    pub buffer_size: usize,
}

impl TrialConfig {
    pub fn new(divisor_type: DivisorType, buffer_size: usize) -> Self {
        Self {
            divisor_type,
            buffer_size,
        }
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new(DivisorType::default(), DEFAULT_BUFFER_SIZE)
    }
}

impl fmt::Display for TrialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "divisorType={}, bufferSize={}", self.divisor_type, self.buffer_size)
    }
}
