//! Division benchmark operations
//!
//! This module holds the measured workload: seven sweeps over a trial's
//! [`BufferSet`], each exercising one unsigned division or remainder variant.
//!
//! # Operations
//!
//! | Operation | Computes |
//! |---|---|
//! | `divideUnsigned` | `quotients[i] = dividends[i] /ᵤ divisors[i]` |
//! | `remainderUnsigned` | `remainders[i] = dividends[i] %ᵤ divisors[i]` |
//! | `divideRemainderUnsigned` | both of the above in one pass |
//! | `divideConstantBounded` | `(dividends[i] as i32) / 7`, signed |
//! | `divideUnsignedConstant` | `dividends[i] /ᵤ 7` |
//! | `divideUnsignedConstantBounded` | `(dividends[i] as u32) /ᵤ 15` |
//! | `remainderUnsignedConstant` | `dividends[i] %ᵤ 7` |
//!
//! Operations hold no state. Running one only overwrites its output buffer(s).
//!
//! # Example
//!
//! ```
//! use udivbench::config::workload::TrialConfig;
//! use udivbench::kernel::Operation;
//! use udivbench::operand::generate;
//!
//! let mut buffers = generate(&TrialConfig::default());
//! let op: Operation = "divideRemainderUnsigned".parse().unwrap();
//! op.run(&mut buffers);
//! ```

pub mod sweep;
pub mod unsigned;

pub use unsigned::{unsigned_divide, unsigned_remainder};

use crate::error::BenchError;
use crate::operand::BufferSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven measured sweeps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    DivideUnsigned,
    RemainderUnsigned,
    DivideRemainderUnsigned,
    DivideConstantBounded,
    DivideUnsignedConstant,
    DivideUnsignedConstantBounded,
    RemainderUnsignedConstant,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Self::DivideUnsigned,
        Self::RemainderUnsigned,
        Self::DivideRemainderUnsigned,
        Self::DivideConstantBounded,
        Self::DivideUnsignedConstant,
        Self::DivideUnsignedConstantBounded,
        Self::RemainderUnsignedConstant,
    ];

    /// Name used for lookup and in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::DivideUnsigned => "divideUnsigned",
            Self::RemainderUnsigned => "remainderUnsigned",
            Self::DivideRemainderUnsigned => "divideRemainderUnsigned",
            Self::DivideConstantBounded => "divideConstantBounded",
            Self::DivideUnsignedConstant => "divideUnsignedConstant",
            Self::DivideUnsignedConstantBounded => "divideUnsignedConstantBounded",
            Self::RemainderUnsignedConstant => "remainderUnsignedConstant",
        }
    }

    /// Whether the sweep reads the runtime `divisors` buffer
    pub fn uses_runtime_divisor(&self) -> bool {
        matches!(
            self,
            Self::DivideUnsigned | Self::RemainderUnsigned | Self::DivideRemainderUnsigned
        )
    }

    /// Perform one full sweep over `buffers`
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor. Buffers from the operand generator never
    /// contain one.
    #[inline]
    pub fn run(&self, buffers: &mut BufferSet) {
        let BufferSet {
            dividends,
            divisors,
            quotients,
            remainders,
        } = buffers;

        match self {
            Self::DivideUnsigned => sweep::divide_unsigned(dividends, divisors, quotients),
            Self::RemainderUnsigned => sweep::remainder_unsigned(dividends, divisors, remainders),
            Self::DivideRemainderUnsigned => {
                sweep::divide_remainder_unsigned(dividends, divisors, quotients, remainders)
            }
            Self::DivideConstantBounded => sweep::divide_constant_bounded(dividends, quotients),
            Self::DivideUnsignedConstant => sweep::divide_unsigned_constant(dividends, quotients),
            Self::DivideUnsignedConstantBounded => {
                sweep::divide_unsigned_constant_bounded(dividends, quotients)
            }
            Self::RemainderUnsignedConstant => {
                sweep::remainder_unsigned_constant(dividends, remainders)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = BenchError;

    /// Accepts the camelCase name, case-insensitively, with an optional
    /// `test` prefix and with `-`/`_` separators ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let normalized = normalized.strip_prefix("test").unwrap_or(&normalized);

        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| BenchError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::workload::{DivisorType, TrialConfig};
    use crate::operand::generate;

    #[test]
    fn test_operation_names_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_operation_parse_variants() {
        assert_eq!(
            "divide-unsigned-constant".parse::<Operation>().unwrap(),
            Operation::DivideUnsignedConstant
        );
        assert_eq!(
            "remainder_unsigned".parse::<Operation>().unwrap(),
            Operation::RemainderUnsigned
        );
        assert_eq!(
            "testDivideRemainderUnsigned".parse::<Operation>().unwrap(),
            Operation::DivideRemainderUnsigned
        );
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(BenchError::UnknownOperation("modulo".to_string()))
        );
    }

    #[test]
    fn test_operation_serde_names() {
        let json = serde_json::to_string(&Operation::DivideUnsignedConstantBounded).unwrap();
        assert_eq!(json, "\"divideUnsignedConstantBounded\"");
    }

    #[test]
    fn test_run_writes_only_its_outputs() {
        let config = TrialConfig::new(DivisorType::Mixed, 256);
        let mut buffers = generate(&config);
        Operation::DivideUnsigned.run(&mut buffers);
        assert!(buffers.remainders.iter().all(|&r| r == 0));

        let mut buffers = generate(&config);
        Operation::RemainderUnsignedConstant.run(&mut buffers);
        assert!(buffers.quotients.iter().all(|&q| q == 0));
    }

    #[test]
    fn test_run_does_not_touch_operands() {
        let config = TrialConfig::new(DivisorType::Negative, 128);
        let pristine = generate(&config);
        let mut buffers = pristine.clone();
        for op in Operation::ALL {
            op.run(&mut buffers);
        }
        assert_eq!(buffers.dividends, pristine.dividends);
        assert_eq!(buffers.divisors, pristine.divisors);
    }

    #[test]
    fn test_combined_matches_separate_on_generated_buffers() {
        for ty in DivisorType::ALL {
            let config = TrialConfig::new(ty, 1024);
            let mut separate = generate(&config);
            Operation::DivideUnsigned.run(&mut separate);
            Operation::RemainderUnsigned.run(&mut separate);

            let mut combined = generate(&config);
            Operation::DivideRemainderUnsigned.run(&mut combined);

            assert_eq!(separate.quotients, combined.quotients);
            assert_eq!(separate.remainders, combined.remainders);
        }
    }

    #[test]
    fn test_constant_matches_runtime_seven_on_generated_buffers() {
        let config = TrialConfig::new(DivisorType::Mixed, 1024);
        let mut runtime = generate(&config);
        runtime.divisors.iter_mut().for_each(|d| *d = 7);
        let mut constant = runtime.clone();

        Operation::DivideUnsigned.run(&mut runtime);
        Operation::DivideUnsignedConstant.run(&mut constant);
        assert_eq!(runtime.quotients, constant.quotients);

        Operation::RemainderUnsigned.run(&mut runtime);
        Operation::RemainderUnsignedConstant.run(&mut constant);
        assert_eq!(runtime.remainders, constant.remainders);
    }

    #[test]
    fn test_runtime_divisor_flag() {
        let runtime: Vec<Operation> = Operation::ALL
            .into_iter()
            .filter(|op| op.uses_runtime_divisor())
            .collect();
        assert_eq!(
            runtime,
            vec![
                Operation::DivideUnsigned,
                Operation::RemainderUnsigned,
                Operation::DivideRemainderUnsigned
            ]
        );
    }
}
