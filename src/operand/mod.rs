//! Operand generation
//!
//! Produces the dividend/divisor buffers a trial sweeps over. Generation is
//! fully deterministic: the random source is always seeded with [`SEED`], so
//! two trials with the same [`TrialConfig`] see byte-identical operands.
//!
//! # Divisor shaping
//!
//! Each divisor candidate is drawn uniformly over all 64-bit patterns, then:
//!
//! 1. A zero candidate becomes `1`. No divisor is ever zero.
//! 2. The sign is shaped according to [`DivisorType`]:
//!    - **mixed**: kept as drawn
//!    - **positive**: negatives are negated, `i64::MIN` becomes `i64::MAX`
//!    - **negative**: positives are negated
//!
//! # Example
//!
//! ```
//! use udivbench::config::workload::{DivisorType, TrialConfig};
//! use udivbench::operand::generate;
//!
//! let buffers = generate(&TrialConfig::new(DivisorType::Positive, 1024));
//! assert_eq!(buffers.len(), 1024);
//! assert!(buffers.divisors.iter().all(|&d| d > 0));
//! ```

pub mod source;

use crate::config::workload::{DivisorType, TrialConfig};
use source::{RandomSource, SeededSource};

/// Fixed seed of the operand random source
pub const SEED: u64 = 0;

/// Operand and result buffers of one trial
///
/// All four buffers have the same length and are indexed in parallel.
/// `quotients` and `remainders` are scratch space owned by whichever
/// operation ran last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSet {
    pub dividends: Vec<i64>,
    /// Never contains zero
    pub divisors: Vec<i64>,
    pub quotients: Vec<i64>,
    pub remainders: Vec<i64>,
}

impl BufferSet {
    /// Number of operand pairs
    pub fn len(&self) -> usize {
        self.dividends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dividends.is_empty()
    }
}

/// Apply the zero fixup and sign shaping to a divisor candidate
///
/// The result is never zero.
#[inline]
pub fn shape_divisor(candidate: i64, divisor_type: DivisorType) -> i64 {
    let divisor = if candidate == 0 { 1 } else { candidate };

    match divisor_type {
        DivisorType::Mixed => divisor,
        DivisorType::Positive => {
            if divisor == i64::MIN {
                i64::MAX
            } else {
                divisor.abs()
            }
        }
        // Negating a positive value cannot overflow.
        DivisorType::Negative => {
            if divisor > 0 {
                -divisor
            } else {
                divisor
            }
        }
    }
}

/// Generate the buffers for a trial from the fixed-seed source
pub fn generate(config: &TrialConfig) -> BufferSet {
    generate_with(config, &mut SeededSource::new(SEED))
}

/// Generate the buffers for a trial from an arbitrary source
///
/// Per index the dividend is drawn first, then the divisor candidate.
pub fn generate_with<S: RandomSource + ?Sized>(config: &TrialConfig, source: &mut S) -> BufferSet {
    let size = config.buffer_size;
    let mut dividends = Vec::with_capacity(size);
    let mut divisors = Vec::with_capacity(size);

    for _ in 0..size {
        dividends.push(source.next_i64());
        divisors.push(shape_divisor(source.next_i64(), config.divisor_type));
    }

    debug_assert!(divisors.iter().all(|&d| d != 0));

    BufferSet {
        dividends,
        divisors,
        quotients: vec![0; size],
        remainders: vec![0; size],
    }
}
