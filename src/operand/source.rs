//! Random sources for operand generation
//!
//! The generator never talks to a PRNG directly. It pulls raw 64-bit draws
//! through [`RandomSource`], which keeps the seeded production source and
//! scripted test sources interchangeable.
//!
//! # Algorithm
//!
//! [`SeededSource`] is xoshiro256++ with its 256-bit state expanded from a
//! 64-bit seed by SplitMix64. Both algorithms are fully specified, so the
//! operand sequence is stable across platforms, compiler versions and ports
//! to other languages. A platform "default" generator offers no such promise.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Source of uniformly distributed signed 64-bit values
pub trait RandomSource {
    /// Draw the next value. Every bit pattern is equally likely.
    fn next_i64(&mut self) -> i64;
}

/// Deterministic xoshiro256++ source
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: Xoshiro256PlusPlus,
}

impl SeededSource {
    /// Create a source seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    #[inline]
    fn next_i64(&mut self) -> i64 {
        self.rng.next_u64() as i64
    }
}

/// Source replaying a fixed list of values, cycling when exhausted
///
/// Useful for pinning down generator edge cases such as `i64::MIN`
/// or zero candidates.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a scripted source. `values` must not be empty.
    pub fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_i64(&mut self) -> i64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
