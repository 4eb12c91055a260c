//! Unsigned division on signed storage
//!
//! Operands live in `i64` buffers but are interpreted as unsigned 64-bit
//! magnitudes. The result bit pattern is reinterpreted back as `i64`, so a
//! quotient above `i64::MAX` comes back negative.

/// Divide two 64-bit patterns as unsigned magnitudes
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline(always)]
pub fn unsigned_divide(dividend: i64, divisor: i64) -> i64 {
    ((dividend as u64) / (divisor as u64)) as i64
}

/// Remainder of two 64-bit patterns as unsigned magnitudes
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline(always)]
pub fn unsigned_remainder(dividend: i64, divisor: i64) -> i64 {
    ((dividend as u64) % (divisor as u64)) as i64
}
