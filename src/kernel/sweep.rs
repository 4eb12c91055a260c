//! Buffer sweeps, one per measured operation
//!
//! Every sweep walks its input slices in parallel and writes exactly one
//! result per index. Output slices shorter than the inputs bound the sweep.
//!
//! The constant-divisor sweeps spell their divisor as a literal so the
//! compiler is free to strength-reduce the division. Keep them that way.
//!
//! Sweeps over the runtime `divisors` buffer require every divisor to be
//! non-zero. The operand generator guarantees it and nothing here re-checks;
//! a zero divisor panics mid-sweep.

use super::unsigned::{unsigned_divide, unsigned_remainder};

#[inline(never)]
pub fn divide_unsigned(dividends: &[i64], divisors: &[i64], quotients: &mut [i64]) {
    for ((q, &n), &d) in quotients.iter_mut().zip(dividends).zip(divisors) {
        *q = unsigned_divide(n, d);
    }
}

#[inline(never)]
pub fn remainder_unsigned(dividends: &[i64], divisors: &[i64], remainders: &mut [i64]) {
    for ((r, &n), &d) in remainders.iter_mut().zip(dividends).zip(divisors) {
        *r = unsigned_remainder(n, d);
    }
}

/// Quotient and remainder computed together from the same loaded operands
#[inline(never)]
pub fn divide_remainder_unsigned(
    dividends: &[i64],
    divisors: &[i64],
    quotients: &mut [i64],
    remainders: &mut [i64],
) {
    let outputs = quotients.iter_mut().zip(remainders.iter_mut());
    for ((q, r), (&dividend, &divisor)) in outputs.zip(dividends.iter().zip(divisors)) {
        *q = unsigned_divide(dividend, divisor);
        *r = unsigned_remainder(dividend, divisor);
    }
}

/// Signed division by 7 of the dividend's low 32 bits, sign-extended
#[inline(never)]
pub fn divide_constant_bounded(dividends: &[i64], quotients: &mut [i64]) {
    for (q, &n) in quotients.iter_mut().zip(dividends) {
        *q = i64::from(n as i32) / 7;
    }
}

#[inline(never)]
pub fn divide_unsigned_constant(dividends: &[i64], quotients: &mut [i64]) {
    for (q, &n) in quotients.iter_mut().zip(dividends) {
        *q = unsigned_divide(n, 7);
    }
}

/// Unsigned division by 15 of the dividend's low 32 bits, zero-extended
#[inline(never)]
pub fn divide_unsigned_constant_bounded(dividends: &[i64], quotients: &mut [i64]) {
    for (q, &n) in quotients.iter_mut().zip(dividends) {
        *q = unsigned_divide(i64::from(n as u32), 15);
    }
}

#[inline(never)]
pub fn remainder_unsigned_constant(dividends: &[i64], remainders: &mut [i64]) {
    for (r, &n) in remainders.iter_mut().zip(dividends) {
        *r = unsigned_remainder(n, 7);
    }
}
