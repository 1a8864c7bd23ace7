//! Validated numeric predicates, primality, clamp.
//!
//! Auxiliary arguments (`min`/`max`, `divisor`) are deliberately not
//! validated: degenerate inputs yield degenerate but non-failing results,
//! e.g. `is_in_range` with `min > max` is always false and `is_divisible_by`
//! with a zero divisor is always false.

use crate::error::{InvalidArgument, Result};
use crate::value::Value;

fn expect_finite(function: &'static str, value: &Value) -> Result<f64> {
    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(InvalidArgument::new(function, "a finite number", value)),
    }
}

/// `%2` parity; non-integers allowed (3.5 is odd, 3.0 is even).
pub fn is_odd(value: &Value) -> Result<bool> {
    Ok(expect_finite("is_odd", value)? % 2.0 != 0.0)
}

pub fn is_even(value: &Value) -> Result<bool> {
    Ok(expect_finite("is_even", value)? % 2.0 == 0.0)
}

pub fn is_positive(value: &Value) -> Result<bool> {
    Ok(expect_finite("is_positive", value)? > 0.0)
}

pub fn is_negative(value: &Value) -> Result<bool> {
    Ok(expect_finite("is_negative", value)? < 0.0)
}

/// Inclusive bounds check.
pub fn is_in_range(value: &Value, min: f64, max: f64) -> Result<bool> {
    let n = expect_finite("is_in_range", value)?;
    Ok(n >= min && n <= max)
}

pub fn is_divisible_by(value: &Value, divisor: f64) -> Result<bool> {
    Ok(expect_finite("is_divisible_by", value)? % divisor == 0.0)
}

/// Strict primality: fails unless the value is a finite integer. Integers
/// below 2 are not prime; otherwise trial division by 2..=sqrt(n).
pub fn is_prime(value: &Value) -> Result<bool> {
    let n = match value.as_f64() {
        Some(x) if x.is_finite() && x.fract() == 0.0 => x as i64,
        _ => return Err(InvalidArgument::new("is_prime", "an integer", value)),
    };
    if n < 2 {
        return Ok(false);
    }
    let mut i: i64 = 2;
    while i * i <= n {
        if n % i == 0 {
            return Ok(false);
        }
        i += 1;
    }
    Ok(true)
}

/// `min(max(value, min), max)`. With `min > max` this degenerates to `max`,
/// matching the formula.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
