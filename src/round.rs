//! Rounding helpers shared by labeling and display formatting.
//!
//! Rounding is half-up (toward positive infinity on ties) everywhere, so
//! `-2.5` rounds to `-2`. Custom label scales may be negative and must round
//! consistently in both directions.

/// Round to the nearest integer, ties toward positive infinity.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to a fixed number of decimal digits (half-up).
#[inline]
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    round_half_up(x * p) / p
}

/// Round to the nearest multiple of `step` (half-up).
#[inline]
pub fn round_to_multiple(x: f64, step: f64) -> f64 {
    round_half_up(x / step) * step
}

/// Clamp to the unit interval.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}
