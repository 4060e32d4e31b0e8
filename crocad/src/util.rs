//! Rounding and arithmetic helpers shared by the generators.

use crate::error::{Error, Result};

/// Returns `value` rounded to the nearest multiple of `step`, clamped up to
/// `min`.
///
/// A value exactly halfway between two multiples rounds toward the larger
/// one. `min` is expected to itself be a multiple of `step`.
///
/// # Examples
///
/// ```
/// use crocad::util::round_to_nearest;
///
/// assert_eq!(round_to_nearest(9.0, 6, 0)?, 12);
/// assert_eq!(round_to_nearest(3.0, 6, 0)?, 6);
/// assert_eq!(round_to_nearest(2.0, 6, 6)?, 6);
/// # Ok::<(), crocad::Error>(())
/// ```
pub fn round_to_nearest(value: f64, step: u32, min: u32) -> Result<u32> {
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    let step = f64::from(step);
    // f64::round is half-away-from-zero, which is half-up on the
    // non-negative domain used here.
    let rounded = (value / step).round() * step;
    Ok((rounded as u32).max(min))
}

/// Elementwise [`round_to_nearest`] over a slice, preserving length and
/// order.
pub fn round_to_nearest_slice(values: &[f64], step: u32, min: u32) -> Result<Vec<u32>> {
    values
        .iter()
        .map(|&value| round_to_nearest(value, step, min))
        .collect()
}

/// Greatest common divisor of two numbers; `gcd(a, 0) == a`.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Total of a sequence of stitch counts; `sum(&[]) == 0`.
pub fn sum(values: &[u32]) -> u32 {
    values.iter().sum()
}
