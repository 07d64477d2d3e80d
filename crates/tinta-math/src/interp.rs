//! Interpolation utilities for color processing.
//!
//! - Linear interpolation ([`lerp`])
//! - Hue wrapping ([`normalize_hue`])
//! - Clamping ([`saturate`])
//!
//! # Usage
//!
//! ```rust
//! use tinta_math::{lerp, saturate};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(saturate(1.5), 1.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamps a value to [0, 1].
///
/// NaN maps to 0.
#[inline]
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Wraps a hue angle into [0, 360).
///
/// `360.0` and `0.0` map to the same bit pattern, which is what makes
/// hue-periodic conversions bit-identical at the seam.
///
/// # Example
///
/// ```rust
/// use tinta_math::normalize_hue;
///
/// assert_eq!(normalize_hue(360.0), 0.0);
/// assert_eq!(normalize_hue(-90.0), 270.0);
/// ```
#[inline]
pub fn normalize_hue(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}
