//! 8-bit quantization of encoded channel values.
//!
//! Pipelines work in `f64` end to end and quantize exactly once, when the
//! final display color is produced.

/// Encodes a channel value in [0, 1] to an 8-bit code value.
///
/// Rounds to nearest and clamps; NaN maps to 0.
///
/// # Example
///
/// ```rust
/// use tinta_transfer::quantize::encode_u8;
///
/// assert_eq!(encode_u8(0.5), 128);
/// assert_eq!(encode_u8(1.7), 255);
/// assert_eq!(encode_u8(-0.2), 0);
/// ```
#[inline]
pub fn encode_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // `as` saturates, the clamp keeps rounding from overflowing first
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Decodes an 8-bit code value to [0, 1].
#[inline]
pub fn decode_u8(v: u8) -> f64 {
    f64::from(v) / 255.0
}

/// Encodes an RGB triplet.
#[inline]
pub fn encode_rgb_u8(rgb: [f64; 3]) -> [u8; 3] {
    rgb.map(encode_u8)
}

/// Decodes an RGB triplet.
#[inline]
pub fn decode_rgb_u8(rgb: [u8; 3]) -> [f64; 3] {
    rgb.map(decode_u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_value_roundtrips() {
        for v in 0..=255u8 {
            assert_eq!(encode_u8(decode_u8(v)), v);
        }
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(encode_u8(0.4 / 255.0), 0);
        assert_eq!(encode_u8(0.6 / 255.0), 1);
        assert_eq!(encode_u8(254.6 / 255.0), 255);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(encode_u8(f64::NAN), 0);
        assert_eq!(encode_u8(f64::INFINITY), 255);
        assert_eq!(encode_u8(f64::NEG_INFINITY), 0);
    }
}
