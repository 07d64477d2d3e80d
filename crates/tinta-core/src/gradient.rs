//! Gradient sample type.

use crate::pixel::DisplayColor;

/// One sample of a sampled OKLCH ramp.
///
/// `requested` is the raw conversion of the sampled OKLCH value with each
/// channel clamped independently, so it can drift in hue when the value is
/// out of gamut. `fallback` is the gamut-mapped color with lightness and hue
/// preserved; renderers that cannot show the requested color use it instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position along the ramp, in [0, 1].
    pub t: f64,
    /// Per-channel clamped conversion.
    pub requested: DisplayColor,
    /// Gamut-mapped conversion.
    pub fallback: DisplayColor,
}

impl GradientStop {
    /// True when gamut mapping changed the 8-bit result.
    #[inline]
    pub fn needs_fallback(&self) -> bool {
        self.requested != self.fallback
    }
}
