//! Sampled OKLCH ramps for slider previews.
//!
//! A [`GradientRange`] sweeps one OKLCH component of a base color between
//! two values; [`generate_gradient_stops`] samples it into
//! [`GradientStop`]s carrying both the requested and the gamut-mapped
//! rendition of every sample.
//!
//! # Example
//!
//! ```rust
//! use tinta_color::{GradientRange, generate_gradient_stops};
//! use tinta_core::OklchColor;
//!
//! let range = GradientRange::chroma(OklchColor::new(0.7, 0.0, 150.0));
//! let stops = generate_gradient_stops(&range, 300);
//! assert_eq!(stops.len(), 300);
//! assert_eq!(stops[299].t, 1.0);
//! ```

use rayon::prelude::*;
use tinta_core::{GradientStop, OklchColor};
use tinta_math::lerp;

use crate::convert::{color_from_oklch, color_from_oklch_unmapped};
use crate::gamut::MAX_SEARCH_CHROMA;

/// OKLCH component swept by a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GradientAxis {
    /// Perceptual lightness.
    Lightness,
    /// Chroma.
    Chroma,
    /// Hue, in degrees. Interpolated linearly, not along the shorter arc,
    /// so a 0..360 sweep covers the full circle.
    Hue,
    /// Opacity.
    Alpha,
}

/// A one-dimensional sweep through OKLCH.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientRange {
    /// Color supplying the components that are held fixed.
    pub base: OklchColor,
    /// Component being swept.
    pub axis: GradientAxis,
    /// Value at `t = 0`.
    pub start: f64,
    /// Value at `t = 1`.
    pub end: f64,
}

impl GradientRange {
    /// Creates a sweep of `axis` from `start` to `end`.
    pub fn new(base: OklchColor, axis: GradientAxis, start: f64, end: f64) -> Self {
        Self { base, axis, start, end }
    }

    /// Lightness from 0 to 1.
    pub fn lightness(base: OklchColor) -> Self {
        Self::new(base, GradientAxis::Lightness, 0.0, 1.0)
    }

    /// Chroma from 0 to [`MAX_SEARCH_CHROMA`].
    pub fn chroma(base: OklchColor) -> Self {
        Self::new(base, GradientAxis::Chroma, 0.0, MAX_SEARCH_CHROMA)
    }

    /// Hue around the full circle.
    pub fn hue(base: OklchColor) -> Self {
        Self::new(base, GradientAxis::Hue, 0.0, 360.0)
    }

    /// Alpha from transparent to opaque.
    pub fn alpha(base: OklchColor) -> Self {
        Self::new(base, GradientAxis::Alpha, 0.0, 1.0)
    }

    /// The OKLCH color at position `t`.
    ///
    /// `t` is not clamped; positions outside [0, 1] extrapolate. `t = 0`
    /// and `t = 1` return `start` and `end` bit for bit.
    pub fn sample(&self, t: f64) -> OklchColor {
        // a + (b - a) * 1 can miss b by an ulp
        let v = if t == 1.0 { self.end } else { lerp(self.start, self.end, t) };
        let base = self.base;
        match self.axis {
            GradientAxis::Lightness => OklchColor { lightness: v, ..base },
            GradientAxis::Chroma => OklchColor { chroma: v, ..base },
            GradientAxis::Hue => OklchColor { hue: v, ..base },
            GradientAxis::Alpha => OklchColor { alpha: v, ..base },
        }
    }
}

/// Samples `steps` evenly spaced stops along `range`.
///
/// Stop `i` sits at `t = i / (steps - 1)`, so the first and last stops hit
/// the range ends exactly. One step yields a single stop at `t = 0`; zero
/// steps yield nothing. Sampling runs in parallel and the output is in
/// ascending `t`.
pub fn generate_gradient_stops(range: &GradientRange, steps: usize) -> Vec<GradientStop> {
    let last = steps.saturating_sub(1).max(1) as f64;

    (0..steps)
        .into_par_iter()
        .map(|i| {
            let t = i as f64 / last;
            let c = range.sample(t);
            GradientStop {
                t,
                requested: color_from_oklch_unmapped(c.lightness, c.chroma, c.hue, c.alpha),
                fallback: color_from_oklch(c.lightness, c.chroma, c.hue, c.alpha),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinta_core::DisplayColor;

    #[test]
    fn test_step_counts() {
        let range = GradientRange::lightness(OklchColor::new(0.5, 0.1, 30.0));
        assert!(generate_gradient_stops(&range, 0).is_empty());

        let one = generate_gradient_stops(&range, 1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].t, 0.0);

        let two = generate_gradient_stops(&range, 2);
        assert_eq!(two[0].t, 0.0);
        assert_eq!(two[1].t, 1.0);
    }

    #[test]
    fn test_lightness_ramp_endpoints() {
        let range = GradientRange::lightness(OklchColor::new(0.5, 0.2, 30.0));
        let stops = generate_gradient_stops(&range, 11);
        assert_eq!(stops[0].fallback, DisplayColor::BLACK);
        assert_eq!(stops[10].fallback, DisplayColor::WHITE);
    }

    #[test]
    fn test_ends_are_exact() {
        // 0.2 + (0.9 - 0.2) lands one ulp below 0.9
        let base = OklchColor::new(0.5, 0.1, 30.0);
        let range = GradientRange::new(base, GradientAxis::Lightness, 0.2, 0.9);
        assert_eq!(range.sample(0.0).lightness, 0.2);
        assert_eq!(range.sample(1.0).lightness, 0.9);

        let stops = generate_gradient_stops(&range, 7);
        assert_eq!(stops[6].t, 1.0);
        assert_eq!(stops[6].fallback, color_from_oklch(0.9, 0.1, 30.0, 1.0));
    }

    #[test]
    fn test_order_preserved() {
        let range = GradientRange::hue(OklchColor::new(0.7, 0.1, 0.0));
        let stops = generate_gradient_stops(&range, 300);
        for (i, stop) in stops.iter().enumerate() {
            assert_eq!(stop.t, i as f64 / 299.0);
            let c = range.sample(stop.t);
            assert_eq!(stop.fallback, color_from_oklch(c.lightness, c.chroma, c.hue, c.alpha));
        }
    }

    #[test]
    fn test_hue_sweep_wraps() {
        let range = GradientRange::hue(OklchColor::new(0.7, 0.1, 0.0));
        let stops = generate_gradient_stops(&range, 5);
        assert_eq!(stops[0].fallback, stops[4].fallback);
    }

    #[test]
    fn test_chroma_sweep_fallback_saturates() {
        let range = GradientRange::chroma(OklchColor::new(0.7, 0.0, 180.0));
        let stops = generate_gradient_stops(&range, 41);
        let last = stops[40];
        assert!(last.needs_fallback());
        assert_eq!(last.fallback, color_from_oklch(0.7, 0.4, 180.0, 1.0));
        assert!(!stops[0].needs_fallback());
    }

    #[test]
    fn test_alpha_sweep() {
        let range = GradientRange::alpha(OklchColor::new(0.6, 0.05, 90.0));
        let stops = generate_gradient_stops(&range, 3);
        assert_eq!(stops[0].fallback.a, 0);
        assert_eq!(stops[1].fallback.a, 128);
        assert_eq!(stops[2].fallback.a, 255);
        assert_eq!(stops[0].fallback.rgb_array(), stops[2].fallback.rgb_array());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_range_serde() {
        let range = GradientRange::new(OklchColor::new(0.5, 0.1, 10.0), GradientAxis::Hue, 10.0, 350.0);
        let yaml = serde_yaml::to_string(&range).unwrap();
        assert!(yaml.contains("axis: hue"));
        let back: GradientRange = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, range);
    }
}
