//! Conversion entry points between display and perceptual colors.
//!
//! # Functions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | [`DisplayColor`] | [`LinearRgb`] | [`srgb_to_linear`] |
//! | [`LinearRgb`] | [`DisplayColor`] | [`linear_to_srgb`] |
//! | [`LinearRgb`] | [`Xyz`] | [`linear_to_xyz`] |
//! | [`Xyz`] | [`LinearRgb`] | [`xyz_to_linear`] |
//! | [`OklchColor`] | [`LinearRgb`] | [`oklch_to_linear`] (unclamped) |
//! | [`DisplayColor`] | [`OklchColor`] | [`srgb_to_oklch`] |
//! | OKLCH + alpha | [`DisplayColor`] | [`color_from_oklch`] (gamut-mapped) |
//!
//! The [`ColorConvert`] trait exposes the same pipeline as methods.
//!
//! # Example
//!
//! ```rust
//! use tinta_color::ColorConvert;
//! use tinta_core::{DisplayColor, OklchColor};
//!
//! let c = DisplayColor::rgb(200, 80, 40);
//! let back = c.to_oklch().to_display();
//! assert_eq!(back, c);
//! ```

use tinta_core::{DisplayColor, LinearRgb, OklabColor, OklchColor, Xyz};
use tinta_math::Vec3;
use tinta_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use tinta_transfer::{quantize, srgb};

use crate::gamut::{get_max_chroma, is_oklch_displayable};
use crate::oklab::{oklab_to_oklch, oklab_to_xyz, oklch_to_oklab, xyz_to_oklab};

// ============================================================================
// Display <-> linear
// ============================================================================

/// Decodes an 8-bit sRGB color to linear light. Alpha is dropped.
#[inline]
pub fn srgb_to_linear(color: DisplayColor) -> LinearRgb {
    let [r, g, b] = srgb::eotf_rgb(quantize::decode_rgb_u8(color.rgb_array()));
    LinearRgb::new(r, g, b)
}

/// Encodes linear light to an opaque 8-bit sRGB color.
///
/// Each channel is clamped to [0, 1] and rounded to nearest. This is the
/// single quantization point of every pipeline in this crate.
#[inline]
pub fn linear_to_srgb(rgb: LinearRgb) -> DisplayColor {
    let encoded = srgb::oetf_rgb(rgb.to_array().map(|v| v.clamp(0.0, 1.0)));
    DisplayColor::from(quantize::encode_rgb_u8(encoded))
}

// ============================================================================
// Linear <-> XYZ
// ============================================================================

/// Linear sRGB to XYZ (D65).
#[inline]
pub fn linear_to_xyz(rgb: LinearRgb) -> Xyz {
    let v = SRGB_TO_XYZ * Vec3::from_array(rgb.to_array());
    Xyz::new(v.x, v.y, v.z)
}

/// XYZ (D65) to linear sRGB, unclamped.
#[inline]
pub fn xyz_to_linear(xyz: Xyz) -> LinearRgb {
    let v = XYZ_TO_SRGB * Vec3::new(xyz.x, xyz.y, xyz.z);
    LinearRgb::new(v.x, v.y, v.z)
}

// ============================================================================
// Composite pipelines
// ============================================================================

/// OKLCH to linear sRGB without clamping or gamut mapping.
///
/// Channels outside [0, 1] mean the color is not displayable.
#[inline]
pub fn oklch_to_linear(color: OklchColor) -> LinearRgb {
    xyz_to_linear(oklab_to_xyz(oklch_to_oklab(color)))
}

/// Full reverse pipeline: 8-bit sRGB to OKLCH.
///
/// No gamut mapping is needed since every 8-bit sRGB color is displayable.
/// Alpha is carried over as a fraction.
pub fn srgb_to_oklch(color: DisplayColor) -> OklchColor {
    let lab = xyz_to_oklab(linear_to_xyz(srgb_to_linear(color)));
    oklab_to_oklch(lab).with_alpha(color.alpha_f64())
}

/// Full forward pipeline: OKLCH to a displayable 8-bit sRGB color.
///
/// - Non-finite input is sanitized (NaN lightness, chroma and hue read as 0,
///   NaN alpha as 1) and components are clamped into their domains.
/// - Lightness at or below 0 gives black, at or above 1 gives white, at any
///   chroma.
/// - Out-of-gamut colors keep lightness and hue and drop to
///   [`get_max_chroma`].
///
/// # Example
///
/// ```rust
/// use tinta_color::color_from_oklch;
///
/// assert_eq!(color_from_oklch(0.7, 0.1, 0.0, 1.0), color_from_oklch(0.7, 0.1, 360.0, 1.0));
/// assert_eq!(color_from_oklch(1.0, 0.3, 240.0, 1.0).to_array(), [255, 255, 255, 255]);
/// ```
pub fn color_from_oklch(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> DisplayColor {
    let color = OklchColor { lightness, chroma, hue, alpha }.normalized();
    let a = quantize::encode_u8(color.alpha);

    if color.lightness <= 0.0 {
        return DisplayColor::BLACK.with_alpha(a);
    }
    if color.lightness >= 1.0 {
        return DisplayColor::WHITE.with_alpha(a);
    }

    let displayable = if is_oklch_displayable(color.lightness, color.chroma, color.hue) {
        color
    } else {
        let max = get_max_chroma(color.lightness, color.hue);
        tracing::trace!(requested = color.chroma, mapped = max, hue = color.hue, "chroma reduced into sRGB");
        OklchColor { chroma: max, ..color }
    };

    linear_to_srgb(oklch_to_linear(displayable)).with_alpha(a)
}

/// OKLCH to 8-bit sRGB with each channel clamped independently.
///
/// This is the "what was asked for" rendition: out-of-gamut colors shift in
/// hue and lightness instead of being mapped. Input is sanitized as in
/// [`color_from_oklch`] but no pole handling applies.
pub fn color_from_oklch_unmapped(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> DisplayColor {
    let color = OklchColor { lightness, chroma, hue, alpha }.normalized();
    linear_to_srgb(oklch_to_linear(color)).with_alpha(quantize::encode_u8(color.alpha))
}

// ============================================================================
// Trait form
// ============================================================================

/// Method-style conversions between the engine's color types.
///
/// # Example
///
/// ```rust
/// use tinta_color::ColorConvert;
/// use tinta_core::OklchColor;
///
/// let c = OklchColor::new(0.7, 0.15, 240.0).with_alpha(0.5);
/// let shown = c.to_display();
/// assert_eq!(shown.a, 128);
/// ```
pub trait ColorConvert: Sized {
    /// Converts to OKLCH.
    fn to_oklch(self) -> OklchColor;

    /// Converts to a displayable 8-bit color (gamut-mapped).
    fn to_display(self) -> DisplayColor {
        let c = self.to_oklch();
        color_from_oklch(c.lightness, c.chroma, c.hue, c.alpha)
    }

    /// Converts to Cartesian OKLab.
    fn to_oklab(self) -> OklabColor {
        oklch_to_oklab(self.to_oklch())
    }
}

impl ColorConvert for OklchColor {
    #[inline]
    fn to_oklch(self) -> OklchColor {
        self
    }
}

impl ColorConvert for OklabColor {
    #[inline]
    fn to_oklch(self) -> OklchColor {
        oklab_to_oklch(self)
    }

    #[inline]
    fn to_oklab(self) -> OklabColor {
        self
    }
}

impl ColorConvert for DisplayColor {
    #[inline]
    fn to_oklch(self) -> OklchColor {
        srgb_to_oklch(self)
    }

    #[inline]
    fn to_display(self) -> DisplayColor {
        self
    }
}

impl ColorConvert for LinearRgb {
    #[inline]
    fn to_oklch(self) -> OklchColor {
        oklab_to_oklch(xyz_to_oklab(linear_to_xyz(self)))
    }
}
