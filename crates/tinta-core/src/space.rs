//! Device-independent color value types.
//!
//! - [`Xyz`] - CIE 1931 XYZ, Y normalized to 1 for the reference white
//! - [`CieLab`] - CIE L*a*b* relative to the ICC D50 white
//! - [`OklabColor`] - OKLab (Ottosson 2020), D65-referenced
//! - [`OklchColor`] - cylindrical OKLab plus alpha, the editing representation
//!
//! These are plain values; the conversions between them live in
//! `tinta-color`.

/// CIE XYZ tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X.
    pub x: f64,
    /// Y (luminance).
    pub y: f64,
    /// Z.
    pub z: f64,
}

impl Xyz {
    /// Creates an XYZ triplet.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// CIE L*a*b* (D50).
///
/// `l` is in [0, 100]; `a` and `b` are roughly [-128, 127] for real colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CieLab {
    /// Lightness L*, 0..100.
    pub l: f64,
    /// Green-red axis a*.
    pub a: f64,
    /// Blue-yellow axis b*.
    pub b: f64,
}

impl CieLab {
    /// Creates a Lab triplet.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<[f64; 3]> for CieLab {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

/// OKLab color (Cartesian form).
///
/// Relates to [`OklchColor`] through `c = sqrt(a² + b²)` and
/// `h = atan2(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OklabColor {
    /// Perceptual lightness, 0..1 for displayable colors.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl OklabColor {
    /// Creates an OKLab triplet.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance to another OKLab color (ΔE_OK).
    ///
    /// A difference of about 0.02 is the usual just-noticeable threshold.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// OKLCH color with alpha.
///
/// The canonical, device-independent representation: all editing state in
/// an embedding application is expressed in this type.
///
/// - `lightness` in [0, 1]
/// - `chroma` ≥ 0 (sRGB tops out near 0.37)
/// - `hue` in degrees, circular: 0 and 360 are the same angle
/// - `alpha` in [0, 1]
///
/// # Example
///
/// ```
/// use tinta_core::OklchColor;
///
/// let c = OklchColor::new(0.7, 0.15, 360.0).normalized();
/// assert_eq!(c.hue, 0.0);
/// assert_eq!(c.alpha, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OklchColor {
    /// Perceptual lightness, 0 = black, 1 = white.
    pub lightness: f64,
    /// Colorfulness, 0 = gray.
    pub chroma: f64,
    /// Hue angle in degrees.
    pub hue: f64,
    /// Opacity, 0 = transparent.
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub alpha: f64,
}

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}

impl OklchColor {
    /// Creates an opaque OKLCH color.
    #[inline]
    pub const fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self { lightness, chroma, hue, alpha: 1.0 }
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Brings every component into its documented domain.
    ///
    /// Lightness and alpha are clamped to [0, 1], negative chroma becomes 0,
    /// hue is wrapped into [0, 360). Non-finite components fall back to 0
    /// (alpha to 1).
    pub fn normalized(self) -> Self {
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };

        let hue = finite_or(self.hue, 0.0).rem_euclid(360.0);
        Self {
            lightness: finite_or(self.lightness, 0.0).clamp(0.0, 1.0),
            chroma: finite_or(self.chroma, 0.0).max(0.0),
            hue: if hue >= 360.0 { 0.0 } else { hue },
            alpha: finite_or(self.alpha, 1.0).clamp(0.0, 1.0),
        }
    }
}

impl Default for OklchColor {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
