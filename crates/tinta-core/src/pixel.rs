//! Device-referred pixel types.
//!
//! - [`DisplayColor`] - 8-bit gamma-encoded sRGB plus 8-bit alpha
//! - [`LinearRgb`] - linear-light sRGB primaries, unbounded `f64`
//!
//! # Memory Layout
//!
//! Both types are `#[repr(C)]` so that slices of them can be handed to
//! texture uploads without repacking.

use std::fmt;

/// 8-bit-per-channel sRGB color with 8-bit alpha.
///
/// This is the only color type that is ever shown on screen, copied to the
/// clipboard, or handed to a printer preview. Every value is valid by
/// construction.
///
/// # Example
///
/// ```
/// use tinta_core::DisplayColor;
///
/// let c = DisplayColor::rgb(38, 169, 241);
/// assert_eq!(c.a, 255);
/// assert_eq!(c.to_string(), "#26a9f1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct DisplayColor {
    /// Red (gamma-encoded).
    pub r: u8,
    /// Green (gamma-encoded).
    pub g: u8,
    /// Blue (gamma-encoded).
    pub b: u8,
    /// Alpha (straight, not premultiplied).
    pub a: u8,
}

impl DisplayColor {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Color channels as an array, alpha dropped.
    #[inline]
    pub const fn rgb_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// All four channels as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Alpha as a fraction in [0, 1].
    #[inline]
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<[u8; 4]> for DisplayColor {
    #[inline]
    fn from(a: [u8; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<[u8; 3]> for DisplayColor {
    #[inline]
    fn from(a: [u8; 3]) -> Self {
        Self::rgb(a[0], a[1], a[2])
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Linear-light RGB with sRGB primaries.
///
/// Channels are not clamped: values outside [0, 1] are how out-of-gamut
/// colors show up before gamut mapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct LinearRgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl LinearRgb {
    /// Creates a linear RGB triplet.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// True when every channel lies in `[-tolerance, 1 + tolerance]`.
    ///
    /// NaN channels are never in range.
    #[inline]
    pub fn in_unit_cube(self, tolerance: f64) -> bool {
        self.to_array()
            .iter()
            .all(|&v| v >= -tolerance && v <= 1.0 + tolerance)
    }
}

impl From<[f64; 3]> for LinearRgb {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}
