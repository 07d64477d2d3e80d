//! # tinta-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! Each RGB space is defined by the CIE xy chromaticities of its three
//! primaries and its white point. From those the 3x3 matrices to and from
//! CIE XYZ are derived.
//!
//! # Included Color Spaces
//!
//! | Color Space | White | Primary Use |
//! |-------------|-------|-------------|
//! | sRGB | D65 | Screen output, the engine's display space |
//! | Display P3 | D65 | Wide-gamut displays, soft-proof targets |
//! | Adobe RGB | D65 | Print-oriented RGB, soft-proof targets |
//!
//! # Usage
//!
//! ```rust
//! use tinta_primaries::{SRGB, rgb_to_xyz_matrix};
//! use tinta_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB);
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`tinta-math`] - Matrix operations
//!
//! # Used By
//!
//! - `tinta-color` - linear RGB <-> XYZ
//! - `tinta-icc` - in-memory standard profiles

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use tinta_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// All coordinates are CIE xy chromaticities.
///
/// # Example
///
/// ```rust
/// use tinta_primaries::Primaries;
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: (0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: (f64, f64) = (0.34567, 0.35850);

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Display P3 primaries (D65 white point).
///
/// DCI-P3 primaries with a D65 white point.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Adobe RGB",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ with Y=1.
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so RGB (1, 1, 1) maps to the white point
/// 3. Multiply primaries by scaling factors
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // M * S = W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries).inverse().unwrap_or(Mat3::IDENTITY)
}

// ============================================================================
// Pre-computed sRGB Matrices
// ============================================================================
// Rational forms from CSS Color Module Level 4; they are what
// `rgb_to_xyz_matrix(&SRGB)` yields, kept as constants so the hot path does
// not derive them.

/// Linear sRGB to XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [506752.0 / 1228815.0, 87881.0 / 245763.0, 12673.0 / 70218.0],
    [87098.0 / 409605.0, 175762.0 / 245763.0, 12673.0 / 175545.0],
    [7918.0 / 409605.0, 87881.0 / 737289.0, 1001167.0 / 1053270.0],
]);

/// XYZ (D65) to linear sRGB matrix.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [12831.0 / 3959.0, -329.0 / 214.0, -1974.0 / 3959.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [705.0 / 12673.0, -2585.0 / 12673.0, 705.0 / 667.0],
]);
