//! OKLab and OKLCH.
//!
//! OKLab (Ottosson 2020) is a perceptual space built from XYZ (D65) in three
//! steps: a linear map to cone-like LMS responses, a cube-root compression,
//! and a second linear map to lightness plus two opponent axes. OKLCH is its
//! polar form.
//!
//! # Reference
//!
//! - Björn Ottosson, "A perceptual color space for image processing" (2020)
//! - CSS Color Module Level 4, §9 (matrices recomputed against the exact
//!   sRGB primaries)

use std::sync::LazyLock;

use tinta_core::{OklabColor, OklchColor, Xyz};
use tinta_math::{Mat3, Vec3, normalize_hue};

/// XYZ (D65) to LMS.
pub const XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

/// Cube-rooted LMS to OKLab.
pub const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

static LMS_TO_XYZ: LazyLock<Mat3> =
    LazyLock::new(|| XYZ_TO_LMS.inverse().unwrap_or(Mat3::IDENTITY));

static OKLAB_TO_LMS: LazyLock<Mat3> =
    LazyLock::new(|| LMS_TO_OKLAB.inverse().unwrap_or(Mat3::IDENTITY));

/// XYZ (D65) to OKLab.
///
/// The cube root keeps its sign, so negative LMS responses from colors far
/// outside the spectral locus stay continuous.
#[inline]
pub fn xyz_to_oklab(xyz: Xyz) -> OklabColor {
    let lms = XYZ_TO_LMS * Vec3::new(xyz.x, xyz.y, xyz.z);
    let lab = LMS_TO_OKLAB * lms.map(f64::cbrt);
    OklabColor::new(lab.x, lab.y, lab.z)
}

/// OKLab to XYZ (D65).
#[inline]
pub fn oklab_to_xyz(lab: OklabColor) -> Xyz {
    let lms_ = *OKLAB_TO_LMS * Vec3::new(lab.l, lab.a, lab.b);
    let xyz = *LMS_TO_XYZ * lms_.map(|v| v * v * v);
    Xyz::new(xyz.x, xyz.y, xyz.z)
}

/// OKLCH to OKLab (polar to Cartesian). Alpha is dropped.
///
/// Hue is wrapped with [`normalize_hue`] before the trigonometry so 0° and
/// 360° give bit-identical results.
#[inline]
pub fn oklch_to_oklab(lch: OklchColor) -> OklabColor {
    let h = normalize_hue(lch.hue).to_radians();
    OklabColor::new(lch.lightness, lch.chroma * h.cos(), lch.chroma * h.sin())
}

/// OKLab to OKLCH (Cartesian to polar), opaque.
///
/// Hue is in [0, 360). For achromatic input the hue is whatever `atan2`
/// yields for the residual axes and carries no meaning.
#[inline]
pub fn oklab_to_oklch(lab: OklabColor) -> OklchColor {
    let chroma = lab.a.hypot(lab.b);
    let hue = normalize_hue(lab.b.atan2(lab.a).to_degrees());
    OklchColor::new(lab.l, chroma, hue)
}

/// Perceptual color difference ΔE_OK between two OKLCH colors.
///
/// Euclidean distance in OKLab; alpha is ignored.
///
/// # Example
///
/// ```rust
/// use tinta_color::delta_e_ok;
/// use tinta_core::OklchColor;
///
/// let a = OklchColor::new(0.7, 0.1, 0.0);
/// let b = OklchColor::new(0.7, 0.1, 360.0);
/// assert!(delta_e_ok(a, b) < 1e-12);
/// ```
#[inline]
pub fn delta_e_ok(a: OklchColor, b: OklchColor) -> f64 {
    oklch_to_oklab(a).distance(oklch_to_oklab(b))
}
