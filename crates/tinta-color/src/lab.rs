//! CIE L*a*b* (D50), the ICC profile connection space.
//!
//! XYZ values in this crate are D65-referenced; they are carried to D50 with
//! the Bradford transform before the Lab nonlinearity and back again on the
//! way out.
//!
//! # Reference
//!
//! CIE 15:2004, with the exact CIE constants ε = 216/24389, κ = 24389/27.

use std::sync::LazyLock;

use tinta_core::{CieLab, OklchColor, Xyz};
use tinta_math::{BRADFORD, D50, D65, Mat3, Vec3, adapt_matrix};

use crate::oklab::{oklab_to_oklch, oklab_to_xyz, oklch_to_oklab, xyz_to_oklab};

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

static D65_TO_D50: LazyLock<Mat3> = LazyLock::new(|| adapt_matrix(BRADFORD, D65, D50));
static D50_TO_D65: LazyLock<Mat3> = LazyLock::new(|| adapt_matrix(BRADFORD, D50, D65));

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

/// XYZ (D65) to CIE Lab (D50).
pub fn xyz_to_lab(xyz: Xyz) -> CieLab {
    let d50 = *D65_TO_D50 * Vec3::new(xyz.x, xyz.y, xyz.z);

    let fx = f(d50.x / D50.x);
    let fy = f(d50.y / D50.y);
    let fz = f(d50.z / D50.z);

    CieLab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE Lab (D50) to XYZ (D65).
pub fn lab_to_xyz(lab: CieLab) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let y = if lab.l > KAPPA * EPSILON { fy * fy * fy } else { lab.l / KAPPA };
    let d50 = Vec3::new(f_inv(fx) * D50.x, y * D50.y, f_inv(fz) * D50.z);

    let d65 = *D50_TO_D65 * d50;
    Xyz::new(d65.x, d65.y, d65.z)
}

/// OKLCH to CIE Lab (D50). Alpha is dropped.
#[inline]
pub fn oklch_to_lab(color: OklchColor) -> CieLab {
    xyz_to_lab(oklab_to_xyz(oklch_to_oklab(color)))
}

/// CIE Lab (D50) to OKLCH, opaque.
#[inline]
pub fn lab_to_oklch(lab: CieLab) -> OklchColor {
    oklab_to_oklch(xyz_to_oklab(lab_to_xyz(lab)))
}
