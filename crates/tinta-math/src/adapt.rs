//! Chromatic Adaptation Transforms (CAT).
//!
//! OKLab is defined relative to D65 while ICC profile connection space is
//! D50, so every trip into the CMM crosses white points. The Bradford
//! transform is the one ICC v4 mandates for that crossing.
//!
//! # Usage
//!
//! ```rust
//! use tinta_math::{adapt_matrix, BRADFORD, D65, D50};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let white = d65_to_d50 * D65;
//! assert!((white.z - D50.z).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

/// CIE Standard Illuminant D65, derived from the sRGB white chromaticity
/// (0.3127, 0.3290) so that RGB (1, 1, 1) lands on it exactly.
pub const D65: Vec3 = Vec3::new(0.3127 / 0.3290, 1.0, (1.0 - 0.3127 - 0.3290) / 0.3290);

/// ICC profile connection space illuminant (D50 as encoded in ICC headers).
pub const D50: Vec3 = Vec3::new(0.9642, 1.0, 0.8249);

/// Bradford chromatic adaptation matrix.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix transforms XYZ values from the source illuminant
/// to the destination illuminant: `M^-1 * diag(dst_cone / src_cone) * M`.
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    method_inv * scale * method
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d65_to_d50_white() {
        let m = adapt_matrix(BRADFORD, D65, D50);
        let result = m * D65;
        assert_abs_diff_eq!(result.x, D50.x, epsilon = 1e-9);
        assert_abs_diff_eq!(result.y, D50.y, epsilon = 1e-9);
        assert_abs_diff_eq!(result.z, D50.z, epsilon = 1e-9);
    }

    #[test]
    fn test_adapt_matrix_roundtrip() {
        let there = adapt_matrix(BRADFORD, D65, D50);
        let back = adapt_matrix(BRADFORD, D50, D65);
        let roundtrip = back * there;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(roundtrip.m[i][j], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_known_bradford_coefficients() {
        // Published D65 -> D50 Bradford matrix (Lindbloom), to 3 decimals.
        let m = adapt_matrix(BRADFORD, D65, D50);
        assert_abs_diff_eq!(m.m[0][0], 1.0478, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[1][1], 0.9904, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[2][2], 0.7521, epsilon = 1e-3);
    }

    #[test]
    fn test_illuminants_normalized() {
        assert_eq!(D65.y, 1.0);
        assert_eq!(D50.y, 1.0);
    }
}
