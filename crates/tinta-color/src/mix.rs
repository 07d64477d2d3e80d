//! Pigment mixing in Mixbox latent space.
//!
//! Mixbox models every color as a blend of four base pigments plus an RGB
//! residual. Mixing two colors interpolates those seven latent numbers and
//! decodes the result, so blue and yellow give green the way paint does
//! instead of the gray a straight RGB blend produces.
//!
//! # Latent Layout
//!
//! ```text
//! [c0, c1, c2, c3, dr, dg, db]
//!  \__________/   \_________/
//!   pigment        residual = rgb - mix(c)
//!   concentrations
//! ```
//!
//! `c0..c2` come from the [`PigmentLookupTable`] by trilinear interpolation;
//! `c3 = 1 - (c0 + c1 + c2)`. `mix(c)` is a fixed cubic polynomial in the
//! concentrations that predicts the color of the pigment blend.
//!
//! # Reference
//!
//! Sochorová, Jamriška, "Practical Pigment Mixing for Digital Painting",
//! ACM Transactions on Graphics 40(6), 2021.

use std::ops::{Add, Mul};
use std::sync::Arc;

use tinta_core::DisplayColor;
use tinta_lut::{LutResult, PigmentLookupTable};
use tinta_math::{lerp, saturate};
use tinta_transfer::{quantize, srgb};

/// Number of latent components.
pub const LATENT_SIZE: usize = 7;

/// A color in Mixbox latent space.
///
/// Latents mix linearly: weighted sums of latents (weights summing to one)
/// decode to the corresponding pigment blend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Latent(pub [f64; LATENT_SIZE]);

impl Latent {
    /// Pigment concentrations `[c0, c1, c2, c3]`.
    #[inline]
    pub fn concentrations(&self) -> [f64; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// RGB residual against the mixing polynomial.
    #[inline]
    pub fn residual(&self) -> [f64; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self(std::array::from_fn(|i| lerp(self.0[i], other.0[i], t)))
    }
}

impl Add for Latent {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Mul<f64> for Latent {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|v| v * rhs))
    }
}

// ============================================================================
// Mixing polynomial
// ============================================================================

/// Predicted encoded sRGB of a four-pigment blend.
fn mix_polynomial(c: [f64; 4]) -> [f64; 3] {
    let [c0, c1, c2, c3] = c;

    let c00 = c0 * c0;
    let c11 = c1 * c1;
    let c22 = c2 * c2;
    let c33 = c3 * c3;
    let c01 = c0 * c1;
    let c02 = c0 * c2;
    let c12 = c1 * c2;

    let terms: [(f64, [f64; 3]); 20] = [
        (c0 * c00, [0.07717053, 0.02826978, 0.24832992]),
        (c1 * c11, [0.95912302, 0.80256528, 0.03561839]),
        (c2 * c22, [0.74683774, 0.04868586, 0.00000000]),
        (c3 * c33, [0.99518138, 0.99978149, 0.99704802]),
        (c00 * c1, [0.04819146, 0.83363781, 0.32515377]),
        (c01 * c1, [-0.68146950, 1.46107803, 1.06980936]),
        (c00 * c2, [0.27058419, -0.15324870, 1.98735057]),
        (c02 * c2, [0.80478189, 0.67093710, 0.18424500]),
        (c00 * c3, [-0.35031003, 1.37855826, 3.68865000]),
        (c0 * c33, [1.05128046, 1.97815239, 2.82989073]),
        (c11 * c2, [3.21607125, 0.81270228, 1.03384539]),
        (c1 * c22, [2.78893374, 0.41565549, -0.04487295]),
        (c11 * c3, [3.02162577, 2.55374103, 0.32766114]),
        (c1 * c33, [2.95124691, 2.81201112, 1.17578442]),
        (c22 * c3, [2.82677043, 0.79933038, 1.81715262]),
        (c2 * c33, [2.99691099, 1.22593053, 1.80653661]),
        (c01 * c2, [1.87394106, 2.05027182, -0.29835996]),
        (c01 * c3, [2.56609566, 7.03428198, 0.62575374]),
        (c02 * c3, [4.08329484, -1.40408358, 2.14995522]),
        (c12 * c3, [6.00078678, 2.55552042, 1.90739502]),
    ];

    let mut rgb = [0.0; 3];
    for (w, k) in terms {
        rgb[0] += w * k[0];
        rgb[1] += w * k[1];
        rgb[2] += w * k[2];
    }
    rgb
}

// ============================================================================
// Mixer
// ============================================================================

/// Pigment mixer over a shared, read-only lookup table.
///
/// Cloning is cheap; clones share the table.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use tinta_color::PigmentMixer;
/// use tinta_core::DisplayColor;
/// use tinta_lut::PigmentLookupTable;
///
/// let table = Arc::new(PigmentLookupTable::from_fn(|r, g, b| [(r * 4) as u8, (g * 2) as u8, b as u8]));
/// let mixer = PigmentMixer::new(table);
///
/// let a = DisplayColor::rgb(0, 33, 133);
/// let b = DisplayColor::rgb(252, 211, 0);
/// assert_eq!(mixer.mix_pigments(a, b, 0.0), a);
/// assert_eq!(mixer.mix_pigments(a, b, 1.0), b);
/// ```
#[derive(Debug, Clone)]
pub struct PigmentMixer {
    table: Arc<PigmentLookupTable>,
}

impl PigmentMixer {
    /// Creates a mixer over a shared table.
    pub fn new(table: Arc<PigmentLookupTable>) -> Self {
        Self { table }
    }

    /// Parses a table blob and creates a mixer owning it.
    pub fn from_bytes(bytes: &[u8]) -> LutResult<Self> {
        Ok(Self::new(Arc::new(PigmentLookupTable::from_bytes(bytes)?)))
    }

    /// The shared table.
    pub fn table(&self) -> &Arc<PigmentLookupTable> {
        &self.table
    }

    /// Encodes gamma-encoded sRGB in [0, 1] into latent space.
    pub fn rgb_to_latent(&self, rgb: [f64; 3]) -> Latent {
        let rgb = rgb.map(saturate);
        let [c0, c1, c2] = self.table.concentrations(rgb);
        let c3 = 1.0 - (c0 + c1 + c2);
        let mixed = mix_polynomial([c0, c1, c2, c3]);

        Latent([
            c0,
            c1,
            c2,
            c3,
            rgb[0] - mixed[0],
            rgb[1] - mixed[1],
            rgb[2] - mixed[2],
        ])
    }

    /// Decodes a latent to gamma-encoded sRGB, clamped to [0, 1].
    pub fn latent_to_rgb(&self, latent: &Latent) -> [f64; 3] {
        let mixed = mix_polynomial(latent.concentrations());
        let residual = latent.residual();
        std::array::from_fn(|i| saturate(mixed[i] + residual[i]))
    }

    /// Mixes two gamma-encoded sRGB colors.
    ///
    /// `t` is clamped to [0, 1] (NaN reads as 0); the endpoints return the
    /// inputs unchanged.
    pub fn mix_float(&self, a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
        let t = saturate(t);
        if t == 0.0 {
            return a;
        }
        if t == 1.0 {
            return b;
        }
        let la = self.rgb_to_latent(a);
        let lb = self.rgb_to_latent(b);
        self.latent_to_rgb(&la.lerp(&lb, t))
    }

    /// Mixes two linear-light sRGB colors.
    ///
    /// Latent space is defined on encoded values, so the inputs are encoded
    /// before mixing and the result decoded after.
    pub fn mix_linear_float(&self, a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
        let t = saturate(t);
        if t == 0.0 {
            return a;
        }
        if t == 1.0 {
            return b;
        }
        let mixed = self.mix_float(srgb::oetf_rgb(a), srgb::oetf_rgb(b), t);
        srgb::eotf_rgb(mixed)
    }

    /// Mixes two display colors as pigments.
    ///
    /// Alpha is interpolated linearly. `mix_pigments(a, b, 0) == a` and
    /// `mix_pigments(a, b, 1) == b` exactly.
    pub fn mix_pigments(&self, a: DisplayColor, b: DisplayColor, t: f64) -> DisplayColor {
        let t = saturate(t);
        if t == 0.0 {
            return a;
        }
        if t == 1.0 {
            return b;
        }

        let la = self.rgb_to_latent(quantize::decode_rgb_u8(a.rgb_array()));
        let lb = self.rgb_to_latent(quantize::decode_rgb_u8(b.rgb_array()));
        let rgb = quantize::encode_rgb_u8(self.latent_to_rgb(&la.lerp(&lb, t)));

        let alpha = lerp(f64::from(a.a), f64::from(b.a), t).round() as u8;
        DisplayColor::from(rgb).with_alpha(alpha)
    }

    /// Weighted mix of any number of display colors.
    ///
    /// Weights are normalized to sum to one; entries with non-positive or
    /// non-finite weights are ignored. Returns `None` when no entry carries
    /// weight or the total weight overflows.
    pub fn mix_many(&self, colors: &[(DisplayColor, f64)]) -> Option<DisplayColor> {
        let weight = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };

        let total: f64 = colors.iter().map(|&(_, w)| weight(w)).sum();
        if !(total > 0.0 && total.is_finite()) {
            return None;
        }

        let mut latent = Latent::default();
        let mut alpha = 0.0;
        for &(color, w) in colors {
            let w = weight(w);
            if w == 0.0 {
                continue;
            }
            let w = w / total;
            latent = latent + self.rgb_to_latent(quantize::decode_rgb_u8(color.rgb_array())) * w;
            alpha += f64::from(color.a) * w;
        }

        let rgb = quantize::encode_rgb_u8(self.latent_to_rgb(&latent));
        Some(DisplayColor::from(rgb).with_alpha(alpha.round().clamp(0.0, 255.0) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn zero_table_mixer() -> PigmentMixer {
        PigmentMixer::new(Arc::new(PigmentLookupTable::from_fn(|_, _, _| [0, 0, 0])))
    }

    /// Deterministic noise table with c0 + c1 + c2 <= 1 everywhere.
    fn noise_table_mixer() -> PigmentMixer {
        let mut state: u32 = 0x2545_f491;
        let table = PigmentLookupTable::from_fn(|_, _, _| {
            let mut next = || {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                ((state >> 24) % 86) as u8
            };
            [next(), next(), next()]
        });
        PigmentMixer::new(Arc::new(table))
    }

    #[test]
    fn test_polynomial_pure_fourth_pigment() {
        let rgb = mix_polynomial([0.0, 0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(rgb[0], 0.99518138, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb[1], 0.99978149, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb[2], 0.99704802, epsilon = 1e-12);
    }

    #[test]
    fn test_latent_roundtrip() {
        let mixer = noise_table_mixer();
        for rgb in [[0.1, 0.2, 0.3], [0.9, 0.5, 0.05], [1.0, 1.0, 1.0]] {
            let back = mixer.latent_to_rgb(&mixer.rgb_to_latent(rgb));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_table_is_plain_lerp() {
        // Constant concentrations leave only the residual to interpolate
        let mixer = zero_table_mixer();
        let mid = mixer.mix_float([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], 0.5);
        assert_abs_diff_eq!(mid[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[2], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_endpoints_exact() {
        let mixer = noise_table_mixer();
        let a = DisplayColor::new(0, 33, 133, 200);
        let b = DisplayColor::rgb(252, 211, 0);
        assert_eq!(mixer.mix_pigments(a, b, 0.0), a);
        assert_eq!(mixer.mix_pigments(a, b, 1.0), b);
        assert_eq!(mixer.mix_pigments(a, b, -3.0), a);
        assert_eq!(mixer.mix_pigments(a, b, 7.0), b);
        assert_eq!(mixer.mix_pigments(a, b, f64::NAN), a);
    }

    #[test]
    fn test_alpha_lerp() {
        let mixer = zero_table_mixer();
        let a = DisplayColor::new(10, 10, 10, 0);
        let b = DisplayColor::new(10, 10, 10, 255);
        assert_eq!(mixer.mix_pigments(a, b, 0.5).a, 128);
    }

    #[test]
    fn test_continuous_across_cell_boundaries() {
        let mixer = noise_table_mixer();
        for k in 1..63 {
            let edge = k as f64 / 63.0;
            let below = mixer.rgb_to_latent([edge - 1e-9, 0.4, 0.6]);
            let above = mixer.rgb_to_latent([edge + 1e-9, 0.4, 0.6]);
            for i in 0..LATENT_SIZE {
                assert!((below.0[i] - above.0[i]).abs() < 1e-4, "jump at cell {k}, component {i}");
            }
        }
    }

    #[test]
    fn test_mix_many() {
        let mixer = noise_table_mixer();
        let a = DisplayColor::rgb(200, 30, 30);
        let b = DisplayColor::rgb(30, 30, 200);

        assert_eq!(mixer.mix_many(&[]), None);
        assert_eq!(mixer.mix_many(&[(a, 0.0), (b, -1.0)]), None);

        let pair = mixer.mix_many(&[(a, 1.0), (b, 1.0)]).unwrap();
        assert_eq!(pair, mixer.mix_pigments(a, b, 0.5));

        // Zero-weight entries do not participate
        let solo = mixer.mix_many(&[(a, 2.0), (b, 0.0)]).unwrap();
        assert_eq!(solo, a);
    }

    #[test]
    fn test_mix_many_skips_unusable_weights() {
        let mixer = noise_table_mixer();
        let a = DisplayColor::rgb(200, 30, 30);
        let b = DisplayColor::rgb(30, 30, 200);
        let c = DisplayColor::rgb(10, 220, 10);

        let noisy = [
            (c, f64::NAN),
            (a, 1.0),
            (c, f64::INFINITY),
            (b, 1.0),
            (c, -3.0),
        ];
        assert_eq!(mixer.mix_many(&noisy), mixer.mix_many(&[(a, 1.0), (b, 1.0)]));
        assert_eq!(mixer.mix_many(&[(c, f64::NAN), (c, f64::NEG_INFINITY)]), None);
    }

    #[test]
    fn test_linear_variant_endpoints() {
        let mixer = noise_table_mixer();
        let a = [0.02, 0.5, 0.9];
        let b = [0.7, 0.1, 0.3];
        assert_eq!(mixer.mix_linear_float(a, b, 0.0), a);
        assert_eq!(mixer.mix_linear_float(a, b, 1.0), b);
        let mid = mixer.mix_linear_float(a, b, 0.5);
        assert!(mid.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
