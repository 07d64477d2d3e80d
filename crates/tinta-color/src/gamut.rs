//! sRGB gamut test and chroma-reduction gamut mapping.
//!
//! An OKLCH color is displayable when its unclamped linear sRGB channels all
//! lie in the unit cube. Mapping holds lightness and hue fixed and searches
//! the largest displayable chroma, which is what keeps a hue slider from
//! drifting toward neighbouring hues when it hits the gamut edge.
//!
//! # Search
//!
//! Binary search over `[0, MAX_SEARCH_CHROMA]`. Displayability is monotone
//! in chroma along a constant-lightness, constant-hue ray (the ray starts on
//! the neutral axis and leaves a convex volume once), so the search converges
//! to the boundary.
//!
//! ```text
//! lo = 0, hi = 0.4
//! while hi - lo >= 1e-4 and iterations < 20:
//!     mid = (lo + hi) / 2
//!     if displayable(mid): lo = mid else: hi = mid
//! return lo
//! ```

use tinta_core::OklchColor;

use crate::convert::oklch_to_linear;

/// Slack around the unit cube, in linear RGB.
///
/// Colors sitting exactly on a cube face come out of the matrix chain a few
/// ULPs outside it; without slack, 8-bit colors with a 0 or 255 channel
/// would not survive a round trip.
pub const GAMUT_TOLERANCE: f64 = 1e-6;

/// Upper bound of the chroma search. No sRGB color exceeds it.
pub const MAX_SEARCH_CHROMA: f64 = 0.4;

/// Bracket width at which the chroma search stops.
pub const CHROMA_EPSILON: f64 = 1e-4;

/// Hard cap on chroma search iterations.
pub const MAX_ITERATIONS: usize = 20;

/// True when the OKLCH color converts to linear sRGB inside the unit cube
/// (within [`GAMUT_TOLERANCE`]).
///
/// No clamping or quantization is applied before the test. Non-finite input
/// is never displayable.
///
/// # Example
///
/// ```rust
/// use tinta_color::is_oklch_displayable;
///
/// assert!(is_oklch_displayable(0.7, 0.1, 240.0));
/// assert!(!is_oklch_displayable(0.7, 0.4, 180.0));
/// ```
#[inline]
pub fn is_oklch_displayable(lightness: f64, chroma: f64, hue: f64) -> bool {
    oklch_to_linear(OklchColor::new(lightness, chroma, hue)).in_unit_cube(GAMUT_TOLERANCE)
}

/// Largest displayable chroma at the given lightness and hue.
///
/// Returns 0 at or beyond the poles (lightness ≤ 0 or ≥ 1) and for
/// non-finite lightness, and [`MAX_SEARCH_CHROMA`] when even that is
/// displayable. Otherwise the result is displayable and within
/// [`CHROMA_EPSILON`] of the true boundary.
///
/// # Example
///
/// ```rust
/// use tinta_color::{get_max_chroma, is_oklch_displayable};
///
/// let c = get_max_chroma(0.7, 180.0);
/// assert!(is_oklch_displayable(0.7, c, 180.0));
/// assert!(!is_oklch_displayable(0.7, c + 0.01, 180.0));
/// ```
pub fn get_max_chroma(lightness: f64, hue: f64) -> f64 {
    if !(lightness > 0.0 && lightness < 1.0) {
        return 0.0;
    }
    if is_oklch_displayable(lightness, MAX_SEARCH_CHROMA, hue) {
        return MAX_SEARCH_CHROMA;
    }

    let mut lo = 0.0;
    let mut hi = MAX_SEARCH_CHROMA;
    for _ in 0..MAX_ITERATIONS {
        if hi - lo < CHROMA_EPSILON {
            break;
        }
        let mid = (lo + hi) * 0.5;
        if is_oklch_displayable(lightness, mid, hue) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Maps an OKLCH color into sRGB by reducing chroma.
///
/// Lightness, hue and alpha are returned unchanged; chroma never increases.
pub fn map_to_gamut(color: OklchColor) -> OklchColor {
    let color = color.normalized();
    if is_oklch_displayable(color.lightness, color.chroma, color.hue) {
        return color;
    }
    let max = get_max_chroma(color.lightness, color.hue);
    OklchColor { chroma: max.min(color.chroma), ..color }
}
