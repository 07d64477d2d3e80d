//! Built-in profiles.
//!
//! Handy as filter targets when no device profile is at hand, and in tests.

use lcms2::{CIExyY, CIExyYTRIPLE, Profile as LcmsProfile, ToneCurve};
use tinta_primaries::{ADOBE_RGB, DISPLAY_P3, Primaries};

use crate::{IccError, IccResult, Profile};

/// IEC 61966-2-1 piecewise curve as lcms2 parametric type 4:
/// `Y = (aX + b)^g` above `d`, `Y = cX` below.
const SRGB_CURVE: [f64; 5] = [2.4, 1.0 / 1.055, 0.055 / 1.055, 1.0 / 12.92, 0.04045];

/// Adobe RGB (1998) gamma, 563/256.
const ADOBE_GAMMA: f64 = 2.199_218_75;

/// Standard profile definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardProfile {
    /// IEC 61966-2-1 sRGB.
    Srgb,
    /// Display P3: P3 primaries, D65, sRGB curve.
    DisplayP3,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// Gamma 2.2 gray with D50 white, a stand-in for a monochrome printer.
    Gray,
}

impl StandardProfile {
    /// Builds the profile.
    pub fn to_profile(self) -> IccResult<Profile> {
        match self {
            Self::Srgb => Ok(Profile::srgb()),
            Self::DisplayP3 => {
                let curve = ToneCurve::new_parametric(4, &SRGB_CURVE)
                    .map_err(|e| IccError::CreateFailed(e.to_string()))?;
                rgb_profile(&DISPLAY_P3, &curve)
            }
            Self::AdobeRgb => rgb_profile(&ADOBE_RGB, &ToneCurve::new(ADOBE_GAMMA)),
            Self::Gray => Profile::gray(2.2),
        }
    }

    /// Builds the profile and serializes it, ready for
    /// [`IccDisplayFilter::initialize`](crate::IccDisplayFilter::initialize).
    pub fn to_icc_bytes(self) -> IccResult<Vec<u8>> {
        self.to_profile()?.to_icc()
    }
}

fn xy_y((x, y): (f64, f64)) -> CIExyY {
    CIExyY { x, y, Y: 1.0 }
}

fn rgb_profile(p: &Primaries, curve: &ToneCurve) -> IccResult<Profile> {
    let primaries = CIExyYTRIPLE {
        Red: xy_y(p.r),
        Green: xy_y(p.g),
        Blue: xy_y(p.b),
    };
    let inner = LcmsProfile::new_rgb(&xy_y(p.w), &primaries, &[curve, curve, curve])
        .map_err(|e| IccError::CreateFailed(format!("{}: {e}", p.name)))?;
    Ok(Profile { inner })
}
