//! # tinta-icc
//!
//! ICC soft-proof display filter, built on Little CMS 2.
//!
//! Given an output profile (an RGB display, a CMYK press, a grayscale
//! printer) the filter sends CIE Lab (D50) through the profile and back:
//! Lab → device → Lab. Colors the device cannot reproduce come back clipped
//! the way the device would clip them, which is what an on-screen print
//! preview needs.
//!
//! # Usage
//!
//! ```rust
//! use tinta_icc::{IccDisplayFilter, StandardProfile};
//!
//! let bytes = StandardProfile::Gray.to_icc_bytes().unwrap();
//!
//! let mut filter = IccDisplayFilter::new();
//! assert!(filter.initialize(&bytes));
//!
//! // A grayscale device drops all chroma
//! let (_, a, b) = filter.transform_lab(60.0, 40.0, -20.0);
//! assert!(a.abs() < 0.5 && b.abs() < 0.5);
//! ```
//!
//! # Degradation
//!
//! An uninitialized filter, or one whose profile failed to load, is the
//! identity. [`IccDisplayFilter::initialize`] reports failure as `false` and
//! logs the cause; use [`IccDisplayFilter::from_profile_bytes`] to get the
//! [`IccError`] instead.
//!
//! # Thread Safety
//!
//! Transforms are created with the CMM cache disabled, so a ready filter is
//! `Send + Sync` and batch calls fan out over rayon.
//!
//! # Dependencies
//!
//! - `lcms2` - profile parsing and transforms
//! - `tinta-color` - OKLCH <-> Lab for the soft-proof helpers
//! - `tinta-primaries` - chromaticities of the built-in profiles

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
mod filter;
mod profile;
mod standard;
mod transform;

pub use config::FilterOptions;
pub use error::{IccError, IccResult};
pub use filter::IccDisplayFilter;
pub use profile::{Profile, ProfileInfo};
pub use standard::StandardProfile;
pub use transform::{DeviceSpace, LabRoundTrip};

/// Rendering intent for the Lab ↔ device transforms.
///
/// Both directions of the round trip use the same intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Intent {
    /// Compresses the source gamut into the device gamut.
    ///
    /// Only meaningful for LUT-based profiles; matrix-shaper profiles fall
    /// back to colorimetric.
    Perceptual,

    /// Clips out-of-gamut colors, maps media white to PCS white.
    ///
    /// The usual choice for soft proofing.
    #[default]
    RelativeColorimetric,

    /// Favors vividness over accuracy.
    Saturation,

    /// Clips out-of-gamut colors without white point adaptation, so paper
    /// tint shows up in the preview.
    AbsoluteColorimetric,
}

impl From<Intent> for lcms2::Intent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Perceptual => lcms2::Intent::Perceptual,
            Intent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            Intent::Saturation => lcms2::Intent::Saturation,
            Intent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FilterOptions, IccDisplayFilter, IccError, IccResult, Intent, StandardProfile};
}
