//! Filter configuration.

use crate::Intent;

/// Options applied when the filter builds its transforms.
///
/// Defaults to relative colorimetric with black point compensation, the
/// common soft-proofing setup.
///
/// # Example
///
/// ```rust
/// use tinta_icc::{FilterOptions, Intent};
///
/// let opts = FilterOptions::default()
///     .with_intent(Intent::Perceptual)
///     .with_black_point_compensation(false);
/// assert_eq!(opts.intent, Intent::Perceptual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterOptions {
    /// Rendering intent for both directions.
    pub intent: Intent,
    /// Scale the black point of the PCS onto the device black.
    pub black_point_compensation: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            intent: Intent::RelativeColorimetric,
            black_point_compensation: true,
        }
    }
}

impl FilterOptions {
    /// Sets the rendering intent.
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Enables or disables black point compensation.
    pub fn with_black_point_compensation(mut self, enabled: bool) -> Self {
        self.black_point_compensation = enabled;
        self
    }
}
