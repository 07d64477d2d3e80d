//! The soft-proof display filter.

use rayon::prelude::*;
use tinta_color::{color_from_oklch, lab_to_oklch, oklch_to_lab, srgb_to_oklch};
use tinta_core::{CieLab, DisplayColor, OklchColor};
use tracing::{debug, trace, warn};

use crate::{FilterOptions, IccResult, LabRoundTrip, Profile, ProfileInfo};

/// Lightness range of the CMM's Lab encoding.
const L_RANGE: (f64, f64) = (0.0, 100.0);

/// a*/b* range of the CMM's Lab encoding.
const AB_RANGE: (f64, f64) = (-128.0, 127.0);

struct Loaded {
    info: ProfileInfo,
    round_trip: LabRoundTrip,
}

/// Simulates an output device by sending Lab through its ICC profile and
/// back.
///
/// Not ready until a profile has been loaded; while not ready every
/// operation returns its input unchanged.
///
/// # Example
///
/// ```rust
/// use tinta_icc::{IccDisplayFilter, StandardProfile};
///
/// let mut filter = IccDisplayFilter::new();
/// assert!(!filter.is_ready());
/// assert_eq!(filter.transform_lab(50.0, 80.0, -90.0), (50.0, 80.0, -90.0));
///
/// filter.initialize(&StandardProfile::Srgb.to_icc_bytes().unwrap());
/// assert!(filter.is_ready());
/// ```
#[derive(Default)]
pub struct IccDisplayFilter {
    options: FilterOptions,
    loaded: Option<Loaded>,
}

impl IccDisplayFilter {
    /// An empty filter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty filter that will build its transforms with `options`.
    pub fn with_options(options: FilterOptions) -> Self {
        Self { options, loaded: None }
    }

    /// Builds a ready filter directly.
    ///
    /// # Errors
    ///
    /// Any [`IccError`](crate::IccError) from parsing the profile or building the
    /// transforms.
    pub fn from_profile_bytes(bytes: &[u8], options: FilterOptions) -> IccResult<Self> {
        let mut filter = Self::with_options(options);
        filter.try_initialize(bytes)?;
        Ok(filter)
    }

    /// Loads an output profile, replacing any previous one.
    ///
    /// Returns `false` and logs the cause if the profile cannot be used; the
    /// filter is then not ready.
    pub fn initialize(&mut self, profile_bytes: &[u8]) -> bool {
        match self.try_initialize(profile_bytes) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, bytes = profile_bytes.len(), "ICC display filter not initialized");
                false
            }
        }
    }

    /// Like [`initialize`](Self::initialize) but returns the error.
    pub fn try_initialize(&mut self, profile_bytes: &[u8]) -> IccResult<()> {
        self.loaded = None;

        let profile = Profile::from_icc(profile_bytes)?;
        let info = profile.info()?;
        let round_trip = LabRoundTrip::new(&profile, self.options)?;

        debug!(
            description = %info.description,
            device = %info.device,
            intent = ?self.options.intent,
            bpc = self.options.black_point_compensation,
            "ICC display filter ready"
        );

        self.loaded = Some(Loaded { info, round_trip });
        Ok(())
    }

    /// Drops the loaded profile; the filter becomes the identity.
    pub fn reset(&mut self) {
        self.loaded = None;
    }

    /// True once a profile is loaded.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.loaded.is_some()
    }

    /// Options the transforms are built with.
    pub fn options(&self) -> FilterOptions {
        self.options
    }

    /// Description and device space of the loaded profile.
    pub fn profile_info(&self) -> Option<&ProfileInfo> {
        self.loaded.as_ref().map(|l| &l.info)
    }

    /// Sends one Lab (D50) color through the device and back.
    ///
    /// Input is clamped to L in [0, 100] and a, b in [-128, 127] first. If
    /// the filter is not ready, the input has a non-finite component, or the
    /// CMM produces a non-finite value, the input is returned unchanged.
    pub fn transform_lab(&self, l: f64, a: f64, b: f64) -> (f64, f64, f64) {
        let Some(loaded) = &self.loaded else {
            return (l, a, b);
        };

        // lcms2 reads NaN as 0, which would turn a bad sample into black
        if !(l.is_finite() && a.is_finite() && b.is_finite()) {
            trace!(l, a, b, "non-finite Lab input, passing color through");
            return (l, a, b);
        }

        let clamped = [
            l.clamp(L_RANGE.0, L_RANGE.1),
            a.clamp(AB_RANGE.0, AB_RANGE.1),
            b.clamp(AB_RANGE.0, AB_RANGE.1),
        ];
        let out = loaded.round_trip.apply(clamped);

        if out.iter().all(|v| v.is_finite()) {
            (out[0], out[1], out[2])
        } else {
            trace!(l, a, b, ?out, "non-finite CMM output, passing color through");
            (l, a, b)
        }
    }

    /// [`transform_lab`](Self::transform_lab) over a slice, in parallel.
    ///
    /// Output order matches input order.
    pub fn transform_lab_batch(&self, colors: &[(f64, f64, f64)]) -> Vec<(f64, f64, f64)> {
        if !self.is_ready() {
            return colors.to_vec();
        }
        colors
            .par_iter()
            .map(|&(l, a, b)| self.transform_lab(l, a, b))
            .collect()
    }

    /// [`transform_lab`](Self::transform_lab) on a [`CieLab`] value.
    pub fn filter_lab(&self, lab: CieLab) -> CieLab {
        let (l, a, b) = self.transform_lab(lab.l, lab.a, lab.b);
        CieLab::new(l, a, b)
    }

    /// Soft-proofs an OKLCH color: OKLCH → Lab → device → Lab → OKLCH.
    ///
    /// Alpha is carried through. Not ready means identity.
    pub fn filter_oklch(&self, color: OklchColor) -> OklchColor {
        if !self.is_ready() {
            return color;
        }
        let proofed = self.filter_lab(oklch_to_lab(color));
        lab_to_oklch(proofed).with_alpha(color.alpha)
    }

    /// Soft-proofs a display color and maps the result back into sRGB.
    ///
    /// Alpha is carried through. Not ready means identity.
    pub fn filter_display_color(&self, color: DisplayColor) -> DisplayColor {
        if !self.is_ready() {
            return color;
        }
        let c = self.filter_oklch(srgb_to_oklch(color));
        color_from_oklch(c.lightness, c.chroma, c.hue, 1.0).with_alpha(color.a)
    }
}

impl std::fmt::Debug for IccDisplayFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IccDisplayFilter")
            .field("options", &self.options)
            .field("profile", &self.profile_info())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IccError, StandardProfile};
    use approx::assert_abs_diff_eq;

    fn srgb_filter() -> IccDisplayFilter {
        let bytes = StandardProfile::Srgb.to_icc_bytes().unwrap();
        IccDisplayFilter::from_profile_bytes(&bytes, FilterOptions::default()).unwrap()
    }

    #[test]
    fn test_not_ready_is_identity() {
        let filter = IccDisplayFilter::new();
        assert!(!filter.is_ready());
        assert_eq!(filter.transform_lab(150.0, 300.0, -300.0), (150.0, 300.0, -300.0));

        let c = OklchColor::new(0.7, 0.3, 150.0).with_alpha(0.5);
        assert_eq!(filter.filter_oklch(c), c);

        let d = DisplayColor::new(1, 2, 3, 4);
        assert_eq!(filter.filter_display_color(d), d);
    }

    #[test]
    fn test_failed_initialize_unreadies() {
        let mut filter = srgb_filter();
        assert!(filter.is_ready());
        assert!(!filter.initialize(&[0u8; 64]));
        assert!(!filter.is_ready());
        assert!(filter.profile_info().is_none());
    }

    #[test]
    fn test_lab_profile_error() {
        let bytes = Profile::lab().unwrap().to_icc().unwrap();
        let err = IccDisplayFilter::from_profile_bytes(&bytes, FilterOptions::default()).unwrap_err();
        assert!(matches!(err, IccError::UnsupportedColorSpace(_)));
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        let filter = srgb_filter();
        let (l, a, b) = filter.transform_lab(150.0, 500.0, -500.0);
        assert!(l.is_finite() && a.is_finite() && b.is_finite());
        assert!(l <= 100.0 + 1e-6);
    }

    #[test]
    fn test_non_finite_sample_passes_through_in_batch() {
        let filter = srgb_filter();
        let input = [
            (50.0, 10.0, 10.0),
            (f64::NAN, 0.0, 0.0),
            (60.0, f64::INFINITY, -5.0),
            (70.0, -10.0, 20.0),
        ];
        let out = filter.transform_lab_batch(&input);

        assert_eq!(out.len(), input.len());
        assert!(out[1].0.is_nan());
        assert_eq!((out[1].1, out[1].2), (0.0, 0.0));
        assert_eq!(out[2].0, 60.0);
        assert_eq!(out[2].1, f64::INFINITY);
        assert_eq!(out[2].2, -5.0);

        for i in [0, 3] {
            let (l, a, b) = input[i];
            assert_eq!(out[i], filter.transform_lab(l, a, b));
            assert_abs_diff_eq!(out[i].0, l, epsilon = 0.1);
            assert_abs_diff_eq!(out[i].1, a, epsilon = 0.1);
            assert_abs_diff_eq!(out[i].2, b, epsilon = 0.1);
        }
    }

    #[test]
    fn test_display_color_near_identity_on_srgb() {
        let filter = srgb_filter();
        let c = DisplayColor::new(38, 169, 241, 200);
        let out = filter.filter_display_color(c);
        assert_eq!(out.a, 200);
        for (x, y) in out.rgb_array().into_iter().zip(c.rgb_array()) {
            assert!(x.abs_diff(y) <= 1, "{out} vs {c}");
        }
    }

    #[test]
    fn test_filter_oklch_keeps_alpha() {
        let filter = srgb_filter();
        let c = OklchColor::new(0.6, 0.05, 30.0).with_alpha(0.25);
        let out = filter.filter_oklch(c);
        assert_eq!(out.alpha, 0.25);
        assert_abs_diff_eq!(out.lightness, 0.6, epsilon = 1e-3);
    }
}
