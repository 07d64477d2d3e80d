//! Lab ↔ device round trip.
//!
//! Two transforms per profile: Lab (D50, ICC v4) into the device encoding
//! and back. Between the two, device values are clamped to the encoding
//! range, so floating-point transforms through matrix-shaper profiles clip
//! like the physical device instead of passing out-of-gamut values through
//! unbounded.

use lcms2::{ColorSpaceSignature, DisallowCache, Flags, GlobalContext, PixelFormat};

use crate::{FilterOptions, IccError, IccResult, Profile};

type LcmsTransform<I, O> = lcms2::Transform<I, O, GlobalContext, DisallowCache>;

/// Device color space of an output profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceSpace {
    /// Three-channel RGB device.
    Rgb,
    /// Four-channel CMYK press or printer.
    Cmyk,
    /// Single-channel gray device.
    Gray,
}

impl DeviceSpace {
    /// Maps an lcms2 color space signature, if supported.
    pub fn from_signature(sig: ColorSpaceSignature) -> Option<Self> {
        match sig {
            ColorSpaceSignature::RgbData => Some(Self::Rgb),
            ColorSpaceSignature::CmykData => Some(Self::Cmyk),
            ColorSpaceSignature::GrayData => Some(Self::Gray),
            _ => None,
        }
    }

    /// Number of device channels.
    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Cmyk => 4,
            Self::Gray => 1,
        }
    }
}

impl std::fmt::Display for DeviceSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
            Self::Gray => "Gray",
        })
    }
}

/// Device-side pixel of a round trip.
trait DevicePixel: Copy + Default + lcms2::Pod {
    const FORMAT: PixelFormat;

    /// Clamps into the device encoding range. NaN stays NaN.
    fn clamp_encoding(self) -> Self;
}

impl DevicePixel for [f64; 3] {
    const FORMAT: PixelFormat = PixelFormat::RGB_DBL;

    fn clamp_encoding(self) -> Self {
        self.map(|v| v.clamp(0.0, 1.0))
    }
}

impl DevicePixel for [f64; 4] {
    const FORMAT: PixelFormat = PixelFormat::CMYK_DBL;

    // Floating-point CMYK is ink percentage
    fn clamp_encoding(self) -> Self {
        self.map(|v| v.clamp(0.0, 100.0))
    }
}

impl DevicePixel for f64 {
    const FORMAT: PixelFormat = PixelFormat::GRAY_DBL;

    fn clamp_encoding(self) -> Self {
        self.clamp(0.0, 1.0)
    }
}

struct Pair<D: DevicePixel> {
    forward: LcmsTransform<[f64; 3], D>,
    reverse: LcmsTransform<D, [f64; 3]>,
}

impl<D: DevicePixel> Pair<D> {
    fn new(lab: &Profile, device: &Profile, options: FilterOptions) -> IccResult<Self> {
        let flags = if options.black_point_compensation {
            Flags::NO_CACHE | Flags::BLACKPOINT_COMPENSATION
        } else {
            Flags::NO_CACHE
        };

        // Only the context constructor keeps the DisallowCache marker
        let forward = LcmsTransform::new_flags_context(
            GlobalContext::new(),
            &lab.inner,
            PixelFormat::Lab_DBL,
            &device.inner,
            D::FORMAT,
            options.intent.into(),
            flags,
        )
        .map_err(|e| IccError::TransformFailed(format!("Lab -> device: {e}")))?;

        let reverse = LcmsTransform::new_flags_context(
            GlobalContext::new(),
            &device.inner,
            D::FORMAT,
            &lab.inner,
            PixelFormat::Lab_DBL,
            options.intent.into(),
            flags,
        )
        .map_err(|e| IccError::TransformFailed(format!("device -> Lab: {e}")))?;

        Ok(Self { forward, reverse })
    }

    fn apply(&self, lab: [f64; 3]) -> [f64; 3] {
        let mut device = [D::default()];
        self.forward.transform_pixels(&[lab], &mut device);

        let mut out = [[0.0; 3]];
        self.reverse.transform_pixels(&[device[0].clamp_encoding()], &mut out);
        out[0]
    }
}

enum Device {
    Rgb(Pair<[f64; 3]>),
    Cmyk(Pair<[f64; 4]>),
    Gray(Pair<f64>),
}

/// Forward and reverse transforms for one output profile.
///
/// Immutable once built; `Send + Sync` because both transforms run without
/// the CMM cache.
pub struct LabRoundTrip {
    device: Device,
    space: DeviceSpace,
}

impl LabRoundTrip {
    /// Builds both transforms for `profile`.
    ///
    /// # Errors
    ///
    /// - [`IccError::UnsupportedColorSpace`] unless the profile is RGB,
    ///   CMYK or gray
    /// - [`IccError::TransformFailed`] if lcms2 rejects either direction
    pub fn new(profile: &Profile, options: FilterOptions) -> IccResult<Self> {
        let space = profile.device_space()?;
        let lab = Profile::lab()?;

        let device = match space {
            DeviceSpace::Rgb => Device::Rgb(Pair::new(&lab, profile, options)?),
            DeviceSpace::Cmyk => Device::Cmyk(Pair::new(&lab, profile, options)?),
            DeviceSpace::Gray => Device::Gray(Pair::new(&lab, profile, options)?),
        };

        Ok(Self { device, space })
    }

    /// Device color space the round trip passes through.
    pub fn device_space(&self) -> DeviceSpace {
        self.space
    }

    /// Lab → device → Lab. Input is passed to the CMM as is.
    pub fn apply(&self, lab: [f64; 3]) -> [f64; 3] {
        match &self.device {
            Device::Rgb(p) => p.apply(lab),
            Device::Cmyk(p) => p.apply(lab),
            Device::Gray(p) => p.apply(lab),
        }
    }
}

impl std::fmt::Debug for LabRoundTrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabRoundTrip")
            .field("device", &self.space)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_device_space_channels() {
        assert_eq!(DeviceSpace::Rgb.channels(), 3);
        assert_eq!(DeviceSpace::Cmyk.channels(), 4);
        assert_eq!(DeviceSpace::Gray.channels(), 1);
        assert_eq!(DeviceSpace::from_signature(ColorSpaceSignature::LabData), None);
    }

    #[test]
    fn test_srgb_in_gamut_survives() {
        let rt = LabRoundTrip::new(&Profile::srgb(), FilterOptions::default()).unwrap();
        assert_eq!(rt.device_space(), DeviceSpace::Rgb);

        let out = rt.apply([50.0, 10.0, 10.0]);
        assert_abs_diff_eq!(out[0], 50.0, epsilon = 0.1);
        assert_abs_diff_eq!(out[1], 10.0, epsilon = 0.1);
        assert_abs_diff_eq!(out[2], 10.0, epsilon = 0.1);
    }

    #[test]
    fn test_srgb_clips_out_of_gamut() {
        let rt = LabRoundTrip::new(&Profile::srgb(), FilterOptions::default()).unwrap();
        let out = rt.apply([50.0, 100.0, -100.0]);

        let chroma_in = 100.0f64.hypot(-100.0);
        let chroma_out = out[1].hypot(out[2]);
        assert!(chroma_out < chroma_in - 10.0, "chroma {chroma_out}");
    }

    #[test]
    fn test_lab_profile_rejected() {
        let lab = Profile::lab().unwrap();
        let err = LabRoundTrip::new(&lab, FilterOptions::default()).unwrap_err();
        assert!(matches!(err, IccError::UnsupportedColorSpace(_)));
    }
}
