//! ICC profile wrapper.

use lcms2::Profile as LcmsProfile;

use crate::{DeviceSpace, IccError, IccResult, StandardProfile};

/// An ICC color profile.
///
/// # Example
///
/// ```rust
/// use tinta_icc::{DeviceSpace, Profile};
///
/// let srgb = Profile::srgb();
/// assert_eq!(srgb.device_space().unwrap(), DeviceSpace::Rgb);
/// ```
pub struct Profile {
    pub(crate) inner: LcmsProfile,
}

impl Profile {
    /// Parses raw ICC profile bytes.
    ///
    /// # Errors
    ///
    /// [`IccError::InvalidProfile`] if lcms2 cannot parse the data.
    pub fn from_icc(data: &[u8]) -> IccResult<Self> {
        let inner = LcmsProfile::new_icc(data).map_err(|e| IccError::InvalidProfile(e.to_string()))?;
        Ok(Self { inner })
    }

    /// IEC 61966-2-1 sRGB, as built into lcms2.
    pub fn srgb() -> Self {
        Self {
            inner: LcmsProfile::new_srgb(),
        }
    }

    /// Creates a profile from a built-in definition.
    pub fn from_standard(standard: StandardProfile) -> IccResult<Self> {
        standard.to_profile()
    }

    /// Grayscale device with a pure power-law response and D50 white.
    pub fn gray(gamma: f64) -> IccResult<Self> {
        let curve = lcms2::ToneCurve::new(gamma);
        let inner = LcmsProfile::new_gray(&lcms2::CIExyY::d50(), &curve)
            .map_err(|e| IccError::CreateFailed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// CIE L*a*b* v4 (D50), the connection space the filter works in.
    pub fn lab() -> IccResult<Self> {
        let inner = LcmsProfile::new_lab4_context(lcms2::GlobalContext::new(), &lcms2::CIExyY::d50())
            .map_err(|e| IccError::CreateFailed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Profile description tag, empty if missing.
    pub fn description(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Description, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Device color space.
    ///
    /// # Errors
    ///
    /// [`IccError::UnsupportedColorSpace`] for anything but RGB, CMYK and gray.
    pub fn device_space(&self) -> IccResult<DeviceSpace> {
        let sig = self.inner.color_space();
        DeviceSpace::from_signature(sig).ok_or_else(|| IccError::UnsupportedColorSpace(format!("{sig:?}")))
    }

    /// Description and device space in one value.
    pub fn info(&self) -> IccResult<ProfileInfo> {
        Ok(ProfileInfo {
            description: self.description(),
            device: self.device_space()?,
        })
    }

    /// Serializes the profile as ICC bytes.
    pub fn to_icc(&self) -> IccResult<Vec<u8>> {
        self.inner.icc().map_err(|e| IccError::CreateFailed(e.to_string()))
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("description", &self.description())
            .field("color_space", &self.inner.color_space())
            .finish()
    }
}

/// What the filter knows about its loaded profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    /// Description tag.
    pub description: String,
    /// Device color space.
    pub device: DeviceSpace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_info() {
        let info = Profile::srgb().info().unwrap();
        assert_eq!(info.device, DeviceSpace::Rgb);
        assert!(!info.description.is_empty());
    }

    #[test]
    fn test_gray() {
        let gray = Profile::gray(2.2).unwrap();
        assert_eq!(gray.device_space().unwrap(), DeviceSpace::Gray);
    }

    #[test]
    fn test_lab_is_not_a_device() {
        let lab = Profile::lab().unwrap();
        assert!(matches!(lab.device_space(), Err(IccError::UnsupportedColorSpace(_))));
    }

    #[test]
    fn test_icc_roundtrip() {
        let data = Profile::srgb().to_icc().unwrap();
        let back = Profile::from_icc(&data).unwrap();
        assert_eq!(back.device_space().unwrap(), DeviceSpace::Rgb);
    }

    #[test]
    fn test_garbage_rejected() {
        let err = Profile::from_icc(b"definitely not an icc profile").unwrap_err();
        assert!(matches!(err, IccError::InvalidProfile(_)));
    }
}
