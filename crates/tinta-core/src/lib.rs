//! # tinta-core
//!
//! Value types shared by every tinta crate.
//!
//! - [`OklchColor`] - canonical editing representation (lightness, chroma, hue, alpha)
//! - [`OklabColor`] - Cartesian OKLab
//! - [`DisplayColor`] - 8-bit sRGB with alpha, the only type that reaches a screen
//! - [`LinearRgb`], [`Xyz`], [`CieLab`] - intermediate triplets
//! - [`GradientStop`] - one sample of a sampled OKLCH ramp
//!
//! ## Crate Structure
//!
//! ```text
//! tinta-core (this crate)
//!    ^
//!    |
//!    +-- tinta-color (conversion, gamut mapping, mixing)
//!    +-- tinta-icc (ICC display filter)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for all value types (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gradient;
pub mod pixel;
pub mod space;

pub use gradient::GradientStop;
pub use pixel::{DisplayColor, LinearRgb};
pub use space::{CieLab, OklabColor, OklchColor, Xyz};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::gradient::GradientStop;
    pub use crate::pixel::{DisplayColor, LinearRgb};
    pub use crate::space::{CieLab, OklabColor, OklchColor, Xyz};
}
