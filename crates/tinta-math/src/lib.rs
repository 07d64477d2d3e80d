//! # tinta-math
//!
//! Math utilities for perceptual color processing.
//!
//! - [`Mat3`] - 3x3 matrices for color space transformations
//! - [`Vec3`] - 3D vectors for RGB/XYZ/LMS triplets
//! - Chromatic adaptation (Bradford) between D65 and D50
//! - Interpolation utilities (lerp, saturate, hue wrapping)
//!
//! # Design
//!
//! All values are `f64`. Matrices are stored **row-major** and multiply
//! **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tinta_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4123908, 0.3575843, 0.1804808],
//!     [0.2126390, 0.7151687, 0.0721923],
//!     [0.0193308, 0.1191948, 0.9505322],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! ```
//!
//! # Used By
//!
//! - `tinta-primaries` - RGB/XYZ matrix generation
//! - `tinta-color` - OKLab and CIE Lab conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod interp;
mod adapt;

pub use mat3::*;
pub use vec3::*;
pub use interp::*;
pub use adapt::*;
