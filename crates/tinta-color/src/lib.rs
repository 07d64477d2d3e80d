//! # tinta-color
//!
//! Perceptual color engine: conversion, gamut mapping and pigment mixing.
//!
//! - **Conversion** - sRGB, linear RGB, CIE XYZ, CIE Lab and OKLab/OKLCH
//! - **Gamut mapping** - chroma reduction into the sRGB cube at fixed
//!   lightness and hue
//! - **Gradients** - sampled OKLCH ramps for slider previews
//! - **Pigment mixing** - Mixbox latent-space blending
//!
//! # Architecture
//!
//! ```text
//!                          tinta-color
//!                               |
//!     +-------------+-----------+-----+---------------+
//!     |             |                 |               |
//! tinta-core  tinta-transfer  tinta-primaries     tinta-lut
//!                                     |
//!                                 tinta-math
//! ```
//!
//! `tinta-color` also uses `tinta-math` directly. `tinta-core`,
//! `tinta-transfer` and `tinta-lut` have no tinta dependencies.
//!
//! # Quick Start
//!
//! ```rust
//! use tinta_color::{color_from_oklch, srgb_to_oklch, get_max_chroma};
//! use tinta_core::DisplayColor;
//!
//! let sky = color_from_oklch(0.7, 0.15, 240.0, 1.0);
//! assert_eq!(sky, DisplayColor::rgb(38, 169, 241));
//!
//! // Out of gamut: chroma is reduced, lightness and hue kept
//! let teal = color_from_oklch(0.7, 0.4, 180.0, 1.0);
//! let back = srgb_to_oklch(teal);
//! assert!(back.chroma <= get_max_chroma(0.7, 180.0) + 0.01);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! OKLCH -> OKLab -> LMS' -> LMS -> XYZ (D65) -> linear sRGB -> sRGB -> u8
//!                                     |
//!                                     +-> Bradford -> XYZ (D50) -> CIE Lab
//! ```
//!
//! Everything stays in `f64` until the final 8-bit quantization.
//!
//! # Dependencies
//!
//! - [`tinta-core`] - Value types
//! - [`tinta-math`] - Matrices, interpolation, chromatic adaptation
//! - [`tinta-transfer`] - sRGB transfer function
//! - [`tinta-primaries`] - sRGB <-> XYZ matrices
//! - [`tinta-lut`] - Pigment lookup table
//! - [`rayon`] - Parallel gradient sampling
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `tinta-icc` - Lab conversions around the CMM round trip

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod gamut;
pub mod gradient;
pub mod lab;
pub mod mix;
pub mod oklab;

pub use convert::{
    ColorConvert, color_from_oklch, color_from_oklch_unmapped, linear_to_srgb, linear_to_xyz,
    oklch_to_linear, srgb_to_linear, srgb_to_oklch, xyz_to_linear,
};
pub use gamut::{
    CHROMA_EPSILON, GAMUT_TOLERANCE, MAX_ITERATIONS, MAX_SEARCH_CHROMA, get_max_chroma,
    is_oklch_displayable, map_to_gamut,
};
pub use gradient::{GradientAxis, GradientRange, generate_gradient_stops};
pub use lab::{lab_to_oklch, lab_to_xyz, oklch_to_lab, xyz_to_lab};
pub use mix::{Latent, PigmentMixer};
pub use oklab::{delta_e_ok, oklab_to_oklch, oklab_to_xyz, oklch_to_oklab, xyz_to_oklab};

// Re-export sub-crates for convenience
pub use tinta_lut as lut;
pub use tinta_math as math;
pub use tinta_primaries as primaries;
pub use tinta_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ColorConvert, GradientAxis, GradientRange, PigmentMixer, color_from_oklch,
        generate_gradient_stops, get_max_chroma, is_oklch_displayable, srgb_to_oklch,
    };
    pub use tinta_core::prelude::*;
}
