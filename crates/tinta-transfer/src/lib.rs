//! # tinta-transfer
//!
//! Transfer functions and quantization for display encoding.
//!
//! Transfer functions convert between linear light values and the
//! gamma-encoded values a display expects.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Quantization**: Encoded `f64` -> 8-bit code value, done once at the end
//!   of a pipeline
//!
//! # Usage
//!
//! ```rust
//! use tinta_transfer::{quantize, srgb};
//!
//! // Decode an 8-bit sRGB channel to linear
//! let linear = srgb::eotf(quantize::decode_u8(128));
//!
//! // Encode back
//! let code = quantize::encode_u8(srgb::oetf(linear));
//! assert_eq!(code, 128);
//! ```
//!
//! # Used By
//!
//! - `tinta-color` - sRGB <-> linear conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod quantize;
pub mod srgb;
