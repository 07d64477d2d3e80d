//! # tinta-lut
//!
//! Lookup table backing the pigment mixer.
//!
//! The Mixbox model encodes every sRGB color as a blend of four base
//! pigments. The concentrations of the first three are precomputed on a
//! 64x64x64 sRGB grid and shipped as a versioned binary asset; the fourth is
//! implied (they sum to one). This crate loads that asset and interpolates
//! it; the mixing math lives in `tinta-color`.
//!
//! - [`PigmentLookupTable`] - immutable, shareable 64³ concentration table
//! - [`LutError`] / [`LutResult`] - loading failures
//!
//! # Usage
//!
//! ```rust,no_run
//! use tinta_lut::PigmentLookupTable;
//!
//! let table = PigmentLookupTable::from_path("assets/mixbox_lut.bin")?;
//! let [c0, c1, c2] = table.concentrations([0.2, 0.4, 0.8]);
//! # Ok::<(), tinta_lut::LutError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Load diagnostics
//!
//! # Used By
//!
//! - `tinta-color` - `PigmentMixer`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod pigment;

pub use error::{LutError, LutResult};
pub use pigment::{PigmentLookupTable, GRID_SIZE, TABLE_BYTES};
