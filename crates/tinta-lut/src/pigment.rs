//! 64³ pigment concentration table.
//!
//! # Layout
//!
//! Three planes of `64 * 64 * 64` bytes, one per stored pigment
//! concentration. Within a plane the grid index is
//! `r + g * 64 + b * 64 * 64` (red varies fastest). A byte value `v` is the
//! concentration `v / 255`.
//!
//! Blobs extracted from the reference JavaScript distribution carry a short
//! header in front of the planes; any bytes beyond [`TABLE_BYTES`] are
//! treated as such a header and skipped.

use std::path::Path;

use tracing::debug;

use crate::{LutError, LutResult};

/// Grid points per axis.
pub const GRID_SIZE: usize = 64;

const PLANE: usize = GRID_SIZE * GRID_SIZE * GRID_SIZE;

/// Size of the table payload in bytes (three planes).
pub const TABLE_BYTES: usize = PLANE * 3;

/// Immutable pigment concentration table.
///
/// Loaded once, never mutated. Wrap it in an `Arc` to share one copy
/// between mixers and threads.
///
/// # Example
///
/// ```rust
/// use tinta_lut::PigmentLookupTable;
///
/// // Synthetic table: first pigment concentration follows red.
/// let table = PigmentLookupTable::from_fn(|r, _, _| [(r * 4) as u8, 0, 0]);
/// let c = table.concentrations([1.0, 0.0, 0.0]);
/// assert!((c[0] - 252.0 / 255.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct PigmentLookupTable {
    data: Box<[u8]>,
}

impl PigmentLookupTable {
    /// Parses a table blob.
    ///
    /// Accepts exactly [`TABLE_BYTES`] bytes, or a longer blob whose trailing
    /// [`TABLE_BYTES`] are the planes.
    ///
    /// # Errors
    ///
    /// [`LutError::InvalidSize`] if the blob is shorter than [`TABLE_BYTES`].
    pub fn from_bytes(bytes: &[u8]) -> LutResult<Self> {
        if bytes.len() < TABLE_BYTES {
            return Err(LutError::InvalidSize {
                expected: TABLE_BYTES,
                actual: bytes.len(),
            });
        }

        let header = bytes.len() - TABLE_BYTES;
        debug!(bytes = bytes.len(), header, "loaded pigment lookup table");

        Ok(Self {
            data: bytes[header..].into(),
        })
    }

    /// Reads and parses a table file.
    pub fn from_path(path: impl AsRef<Path>) -> LutResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading pigment lookup table");
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Builds a table by evaluating `f(r, g, b)` at every grid point.
    ///
    /// Grid coordinates run from 0 to 63.
    pub fn from_fn(mut f: impl FnMut(usize, usize, usize) -> [u8; 3]) -> Self {
        let mut data = vec![0u8; TABLE_BYTES].into_boxed_slice();
        for b in 0..GRID_SIZE {
            for g in 0..GRID_SIZE {
                for r in 0..GRID_SIZE {
                    let idx = index(r, g, b);
                    let v = f(r, g, b);
                    data[idx] = v[0];
                    data[PLANE + idx] = v[1];
                    data[2 * PLANE + idx] = v[2];
                }
            }
        }
        Self { data }
    }

    /// Raw plane bytes, without any header.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Stored bytes at a grid point.
    ///
    /// # Panics
    ///
    /// If any coordinate is 64 or more.
    #[inline]
    pub fn grid_value(&self, r: usize, g: usize, b: usize) -> [u8; 3] {
        assert!(r < GRID_SIZE && g < GRID_SIZE && b < GRID_SIZE, "grid point out of range");
        let idx = index(r, g, b);
        [self.data[idx], self.data[PLANE + idx], self.data[2 * PLANE + idx]]
    }

    /// Trilinearly interpolated concentrations of the three stored pigments.
    ///
    /// `rgb` is gamma-encoded sRGB in [0, 1]; values outside are clamped and
    /// NaN is read as 0. Results are in [0, 1].
    pub fn concentrations(&self, rgb: [f64; 3]) -> [f64; 3] {
        let n = (GRID_SIZE - 1) as f64;
        let [x, y, z] = rgb.map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) * n });

        // Keep the base cell inside the grid so the far face is reached with t = 1
        let ix = (x.floor() as usize).min(GRID_SIZE - 2);
        let iy = (y.floor() as usize).min(GRID_SIZE - 2);
        let iz = (z.floor() as usize).min(GRID_SIZE - 2);

        let tx = x - ix as f64;
        let ty = y - iy as f64;
        let tz = z - iz as f64;

        let base = index(ix, iy, iz);
        let corners = [
            (0, (1.0 - tx) * (1.0 - ty) * (1.0 - tz)),
            (1, tx * (1.0 - ty) * (1.0 - tz)),
            (GRID_SIZE, (1.0 - tx) * ty * (1.0 - tz)),
            (GRID_SIZE + 1, tx * ty * (1.0 - tz)),
            (GRID_SIZE * GRID_SIZE, (1.0 - tx) * (1.0 - ty) * tz),
            (GRID_SIZE * GRID_SIZE + 1, tx * (1.0 - ty) * tz),
            (GRID_SIZE * GRID_SIZE + GRID_SIZE, (1.0 - tx) * ty * tz),
            (GRID_SIZE * GRID_SIZE + GRID_SIZE + 1, tx * ty * tz),
        ];

        let mut c = [0.0; 3];
        for (offset, w) in corners {
            let idx = base + offset;
            c[0] += w * f64::from(self.data[idx]);
            c[1] += w * f64::from(self.data[PLANE + idx]);
            c[2] += w * f64::from(self.data[2 * PLANE + idx]);
        }
        c.map(|v| v / 255.0)
    }
}

impl std::fmt::Debug for PigmentLookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PigmentLookupTable")
            .field("grid", &GRID_SIZE)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[inline]
fn index(r: usize, g: usize, b: usize) -> usize {
    r + g * GRID_SIZE + b * GRID_SIZE * GRID_SIZE
}
