//! Lookup table error types.

use thiserror::Error;

/// Result type for lookup table operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while loading a lookup table.
#[derive(Debug, Error)]
pub enum LutError {
    /// Table blob has the wrong length.
    #[error("invalid LUT size: expected at least {expected} bytes, got {actual}")]
    InvalidSize {
        /// Minimum number of bytes
        expected: usize,
        /// Number of bytes supplied
        actual: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
