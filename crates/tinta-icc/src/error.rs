//! ICC error types.

use thiserror::Error;

/// Result type for ICC operations.
pub type IccResult<T> = Result<T, IccError>;

/// Errors that can occur while preparing an ICC display filter.
#[derive(Debug, Error)]
pub enum IccError {
    /// Profile bytes could not be parsed.
    #[error("invalid profile data: {0}")]
    InvalidProfile(String),

    /// Failed to create profile.
    #[error("failed to create profile: {0}")]
    CreateFailed(String),

    /// Failed to create transform.
    #[error("failed to create transform: {0}")]
    TransformFailed(String),

    /// Profile device color space is not RGB, CMYK or gray.
    #[error("unsupported device color space: {0}")]
    UnsupportedColorSpace(String),
}
