//! Texture error types

use thiserror::Error;

use crate::dxt::DxtError;

/// Texture container error type
#[derive(Debug, Error)]
pub enum TextureError {
    /// Leading bytes match no supported container
    #[error("invalid texture container: unrecognised magic {}", hex::encode(.0))]
    InvalidContainer(Vec<u8>),

    /// Container recognised but its pixel format is not
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// Header fields are inconsistent
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Payload shorter than a required structure
    #[error("truncated {context}: need {expected} bytes, have {actual}")]
    Truncated {
        /// What was being read
        context: &'static str,
        /// Bytes required
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Block decompression failed
    #[error(transparent)]
    Dxt(#[from] DxtError),

    /// Binary parsing error
    #[error("binary parsing error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Result type for texture operations
pub type TextureResult<T> = Result<T, TextureError>;
