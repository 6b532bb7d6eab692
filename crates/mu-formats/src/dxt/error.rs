//! DXT error types

use thiserror::Error;

/// DXT decompression error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DxtError {
    /// Dimensions are zero or not a multiple of the 4×4 block size
    #[error("invalid texture dimensions {width}x{height}: must be positive multiples of 4")]
    InvalidDimensions {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },

    /// Fewer compressed bytes than the block grid needs
    #[error("truncated block data: need {expected} bytes, have {actual}")]
    Truncated {
        /// Bytes required for the full block grid
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },
}

/// Result type for DXT operations
pub type DxtResult<T> = Result<T, DxtError>;
