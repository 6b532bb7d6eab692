//! BMD error types

use std::path::PathBuf;
use thiserror::Error;

/// BMD table error type
#[derive(Debug, Error)]
pub enum BmdError {
    /// Table file does not exist
    #[error("BMD table not found: {}", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Not enough bytes for a fixed-size structure
    #[error("truncated {context}: need {expected} bytes, have {actual}")]
    Truncated {
        /// What was being read
        context: &'static str,
        /// Bytes required
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// Record size of zero cannot bound iteration
    #[error("invalid record size: {0}")]
    InvalidRecordSize(usize),

    /// A single record failed to decode
    #[error("malformed record {index}: {reason}")]
    MalformedEntry {
        /// Zero-based record index within the table
        index: usize,
        /// Decoder message
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary parsing error
    #[error("binary parsing error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Result type for BMD operations
pub type BmdResult<T> = Result<T, BmdError>;
