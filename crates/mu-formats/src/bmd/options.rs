//! Table layout options

use serde::{Deserialize, Serialize};

/// How a BMD table file is framed and keyed.
///
/// Defaults match the client's generic reader: a leading record count, a
/// trailing checksum, and no extra key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// File starts with an unencrypted little-endian `u32` record count
    pub has_leading_count: bool,

    /// File ends with a 4-byte checksum that is never part of a record
    pub has_trailing_checksum: bool,

    /// Extra key mixed into the XOR stream (only the low byte is used)
    pub key: u16,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            has_leading_count: true,
            has_trailing_checksum: true,
            key: 0,
        }
    }
}

impl TableOptions {
    /// Options for a headerless table: records followed by a checksum
    pub const fn headerless() -> Self {
        Self {
            has_leading_count: false,
            has_trailing_checksum: true,
            key: 0,
        }
    }

    /// Set whether a leading record count is present
    #[must_use]
    pub const fn with_leading_count(mut self, present: bool) -> Self {
        self.has_leading_count = present;
        self
    }

    /// Set whether a trailing checksum is present
    #[must_use]
    pub const fn with_trailing_checksum(mut self, present: bool) -> Self {
        self.has_trailing_checksum = present;
        self
    }

    /// Set the extra XOR key
    #[must_use]
    pub const fn with_key(mut self, key: u16) -> Self {
        self.key = key;
        self
    }

    /// Bytes reserved at the end of the file for the checksum
    pub const fn trailer_size(&self) -> usize {
        if self.has_trailing_checksum { 4 } else { 0 }
    }
}
