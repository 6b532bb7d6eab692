//! Container detection by magic bytes

use std::fmt;

/// DDS magic `"DDS "`
pub const DDS_MAGIC: [u8; 4] = *b"DDS ";

/// Bitmap magic `"BM"`
pub const BITMAP_MAGIC: [u8; 2] = *b"BM";

/// JPEG start-of-image followed by a marker prefix
pub const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Image container embedded in a decrypted texture payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// DirectDraw Surface with DXT blocks
    Dds,
    /// Uncompressed Windows bitmap
    Bitmap,
    /// JPEG stream
    Jpeg,
}

impl ContainerKind {
    /// Classify a payload from its leading bytes
    pub fn detect(payload: &[u8]) -> Option<Self> {
        if payload.starts_with(&DDS_MAGIC) {
            Some(Self::Dds)
        } else if payload.starts_with(&JPEG_MAGIC) {
            Some(Self::Jpeg)
        } else if payload.starts_with(&BITMAP_MAGIC) {
            Some(Self::Bitmap)
        } else {
            None
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dds => f.write_str("DDS"),
            Self::Bitmap => f.write_str("BMP"),
            Self::Jpeg => f.write_str("JPEG"),
        }
    }
}

/// First (up to) four bytes of a payload, for error reports
pub(crate) fn leading_magic(payload: &[u8]) -> Vec<u8> {
    payload.iter().take(4).copied().collect()
}
