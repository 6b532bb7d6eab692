//! DXT pixel format tags

use std::fmt;

/// Compressed pixel format declared by a DDS header's FourCC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DxtFormat {
    /// `DXT1` (BC1)
    Dxt1,
    /// `DXT3` (BC2)
    Dxt3,
    /// `DXT5` (BC3)
    Dxt5,
}

impl DxtFormat {
    /// Map a FourCC tag to a format
    pub fn from_fourcc(tag: [u8; 4]) -> Option<Self> {
        match &tag {
            b"DXT1" => Some(Self::Dxt1),
            b"DXT3" => Some(Self::Dxt3),
            b"DXT5" => Some(Self::Dxt5),
            _ => None,
        }
    }

    /// FourCC tag bytes
    pub const fn fourcc(self) -> [u8; 4] {
        match self {
            Self::Dxt1 => *b"DXT1",
            Self::Dxt3 => *b"DXT3",
            Self::Dxt5 => *b"DXT5",
        }
    }

    /// Channel count the format can carry natively
    pub const fn native_components(self) -> u8 {
        match self {
            Self::Dxt1 => 3,
            Self::Dxt3 | Self::Dxt5 => 4,
        }
    }
}

impl fmt::Display for DxtFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.fourcc();
        f.write_str(&String::from_utf8_lossy(&tag))
    }
}
