//! Decoded texture description

use crate::dxt::DxtFormat;

/// Where a texture's pixels came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// DDS container with the declared FourCC
    Dds(DxtFormat),
    /// Uncompressed bitmap with the stored bit depth
    Bitmap {
        /// Bits per stored pixel (24 or 32)
        bits_per_pixel: u16,
    },
    /// JPEG stream passed through undecoded
    Jpeg,
}

/// Pixel data and metadata handed to the renderer
///
/// When `is_compressed` is false, `data` holds `width * height * components`
/// bytes in top-down row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bytes per pixel: 3 (RGB) or 4 (RGBA)
    pub components: u8,
    /// `data` still holds an encoded stream the caller must decode
    pub is_compressed: bool,
    /// Origin of the pixel data
    pub source: SourceFormat,
    /// Pixel bytes
    pub data: Vec<u8>,
}

impl TextureDescriptor {
    /// Expected byte length of uncompressed data
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.components as usize
    }

    /// RGBA value at `(x, y)`.
    ///
    /// Returns `None` out of bounds or for compressed data. Three-component
    /// pixels report an alpha of 255.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if self.is_compressed || x >= self.width || y >= self.height {
            return None;
        }

        let components = self.components as usize;
        let start = (y as usize * self.width as usize + x as usize) * components;
        let px = self.data.get(start..start + components)?;
        match *px {
            [r, g, b] => Some([r, g, b, 255]),
            [r, g, b, a] => Some([r, g, b, a]),
            _ => None,
        }
    }
}
