//! Raw bitmap branch
//!
//! Uncompressed 24- and 32-bit Windows bitmaps. Rows are converted from
//! bottom-up BGR(A) with 4-byte row padding into top-down RGB(A).

use binrw::io::Cursor;
use binrw::{BinRead, BinWrite};
use tracing::debug;

use super::descriptor::{SourceFormat, TextureDescriptor};
use super::detect::{BITMAP_MAGIC, leading_magic};
use super::error::{TextureError, TextureResult};

/// Uncompressed RGB bitmap compression id
const BI_RGB: u32 = 0;

/// `BITMAPFILEHEADER` (14 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct BitmapFileHeader {
    /// Magic bytes: `"BM"`
    pub magic: [u8; 2],
    /// Whole file size
    pub file_size: u32,
    /// Reserved
    pub reserved: u32,
    /// Offset of the pixel array
    pub data_offset: u32,
}

/// `BITMAPINFOHEADER` (40 bytes; later versions extend it)
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct BitmapInfoHeader {
    /// Size of this header
    pub header_size: u32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels; negative for top-down rows
    pub height: i32,
    /// Colour planes (1)
    pub planes: u16,
    /// Bits per pixel
    pub bits_per_pixel: u16,
    /// Compression id
    pub compression: u32,
    /// Pixel array size (may be 0 for `BI_RGB`)
    pub image_size: u32,
    /// Horizontal resolution
    pub x_pixels_per_meter: i32,
    /// Vertical resolution
    pub y_pixels_per_meter: i32,
    /// Palette entries used
    pub colors_used: u32,
    /// Important palette entries
    pub colors_important: u32,
}

/// Decode an uncompressed bitmap payload.
pub fn decode(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    if !payload.starts_with(&BITMAP_MAGIC) {
        return Err(TextureError::InvalidContainer(leading_magic(payload)));
    }

    let mut cursor = Cursor::new(payload);
    let file = BitmapFileHeader::read_le(&mut cursor)?;
    let info = BitmapInfoHeader::read_le(&mut cursor)?;

    if info.compression != BI_RGB {
        return Err(TextureError::UnsupportedFormat(format!(
            "bitmap compression {}",
            info.compression
        )));
    }
    let bytes_per_pixel = match info.bits_per_pixel {
        24 => 3,
        32 => 4,
        other => {
            return Err(TextureError::UnsupportedFormat(format!("{other}-bit bitmap")));
        }
    };

    let width = u32::try_from(info.width)
        .ok()
        .filter(|&w| w > 0)
        .ok_or_else(|| TextureError::InvalidHeader(format!("bitmap width {}", info.width)))?;
    let height = info.height.unsigned_abs();
    if height == 0 {
        return Err(TextureError::InvalidHeader("bitmap height 0".to_string()));
    }
    let bottom_up = info.height > 0;

    let row_len = width as usize * bytes_per_pixel;
    let stride = (width as usize * info.bits_per_pixel as usize).div_ceil(32) * 4;
    let start = file.data_offset as usize;
    let needed = start + stride * height as usize;
    let pixels = payload.get(start..needed).ok_or(TextureError::Truncated {
        context: "bitmap pixel array",
        expected: needed,
        actual: payload.len(),
    })?;

    let mut data = Vec::with_capacity(row_len * height as usize);
    for y in 0..height as usize {
        let src_row = if bottom_up { height as usize - 1 - y } else { y };
        let row = &pixels[src_row * stride..src_row * stride + row_len];
        for px in row.chunks_exact(bytes_per_pixel) {
            data.extend_from_slice(&[px[2], px[1], px[0]]);
            if bytes_per_pixel == 4 {
                data.push(px[3]);
            }
        }
    }

    debug!(
        "bitmap {}x{} {}-bit ({})",
        width,
        height,
        info.bits_per_pixel,
        if bottom_up { "bottom-up" } else { "top-down" }
    );

    Ok(TextureDescriptor {
        width,
        height,
        components: bytes_per_pixel as u8,
        is_compressed: false,
        source: SourceFormat::Bitmap {
            bits_per_pixel: info.bits_per_pixel,
        },
        data,
    })
}
