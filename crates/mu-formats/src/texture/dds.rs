//! DDS container branch
//!
//! Only the fields the client looks at are interpreted: width, height and the
//! pixel format FourCC at offset 84. The rest of the 128-byte header is kept
//! for inspection.

use binrw::io::Cursor;
use binrw::{BinRead, BinWrite};
use tracing::debug;

use super::descriptor::{SourceFormat, TextureDescriptor};
use super::detect::{DDS_MAGIC, leading_magic};
use super::error::{TextureError, TextureResult};
use crate::dxt::{self, DxtFormat};

/// Size of the DDS header including the magic
pub const DDS_HEADER_SIZE: usize = 128;

/// Offset of the pixel format FourCC within the header
pub const FOURCC_OFFSET: usize = 84;

/// DDS pixel format block (32 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct DdsPixelFormat {
    /// Structure size (32)
    pub size: u32,
    /// Pixel format flags
    pub flags: u32,
    /// Compression tag such as `DXT3`
    pub four_cc: [u8; 4],
    /// Bits per pixel for uncompressed formats
    pub rgb_bit_count: u32,
    /// Red channel mask
    pub r_mask: u32,
    /// Green channel mask
    pub g_mask: u32,
    /// Blue channel mask
    pub b_mask: u32,
    /// Alpha channel mask
    pub a_mask: u32,
}

/// DDS file header (128 bytes)
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[brw(little)]
pub struct DdsHeader {
    /// Magic bytes: `"DDS "`
    #[br(assert(magic == DDS_MAGIC, "invalid DDS magic: {:02X?}", magic))]
    pub magic: [u8; 4],
    /// Header size excluding the magic (124)
    pub size: u32,
    /// Header flags
    pub flags: u32,
    /// Height in pixels
    pub height: u32,
    /// Width in pixels
    pub width: u32,
    /// Pitch or linear size of the top level
    pub pitch_or_linear_size: u32,
    /// Volume depth
    pub depth: u32,
    /// Mip level count
    pub mip_map_count: u32,
    /// Reserved words
    pub reserved1: [u32; 11],
    /// Pixel format block
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities
    pub caps: [u32; 4],
    /// Reserved word
    pub reserved2: u32,
}

impl DdsHeader {
    /// Parse the header from the start of a payload
    pub fn parse(payload: &[u8]) -> TextureResult<Self> {
        if !payload.starts_with(&DDS_MAGIC) {
            return Err(TextureError::InvalidContainer(leading_magic(payload)));
        }
        let header = payload
            .get(..DDS_HEADER_SIZE)
            .ok_or(TextureError::Truncated {
                context: "DDS header",
                expected: DDS_HEADER_SIZE,
                actual: payload.len(),
            })?;
        Ok(Self::read_le(&mut Cursor::new(header))?)
    }

    /// FourCC as text, for diagnostics
    pub fn four_cc_str(&self) -> String {
        String::from_utf8_lossy(&self.pixel_format.four_cc).into_owned()
    }

    /// Map the FourCC to a supported format
    pub fn dxt_format(&self) -> TextureResult<DxtFormat> {
        DxtFormat::from_fourcc(self.pixel_format.four_cc)
            .ok_or_else(|| TextureError::UnsupportedFormat(self.four_cc_str()))
    }
}

/// Decode a DDS payload into an RGBA8 descriptor.
///
/// Decompression is eager: the returned data is always uncompressed with four
/// components, whichever of `DXT1`/`DXT3`/`DXT5` the header declares.
pub fn decode(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    let header = DdsHeader::parse(payload)?;
    let format = header.dxt_format()?;

    debug!(
        "DDS {}x{} {} ({} bytes of block data)",
        header.width,
        header.height,
        format,
        payload.len() - DDS_HEADER_SIZE
    );

    let data = dxt::decompress(header.width, header.height, &payload[DDS_HEADER_SIZE..])?;

    Ok(TextureDescriptor {
        width: header.width,
        height: header.height,
        components: 4,
        is_compressed: false,
        source: SourceFormat::Dds(format),
        data,
    })
}
