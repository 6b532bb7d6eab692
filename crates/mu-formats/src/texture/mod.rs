//! Texture container decoding
//!
//! Texture files are a cipher wrapper around one of three unrelated image
//! containers. After decryption the payload's magic bytes select the branch:
//!
//! - **DDS** (`"DDS "`): 128-byte header, FourCC at offset 84, DXT blocks that
//!   are decompressed eagerly to RGBA8
//! - **Bitmap** (`"BM"`): uncompressed 24/32-bit rows converted to RGB(A)
//! - **JPEG** (`FF D8 FF`): passed through with dimensions from the frame header
//!
//! Every branch is a pure function producing the same [`TextureDescriptor`].
//!
//! # Example
//!
//! ```rust,no_run
//! use mu_formats::texture;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = std::fs::read("Data/Interface/GFx/MasterSkillTree_I1.ozd")?;
//! let tex = texture::decode_ozd(&raw, 0)?;
//! println!("{}x{} ({} bytes)", tex.width, tex.height, tex.data.len());
//! # Ok(())
//! # }
//! ```

mod bitmap;
mod dds;
mod descriptor;
mod detect;
mod error;
mod jpeg;

pub use bitmap::{BitmapFileHeader, BitmapInfoHeader};
pub use dds::{DDS_HEADER_SIZE, DdsHeader, DdsPixelFormat, FOURCC_OFFSET};
pub use descriptor::{SourceFormat, TextureDescriptor};
pub use detect::{BITMAP_MAGIC, ContainerKind, DDS_MAGIC, JPEG_MAGIC};
pub use error::{TextureError, TextureResult};
pub use jpeg::{FrameHeader, read_frame_header};

use tracing::debug;

use detect::leading_magic;

/// Decode a decrypted DDS payload.
///
/// Any magic other than `"DDS "` is [`TextureError::InvalidContainer`].
pub fn decode_dds(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    dds::decode(payload)
}

/// Decode an uncompressed bitmap payload.
pub fn decode_bitmap(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    bitmap::decode(payload)
}

/// Describe a JPEG payload, passing its bytes through.
pub fn decode_jpeg(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    jpeg::decode(payload)
}

/// Decode a decrypted payload, choosing the branch by magic bytes.
pub fn decode(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    let kind = ContainerKind::detect(payload)
        .ok_or_else(|| TextureError::InvalidContainer(leading_magic(payload)))?;
    debug!("texture container: {kind}, {} bytes", payload.len());

    match kind {
        ContainerKind::Dds => dds::decode(payload),
        ContainerKind::Bitmap => bitmap::decode(payload),
        ContainerKind::Jpeg => jpeg::decode(payload),
    }
}

/// Strip the stream cipher from an `.ozd` file and decode its DDS payload.
///
/// A wrong key shows up as [`TextureError::InvalidContainer`] because the
/// decrypted magic no longer reads `"DDS "`.
pub fn decode_ozd(raw: &[u8], key: u16) -> TextureResult<TextureDescriptor> {
    let payload = mu_crypto::decrypt(raw, key);
    dds::decode(&payload)
}
