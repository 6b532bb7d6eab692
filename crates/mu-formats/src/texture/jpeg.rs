//! JPEG passthrough branch
//!
//! JPEG textures are handed to the caller undecoded. Only the first frame
//! header is read so the descriptor can report dimensions.

use tracing::debug;

use super::descriptor::{SourceFormat, TextureDescriptor};
use super::detect::{JPEG_MAGIC, leading_magic};
use super::error::{TextureError, TextureResult};

/// Fields of a JPEG start-of-frame segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// SOF marker byte (`0xC0` baseline, `0xC2` progressive, ...)
    pub marker: u8,
    /// Sample precision in bits
    pub precision: u8,
    /// Height in pixels
    pub height: u16,
    /// Width in pixels
    pub width: u16,
    /// Colour components in the frame
    pub components: u8,
}

/// Markers `0xC0..=0xCF` except DHT, JPG and DAC
const fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

/// Markers that carry no length field
const fn is_standalone(marker: u8) -> bool {
    matches!(marker, 0x01 | 0xD0..=0xD8)
}

fn be_u16(data: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_be_bytes([*data.get(at)?, *data.get(at + 1)?]))
}

/// Walk the marker segments up to the first frame header.
pub fn read_frame_header(data: &[u8]) -> TextureResult<FrameHeader> {
    if !data.starts_with(&JPEG_MAGIC) {
        return Err(TextureError::InvalidContainer(leading_magic(data)));
    }

    let truncated = |context| TextureError::Truncated {
        context,
        expected: data.len() + 1,
        actual: data.len(),
    };

    let mut pos = 2;
    loop {
        if data.get(pos) != Some(&0xFF) {
            return Err(TextureError::InvalidHeader(format!(
                "expected JPEG marker at offset {pos}"
            )));
        }
        // Fill bytes
        while data.get(pos) == Some(&0xFF) {
            pos += 1;
        }
        let marker = *data.get(pos).ok_or_else(|| truncated("JPEG marker"))?;
        pos += 1;

        if is_standalone(marker) {
            continue;
        }
        if matches!(marker, 0xD9 | 0xDA) {
            return Err(TextureError::InvalidHeader(
                "JPEG scan starts before any frame header".to_string(),
            ));
        }

        let len = be_u16(data, pos).ok_or_else(|| truncated("JPEG segment length"))? as usize;
        if len < 2 {
            return Err(TextureError::InvalidHeader(format!(
                "JPEG segment 0x{marker:02X} length {len}"
            )));
        }

        if is_start_of_frame(marker) {
            let segment = data.get(pos + 2..pos + len).ok_or_else(|| truncated("JPEG frame header"))?;
            let [precision, h0, h1, w0, w1, components, ..] = *segment else {
                return Err(TextureError::InvalidHeader(format!(
                    "JPEG frame header length {len}"
                )));
            };
            return Ok(FrameHeader {
                marker,
                precision,
                height: u16::from_be_bytes([h0, h1]),
                width: u16::from_be_bytes([w0, w1]),
                components,
            });
        }

        pos += len;
    }
}

/// Describe a JPEG payload without decoding it.
///
/// Grayscale and YCbCr frames are both reported as three-component since the
/// renderer's JPEG decoder always produces RGB.
pub fn decode(payload: &[u8]) -> TextureResult<TextureDescriptor> {
    let frame = read_frame_header(payload)?;

    if !matches!(frame.components, 1 | 3) {
        return Err(TextureError::UnsupportedFormat(format!(
            "{}-component JPEG",
            frame.components
        )));
    }
    if frame.width == 0 || frame.height == 0 {
        return Err(TextureError::InvalidHeader(format!(
            "JPEG dimensions {}x{}",
            frame.width, frame.height
        )));
    }

    debug!(
        "JPEG {}x{} SOF 0x{:02X}, {} components",
        frame.width, frame.height, frame.marker, frame.components
    );

    Ok(TextureDescriptor {
        width: u32::from(frame.width),
        height: u32::from(frame.height),
        components: 3,
        is_compressed: true,
        source: SourceFormat::Jpeg,
        data: payload.to_vec(),
    })
}
