//! 4×4 block decoding and raster assembly

use tracing::debug;

use super::color::{build_palette, expand_alpha4};
use super::error::{DxtError, DxtResult};

/// Bytes per compressed block: 8 alpha + 8 colour
pub const BLOCK_SIZE: usize = 16;

/// Texels along one block edge
pub const BLOCK_DIM: usize = 4;

/// One compressed 4×4 tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dxt3Block {
    /// 4 bits of alpha per texel, texel `p` at bits `[4p, 4p + 4)`
    pub alpha: u64,
    /// First RGB565 reference colour
    pub color0: u16,
    /// Second RGB565 reference colour
    pub color1: u16,
    /// 2-bit palette index per texel, texel `p` at bits `[2p, 2p + 2)`
    pub indices: u32,
}

impl Dxt3Block {
    /// Parse a block from its little-endian encoding
    pub fn from_bytes(raw: &[u8; BLOCK_SIZE]) -> Self {
        let [a0, a1, a2, a3, a4, a5, a6, a7, c0, c1, c2, c3, i0, i1, i2, i3] = *raw;
        Self {
            alpha: u64::from_le_bytes([a0, a1, a2, a3, a4, a5, a6, a7]),
            color0: u16::from_le_bytes([c0, c1]),
            color1: u16::from_le_bytes([c2, c3]),
            indices: u32::from_le_bytes([i0, i1, i2, i3]),
        }
    }

    /// 4-bit alpha of texel `p` (row-major, 0..16)
    #[inline]
    pub const fn alpha_nibble(&self, p: usize) -> u8 {
        ((self.alpha >> (p * 4)) & 0xF) as u8
    }

    /// Palette index of texel `p` (row-major, 0..16)
    #[inline]
    pub const fn color_index(&self, p: usize) -> usize {
        ((self.indices >> (p * 2)) & 0x3) as usize
    }

    /// Decode to 16 RGBA texels in row-major order
    pub fn decode(&self) -> [[u8; 4]; 16] {
        let palette = build_palette(self.color0, self.color1);
        let mut texels = [[0u8; 4]; 16];
        for (p, texel) in texels.iter_mut().enumerate() {
            let [r, g, b] = palette[self.color_index(p)];
            *texel = [r, g, b, expand_alpha4(self.alpha_nibble(p))];
        }
        texels
    }
}

/// Validate dimensions and return the block grid size.
pub fn block_grid(width: u32, height: u32) -> DxtResult<(usize, usize)> {
    if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
        return Err(DxtError::InvalidDimensions { width, height });
    }
    Ok((width as usize / BLOCK_DIM, height as usize / BLOCK_DIM))
}

/// Compressed byte length of a `width`×`height` image
pub fn compressed_size(width: u32, height: u32) -> DxtResult<usize> {
    let (bw, bh) = block_grid(width, height)?;
    Ok(bw * bh * BLOCK_SIZE)
}

/// Decompress a block grid into an RGBA8 raster of `width * height * 4` bytes.
///
/// Blocks are read left to right, top to bottom. Every block is decoded with
/// an explicit 4-bit alpha table and a four-colour palette. Bytes past the
/// last block (mip levels) are ignored.
pub fn decompress(width: u32, height: u32, data: &[u8]) -> DxtResult<Vec<u8>> {
    let (blocks_x, blocks_y) = block_grid(width, height)?;
    let expected = blocks_x * blocks_y * BLOCK_SIZE;
    if data.len() < expected {
        return Err(DxtError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let width = width as usize;
    let row_stride = width * 4;
    let mut output = vec![0u8; row_stride * blocks_y * BLOCK_DIM];

    for (i, raw) in data[..expected].chunks_exact(BLOCK_SIZE).enumerate() {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes.copy_from_slice(raw);
        let texels = Dxt3Block::from_bytes(&bytes).decode();

        let bx = i % blocks_x;
        let by = i / blocks_x;
        for (py, row) in texels.chunks_exact(BLOCK_DIM).enumerate() {
            let dst = (by * BLOCK_DIM + py) * row_stride + bx * BLOCK_DIM * 4;
            for (px, texel) in row.iter().enumerate() {
                output[dst + px * 4..dst + px * 4 + 4].copy_from_slice(texel);
            }
        }
    }

    debug!(
        "decompressed {}x{} DXT image ({} blocks)",
        width,
        blocks_y * BLOCK_DIM,
        blocks_x * blocks_y
    );

    Ok(output)
}
