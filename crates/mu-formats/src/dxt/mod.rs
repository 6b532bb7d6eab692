//! DXT block decompression
//!
//! Decodes 4×4 compressed texel blocks into RGBA8 rasters. Each 16-byte
//! block carries:
//!
//! ```text
//! [u64 alpha: 4 bits per texel][u16 color0][u16 color1][u32 indices: 2 bits per texel]
//! ```
//!
//! The client decodes every DDS texture through this one path, whatever its
//! declared FourCC: explicit 4-bit alpha plus a four-colour interpolated
//! palette. Assets are authored against that output, so [`decompress`]
//! reproduces it exactly instead of switching on [`DxtFormat`].
//!
//! Blocks are independent; callers that want parallelism can split the
//! compressed buffer on block rows themselves.

mod block;
mod color;
mod error;
mod format;

pub use block::{BLOCK_DIM, BLOCK_SIZE, Dxt3Block, block_grid, compressed_size, decompress};
pub use color::{build_palette, expand_alpha4, expand_rgb565, lerp_rgb};
pub use error::{DxtError, DxtResult};
pub use format::DxtFormat;
