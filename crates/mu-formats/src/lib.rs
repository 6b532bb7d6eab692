//! Decoders for MU client asset formats
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_possible_wrap)] // Intentional for binary operations
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
#![allow(clippy::doc_markdown)] // Many format-specific terms don't need backticks
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::similar_names)] // Domain-specific naming patterns
#![allow(clippy::derive_partial_eq_without_eq)] // Binary format structs
//! This crate turns the lightly encrypted, vendor-specific binary files the
//! client ships into typed records and pixel buffers.
//!
//! # Supported Formats
//!
//! - **BMD**: Fixed-size encrypted record tables (skills, master skill tree, ...)
//! - **OZD / DDS**: Cipher-wrapped DDS textures with DXT1/DXT3/DXT5 tags
//! - **Bitmap / JPEG**: Raw bitmap and JPEG passthrough texture branches
//! - **DXT**: 4×4 block decompression into RGBA8 rasters
//! - **Item bits**: Compact item attribute bytes from inventory and network structures
//!
//! # Design Principles
//!
//! - **Pure decoders**: Every entry point takes bytes and returns new owned values;
//!   nothing here holds shared mutable state, so all decoders may run concurrently.
//! - **Explicit layouts**: Records are decoded field by field at fixed little-endian
//!   offsets, never by reinterpreting host memory.
//! - **Byte-exact output**: Colour expansion and palette interpolation reproduce
//!   the client's reference decoder bit for bit.

#![warn(missing_docs)]

pub mod bmd;
pub mod dxt;
/// Bit-packed item attribute decoding
///
/// Item slots travel as short byte spans in inventory and network structures.
/// This module projects level, luck, skill, option level, excellent and ancient
/// flags out of those spans without copying or caching anything.
pub mod item;
pub mod texture;

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
pub(crate) mod test_utils;
