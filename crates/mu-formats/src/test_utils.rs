//! Test utilities for building encrypted fixtures
//!
//! Shared helpers so each format's tests can build BMD tables, DXT blocks
//! and DDS payloads from plain values instead of hand-written byte arrays.

use crate::bmd::{BmdError, BmdRecord, BmdResult, TableOptions};
use mu_crypto::Xor3Cipher;

/// Record types that tests can serialize back into their on-disk layout
pub trait EncodeRecord {
    /// Plaintext bytes of the record
    fn encode(&self) -> Vec<u8>;
}

/// Minimal 4-byte record: two little-endian `u16` fields
///
/// A first field of `0xFFFF` is rejected so tests can exercise the
/// malformed-entry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair(pub u16, pub u16);

impl BmdRecord for Pair {
    const RECORD_SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> BmdResult<Self> {
        let a = u16::from_le_bytes([bytes[0], bytes[1]]);
        if a == 0xFFFF {
            return Err(BmdError::MalformedEntry {
                index: 0,
                reason: "sentinel value".to_string(),
            });
        }
        Ok(Self(a, u16::from_le_bytes([bytes[2], bytes[3]])))
    }
}

impl EncodeRecord for Pair {
    fn encode(&self) -> Vec<u8> {
        let mut out = self.0.to_le_bytes().to_vec();
        out.extend_from_slice(&self.1.to_le_bytes());
        out
    }
}

/// Build a complete table file for `records` framed per `options`
///
/// The leading count (when enabled) is the number of records; the checksum
/// (when enabled) defaults to zero.
pub fn encode_table<T: EncodeRecord>(
    records: &[T],
    options: &TableOptions,
    checksum: Option<u32>,
) -> Vec<u8> {
    let cipher = Xor3Cipher::new(options.key);
    let mut out = Vec::new();

    if options.has_leading_count {
        out.extend_from_slice(&(records.len() as u32).to_le_bytes());
    }

    for record in records {
        out.extend(cipher.decrypt(&record.encode()));
    }

    if options.has_trailing_checksum {
        out.extend_from_slice(&checksum.unwrap_or(0).to_le_bytes());
    }

    out
}

/// Pack one DXT3-style block from its parts
pub fn dxt_block(alpha: u64, color0: u16, color1: u16, indices: u32) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..8].copy_from_slice(&alpha.to_le_bytes());
    block[8..10].copy_from_slice(&color0.to_le_bytes());
    block[10..12].copy_from_slice(&color1.to_le_bytes());
    block[12..].copy_from_slice(&indices.to_le_bytes());
    block
}

/// Wrap DXT blocks in a minimal 128-byte DDS header
pub fn dds_payload(width: u32, height: u32, four_cc: &[u8; 4], blocks: &[[u8; 16]]) -> Vec<u8> {
    let mut out = vec![0u8; 128];
    out[..4].copy_from_slice(b"DDS ");
    out[4..8].copy_from_slice(&124u32.to_le_bytes());
    out[12..16].copy_from_slice(&height.to_le_bytes());
    out[16..20].copy_from_slice(&width.to_le_bytes());
    out[76..80].copy_from_slice(&32u32.to_le_bytes());
    out[84..88].copy_from_slice(four_cc);
    for block in blocks {
        out.extend_from_slice(block);
    }
    out
}
