//! Three-byte XOR stream cipher used by BMD containers.
//!
//! Each byte at position `i` is combined with `XOR3_KEY[i % 3]` and with the
//! low byte of a per-container extra key. The transform is length preserving
//! and is its own inverse, so the same call both encrypts and decrypts.
//!
//! ## Usage
//!
//! ```rust
//! use mu_crypto::xor3::Xor3Cipher;
//!
//! let cipher = Xor3Cipher::new(0x00DC);
//! let encrypted = cipher.decrypt(b"Hello, MU!");
//! assert_eq!(cipher.decrypt(&encrypted), b"Hello, MU!");
//! ```

/// Fixed three-byte key cycled over the payload.
pub const XOR3_KEY: [u8; 3] = [0xFC, 0xCF, 0xAB];

/// Extra key used by most client-side BMD tables.
pub const BMD_EXTRA_KEY: u16 = 0x00DC;

/// Position-keyed XOR cipher.
///
/// Holds no stream state: the keystream byte for position `i` depends only on
/// `i`, so slices may be processed independently as long as they start at a
/// record boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Xor3Cipher {
    extra: u8,
}

impl Xor3Cipher {
    /// Create a cipher for the given extra key.
    ///
    /// Only the low byte of `extra_key` takes part in the transform.
    pub const fn new(extra_key: u16) -> Self {
        Self {
            extra: (extra_key & 0xFF) as u8,
        }
    }

    /// Keystream byte for position `index`.
    #[inline]
    const fn keystream_byte(&self, index: usize) -> u8 {
        XOR3_KEY[index % 3] ^ self.extra
    }

    /// Decrypt `data` into a newly allocated buffer.
    ///
    /// The input is left untouched so cached source blobs can be decoded
    /// again. Encryption is the same operation.
    pub fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .enumerate()
            .map(|(i, &byte)| byte ^ self.keystream_byte(i))
            .collect()
    }

    /// Apply the keystream to `data` in place.
    ///
    /// Avoids an allocation for callers that own a scratch buffer.
    pub fn apply_keystream(&self, data: &mut [u8]) {
        for (i, byte) in data.iter_mut().enumerate() {
            *byte ^= self.keystream_byte(i);
        }
    }
}

/// Decrypt `data` with `extra_key`, returning a new buffer.
pub fn decrypt(data: &[u8], extra_key: u16) -> Vec<u8> {
    Xor3Cipher::new(extra_key).decrypt(data)
}
