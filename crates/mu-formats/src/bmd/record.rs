//! Fixed-size record layouts

use binrw::BinRead;
use binrw::io::Cursor;

use super::error::{BmdError, BmdResult};

/// A record type stored in a BMD table.
///
/// Implementors declare their on-disk size and decode themselves from exactly
/// that many decrypted bytes. Layouts are explicit: fields sit at fixed
/// little-endian offsets with no padding.
pub trait BmdRecord: Sized {
    /// Size of one record on disk
    const RECORD_SIZE: usize;

    /// Decode one record from `RECORD_SIZE` decrypted bytes
    fn decode(bytes: &[u8]) -> BmdResult<Self>;
}

/// Decode a `binrw` layout from exactly `T::RECORD_SIZE` bytes.
pub fn decode_fixed<T>(bytes: &[u8]) -> BmdResult<T>
where
    T: BmdRecord + for<'a> BinRead<Args<'a> = ()>,
{
    if bytes.len() != T::RECORD_SIZE {
        return Err(BmdError::Truncated {
            context: "record",
            expected: T::RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    let mut cursor = Cursor::new(bytes);
    let record = T::read_le(&mut cursor)?;
    debug_assert_eq!(cursor.position() as usize, T::RECORD_SIZE);
    Ok(record)
}

/// Decode a NUL-padded Latin-1 string field.
pub fn latin1_cstr(raw: &[u8]) -> String {
    raw.iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_stops_at_nul() {
        assert_eq!(latin1_cstr(b"Cyclone\0garbage"), "Cyclone");
        assert_eq!(latin1_cstr(b""), "");
        assert_eq!(latin1_cstr(b"\0Hidden"), "");
    }

    #[test]
    fn test_latin1_high_bytes() {
        assert_eq!(latin1_cstr(&[0x46, 0xFC, 0x72, 0x00]), "F\u{fc}r");
    }
}
