//! Record table reader

use std::path::Path;

use mu_crypto::Xor3Cipher;
use tracing::{debug, warn};

use super::error::{BmdError, BmdResult};
use super::options::TableOptions;
use super::record::BmdRecord;

const COUNT_SIZE: usize = 4;

/// Iterator over decrypted record chunks of a BMD table.
///
/// Yields one `record_size`-byte buffer per record. Iteration stops as soon as
/// fewer than `record_size` bytes (plus the checksum trailer, when present)
/// remain; a trailing partial record is ignored.
#[derive(Debug, Clone)]
pub struct BmdChunks<'a> {
    data: &'a [u8],
    pos: usize,
    record_size: usize,
    trailer: usize,
    cipher: Xor3Cipher,
    declared_count: Option<u32>,
}

impl<'a> BmdChunks<'a> {
    /// Start iterating the records of `data`.
    ///
    /// Reads the leading count when `options.has_leading_count` is set. The
    /// count is recorded but does not bound iteration.
    pub fn new(data: &'a [u8], record_size: usize, options: &TableOptions) -> BmdResult<Self> {
        if record_size == 0 {
            return Err(BmdError::InvalidRecordSize(record_size));
        }

        let (declared_count, pos) = if options.has_leading_count {
            let head: [u8; COUNT_SIZE] = data
                .get(..COUNT_SIZE)
                .and_then(|head| head.try_into().ok())
                .ok_or(BmdError::Truncated {
                    context: "record count",
                    expected: COUNT_SIZE,
                    actual: data.len(),
                })?;
            (Some(u32::from_le_bytes(head)), COUNT_SIZE)
        } else {
            (None, 0)
        };

        Ok(Self {
            data,
            pos,
            record_size,
            trailer: options.trailer_size(),
            cipher: Xor3Cipher::new(options.key),
            declared_count,
        })
    }

    /// Record count from the file header, if the table has one
    pub fn declared_count(&self) -> Option<u32> {
        self.declared_count
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Number of whole records still available
    pub fn records_left(&self) -> usize {
        self.remaining().saturating_sub(self.trailer) / self.record_size
    }
}

impl Iterator for BmdChunks<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() < self.record_size + self.trailer {
            return None;
        }

        let chunk = &self.data[self.pos..self.pos + self.record_size];
        self.pos += self.record_size;
        Some(self.cipher.decrypt(chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.records_left();
        (left, Some(left))
    }
}

impl ExactSizeIterator for BmdChunks<'_> {}

/// A decoded BMD table
#[derive(Debug, Clone, PartialEq)]
pub struct BmdTable<T> {
    records: Vec<T>,
    declared_count: Option<u32>,
    checksum: Option<u32>,
    skipped: usize,
}

impl<T: BmdRecord> BmdTable<T> {
    /// Decode a table from raw file bytes.
    ///
    /// Records that fail to decode are logged and skipped; the rest of the
    /// table still loads.
    pub fn parse(data: &[u8], options: &TableOptions) -> BmdResult<Self> {
        let mut chunks = BmdChunks::new(data, T::RECORD_SIZE, options)?;
        let declared_count = chunks.declared_count();

        let mut records = Vec::with_capacity(chunks.len());
        let mut skipped = 0;
        for (index, chunk) in chunks.by_ref().enumerate() {
            match T::decode(&chunk) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let err = BmdError::MalformedEntry {
                        index,
                        reason: e.to_string(),
                    };
                    warn!("skipping BMD record: {err}");
                    skipped += 1;
                }
            }
        }

        let checksum = if options.has_trailing_checksum && chunks.remaining() >= 4 {
            let tail = &data[data.len() - 4..];
            Some(u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]))
        } else {
            None
        };

        if let Some(count) = declared_count
            && count as usize != records.len() + skipped
        {
            debug!(
                "BMD declared count {} differs from {} records read",
                count,
                records.len() + skipped
            );
        }

        debug!(
            "decoded BMD table: {} records of {} bytes, {} skipped",
            records.len(),
            T::RECORD_SIZE,
            skipped
        );

        Ok(Self {
            records,
            declared_count,
            checksum,
            skipped,
        })
    }

    /// Read and decode a table file.
    ///
    /// A missing file is reported as [`BmdError::NotFound`].
    pub fn open(path: impl AsRef<Path>, options: &TableOptions) -> BmdResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BmdError::NotFound {
                path: path.to_path_buf(),
            },
            _ => BmdError::Io(e),
        })?;
        debug!("read {} bytes from {}", data.len(), path.display());
        Self::parse(&data, options)
    }
}

impl<T> BmdTable<T> {
    /// Decoded records in file order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consume the table, returning its records
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Number of decoded records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was decoded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate decoded records
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Leading record count, when the table has one (informational only)
    pub fn declared_count(&self) -> Option<u32> {
        self.declared_count
    }

    /// Trailing checksum, when present (never validated)
    pub fn checksum(&self) -> Option<u32> {
        self.checksum
    }

    /// Records dropped because they failed to decode
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<T> IntoIterator for BmdTable<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BmdTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Read a table file into a plain vector of records.
pub fn read_table<T: BmdRecord>(
    path: impl AsRef<Path>,
    options: &TableOptions,
) -> BmdResult<Vec<T>> {
    BmdTable::open(path, options).map(BmdTable::into_records)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{Pair, encode_table};
    use proptest::prelude::*;

    #[test]
    fn test_reads_all_records_without_framing() {
        let opts = TableOptions::default()
            .with_leading_count(false)
            .with_trailing_checksum(false)
            .with_key(0x00DC);
        let data = encode_table(&[Pair(1, 2), Pair(3, 4), Pair(5, 6)], &opts, None);

        let table = BmdTable::<Pair>::parse(&data, &opts).unwrap();
        assert_eq!(table.records(), &[Pair(1, 2), Pair(3, 4), Pair(5, 6)]);
        assert_eq!(table.declared_count(), None);
        assert_eq!(table.checksum(), None);
    }

    #[test]
    fn test_declared_count_does_not_bound_iteration() {
        let opts = TableOptions::default().with_trailing_checksum(false);
        let mut data = encode_table(&[Pair(1, 1), Pair(2, 2), Pair(3, 3)], &opts, None);
        // Claim a single record in the header
        data[..4].copy_from_slice(&1u32.to_le_bytes());

        let table = BmdTable::<Pair>::parse(&data, &opts).unwrap();
        assert_eq!(table.declared_count(), Some(1));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_checksum_is_exposed_and_excluded() {
        let opts = TableOptions::default().with_key(7);
        let data = encode_table(&[Pair(10, 20)], &opts, Some(0xDEAD_BEEF));

        let table = BmdTable::<Pair>::parse(&data, &opts).unwrap();
        assert_eq!(table.records(), &[Pair(10, 20)]);
        assert_eq!(table.checksum(), Some(0xDEAD_BEEF));
    }

    #[test]
    fn test_short_count_header_is_truncated() {
        let err = BmdTable::<Pair>::parse(&[1, 0], &TableOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            BmdError::Truncated {
                context: "record count",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_record_size_rejected() {
        let err = BmdChunks::new(&[0; 16], 0, &TableOptions::default()).unwrap_err();
        assert!(matches!(err, BmdError::InvalidRecordSize(0)));
    }

    #[test]
    fn test_chunks_report_exact_size() {
        let opts = TableOptions::headerless();
        let data = encode_table(&[Pair(0, 0), Pair(0, 0)], &opts, Some(0));
        let chunks = BmdChunks::new(&data, Pair::RECORD_SIZE, &opts).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.count(), 2);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let opts = TableOptions::default()
            .with_leading_count(false)
            .with_trailing_checksum(false);
        // Pair rejects a first field of 0xFFFF
        let data = encode_table(&[Pair(1, 1), Pair(0xFFFF, 0), Pair(2, 2)], &opts, None);

        let table = BmdTable::<Pair>::parse(&data, &opts).unwrap();
        assert_eq!(table.records(), &[Pair(1, 1), Pair(2, 2)]);
        assert_eq!(table.skipped(), 1);
    }

    #[test]
    fn test_open_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bmd");
        let err = BmdTable::<Pair>::open(&path, &TableOptions::default()).unwrap_err();
        assert!(matches!(err, BmdError::NotFound { path: ref p } if *p == path));
    }

    proptest! {
        #[test]
        fn prop_trailing_partial_record_ignored(
            n in 0usize..16,
            extra in 0usize..Pair::RECORD_SIZE,
            key in any::<u16>(),
        ) {
            let opts = TableOptions::default()
                .with_leading_count(false)
                .with_trailing_checksum(false)
                .with_key(key);
            let records: Vec<Pair> = (0..n as u16).map(|i| Pair(i, i + 1)).collect();
            let mut data = encode_table(&records, &opts, None);
            data.extend(std::iter::repeat_n(0xAA, extra));

            let table = BmdTable::<Pair>::parse(&data, &opts).unwrap();
            prop_assert_eq!(table.len(), n);
            prop_assert_eq!(table.records(), records.as_slice());
        }
    }
}
