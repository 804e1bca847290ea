use std::ops::Index;
use std::slice;

use log::{debug, warn};

use crate::LumpError;
use crate::record::{LumpRecord, RawRecord};

/// An ordered collection of records decoded from one contiguous lump.
///
/// Order is the order of the records in the file, and is significant since
/// other lumps refer to records by index. The collection remembers the size
/// of the buffer it came from separately from the number of records so that
/// trailing or padding bytes can be detected with [`Lump::has_funny_size`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lump<T> {
    records: Vec<T>,
    /// Byte length of the buffer the lump was read from
    lump_length: usize,
    /// Width of a single record
    struct_length: usize,
}

impl<T> Lump<T> {
    /// Split `data` in to `data.len() / record_width` spans and decode each
    /// one with `decoder`, left to right. A trailing partial span is dropped.
    ///
    /// A `record_width` of 0 produces an empty lump.
    pub fn from_bytes_with<F>(
        data: &[u8],
        record_width: usize,
        decoder: F,
    ) -> Result<Self, LumpError>
    where
        F: Fn(&[u8]) -> Result<T, LumpError>,
    {
        if record_width == 0 {
            warn!("Lump record width of 0, nothing decoded from {} bytes", data.len());
            return Ok(Self::from_vec(Vec::new(), data.len(), record_width));
        }

        let records = data
            .chunks_exact(record_width)
            .map(decoder)
            .collect::<Result<Vec<T>, LumpError>>()?;

        let trailing = data.len() % record_width;
        if trailing != 0 {
            debug!(
                "Lump of {} bytes has {} trailing bytes after {} records of {} bytes",
                data.len(),
                trailing,
                records.len(),
                record_width
            );
        }

        Ok(Self::from_vec(records, data.len(), record_width))
    }

    /// Wrap records which were already decoded, for example vertices
    /// gathered from several surfaces.
    pub fn from_vec(records: Vec<T>, lump_length: usize, struct_length: usize) -> Self {
        Self {
            records,
            lump_length,
            struct_length,
        }
    }

    pub fn lump_length(&self) -> usize {
        self.lump_length
    }

    pub fn struct_length(&self) -> usize {
        self.struct_length
    }

    /// True if the reported byte length of the lump can't be evenly divided
    /// by the number of records in it. This is a diagnostic only; the lump
    /// is still usable.
    pub fn has_funny_size(&self) -> bool {
        if self.records.is_empty() || self.struct_length < 1 {
            return false;
        }
        self.lump_length % self.records.len() != 0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.records.get_mut(index)
    }

    /// Like `get`, but a bad index is an error. Takes a signed index since
    /// most lump cross-references are stored as `i16`.
    pub fn try_get(&self, index: isize) -> Result<&T, LumpError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.records.get(i))
            .ok_or(LumpError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Borrow `len` records starting at `start`
    pub fn range(&self, start: usize, len: usize) -> Result<&[T], LumpError> {
        start
            .checked_add(len)
            .and_then(|end| self.records.get(start..end))
            .ok_or(LumpError::OutOfRange {
                start,
                len,
                count: self.records.len(),
            })
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<T: LumpRecord> Lump<T> {
    /// Decode a whole lump of `T` records
    pub fn from_bytes(data: &[u8]) -> Result<Self, LumpError> {
        Self::from_bytes_with(data, T::RECORD_SIZE, T::decode)
    }
}

impl Lump<RawRecord> {
    /// Split a lump in to undecoded records of `record_width` bytes
    pub fn raw(data: &[u8], record_width: usize) -> Self {
        // Chunks are always exactly `record_width` so this can't fail
        Self::from_bytes_with(data, record_width, |b| Ok(RawRecord::from_bytes(b)))
            .unwrap_or_else(|_| Self::from_vec(Vec::new(), data.len(), record_width))
    }
}

impl<T> Default for Lump<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new(), 0, 0)
    }
}

impl<T> Index<usize> for Lump<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<T> IntoIterator for Lump<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Lump<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FixedRecord;

    fn bytes(n: usize) -> Vec<u8> {
        (0..n).map(|i| i as u8).collect()
    }

    #[test]
    fn exact_multiple() {
        for width in 1..8 {
            for count in 0..6 {
                let lump = Lump::raw(&bytes(width * count), width);
                assert_eq!(lump.len(), count);
                assert_eq!(lump.lump_length(), width * count);
                assert_eq!(lump.struct_length(), width);
                assert!(!lump.has_funny_size());
            }
        }
    }

    #[test]
    fn trailing_bytes_are_dropped() {
        // 3 records of 4 bytes plus 2 spare: 14 % 3 != 0
        let lump = Lump::raw(&bytes(14), 4);
        assert_eq!(lump.len(), 3);
        assert_eq!(lump.lump_length(), 14);
        assert!(lump.has_funny_size());
        assert_eq!(lump[2].data(), &[8, 9, 10, 11]);

        // 2 records of 5 bytes plus 2 spare: 12 % 2 == 0
        let lump = Lump::raw(&bytes(12), 5);
        assert_eq!(lump.len(), 2);
        assert!(!lump.has_funny_size());
    }

    #[test]
    fn records_keep_file_order() {
        let lump = Lump::raw(&bytes(9), 3);
        let firsts: Vec<u8> = lump.iter().map(|r| r.data()[0]).collect();
        assert_eq!(firsts, vec![0, 3, 6]);
    }

    #[test]
    fn buffer_shorter_than_width() {
        let lump = Lump::raw(&bytes(3), 4);
        assert!(lump.is_empty());
        assert!(!lump.has_funny_size());
    }

    #[test]
    fn zero_width() {
        let lump = Lump::raw(&bytes(10), 0);
        assert!(lump.is_empty());
        assert!(!lump.has_funny_size());
    }

    #[test]
    fn decoder_errors_propagate() {
        let err = Lump::<u8>::from_bytes_with(&bytes(4), 2, |_| {
            Err(LumpError::TruncatedRecord {
                expected: 3,
                found: 2,
            })
        });
        assert!(matches!(err, Err(LumpError::TruncatedRecord { .. })));
    }

    #[test]
    fn composed_lump() {
        let mut lump = Lump::from_vec(vec![1u32, 2, 3], 10, 4);
        assert!(lump.has_funny_size());
        lump.push(4);
        assert_eq!(lump.len(), 4);
        assert!(lump.has_funny_size());
        assert_eq!(lump.as_slice(), &[1, 2, 3, 4]);

        let empty: Lump<u32> = Lump::from_vec(Vec::new(), 10, 4);
        assert!(!empty.has_funny_size());
        let no_width = Lump::from_vec(vec![1u32], 3, 0);
        assert!(!no_width.has_funny_size());
    }

    #[test]
    fn bounds_are_enforced() {
        let lump = Lump::from_vec(vec![10u32, 20, 30], 12, 4);
        assert_eq!(lump.try_get(1), Ok(&20));
        assert_eq!(
            lump.try_get(3),
            Err(LumpError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            lump.try_get(-1),
            Err(LumpError::IndexOutOfRange { index: -1, len: 3 })
        );
        assert!(lump.get(3).is_none());

        assert_eq!(lump.range(1, 2), Ok(&[20, 30][..]));
        assert_eq!(
            lump.range(2, 2),
            Err(LumpError::OutOfRange {
                start: 2,
                len: 2,
                count: 3
            })
        );
        assert!(lump.range(usize::MAX, 2).is_err());
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let lump = Lump::from_vec(vec![1u8], 1, 1);
        let _ = lump[1];
    }
}
