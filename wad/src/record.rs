//! The smallest unit of a lump: a record which owns the span of bytes it was
//! decoded from.

use crate::LumpError;

/// Anything that holds the raw bytes of a single lump record.
///
/// The bytes are kept as they were read. Any field setters on a decoded
/// record mutate the decoded value only, the span is never re-encoded.
pub trait FixedRecord {
    fn data(&self) -> &[u8];

    fn length(&self) -> usize {
        self.data().len()
    }
}

/// A record schema with a fixed width inside its lump.
pub trait LumpRecord: FixedRecord + Sized {
    /// Width in bytes of one record in the lump
    const RECORD_SIZE: usize;

    /// Decode one record. `bytes` must be at least `RECORD_SIZE` long, only
    /// the first `RECORD_SIZE` bytes are consumed.
    fn decode(bytes: &[u8]) -> Result<Self, LumpError>;
}

/// Check that `bytes` can hold a record of `expected` bytes and return exactly
/// that span.
pub fn record_span(bytes: &[u8], expected: usize) -> Result<&[u8], LumpError> {
    bytes.get(..expected).ok_or(LumpError::TruncatedRecord {
        expected,
        found: bytes.len(),
    })
}

/// An undecoded record. Used when only the byte layout of a lump is known,
/// or as the backing store of a typed record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawRecord {
    data: Vec<u8>,
}

impl RawRecord {
    pub fn new() -> RawRecord {
        RawRecord { data: Vec::new() }
    }

    pub fn from_bytes(bytes: &[u8]) -> RawRecord {
        RawRecord {
            data: bytes.to_vec(),
        }
    }

    /// Replace the whole span
    pub fn set_data(&mut self, bytes: &[u8]) {
        self.data = bytes.to_vec();
    }
}

impl FixedRecord for RawRecord {
    fn data(&self) -> &[u8] {
        &self.data
    }
}

// All readers below expect the caller to have checked the span with
// `record_span` first.

#[inline]
pub fn read_i16(bytes: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
pub fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
pub fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
pub fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
pub fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_bits(read_u32(bytes, offset))
}

/// Every byte as a character, NUL bytes included. Lump names are 8-bit so
/// there is no UTF-8 decoding to fail.
pub fn read_name_verbatim(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Characters up to (not including) the first NUL byte.
pub fn read_name_terminated(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_construction() {
        let empty = RawRecord::new();
        assert_eq!(empty.length(), 0);

        let mut rec = RawRecord::from_bytes(&[1, 2, 3]);
        assert_eq!(rec.length(), 3);
        assert_eq!(rec.data(), &[1, 2, 3]);

        rec.set_data(&[9; 5]);
        assert_eq!(rec.length(), 5);
    }

    #[test]
    fn span_check() {
        assert_eq!(record_span(&[0; 10], 4).unwrap().len(), 4);
        assert_eq!(
            record_span(&[0; 3], 4),
            Err(LumpError::TruncatedRecord {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn little_endian_reads() {
        let bytes = [0xFE, 0xFF, 0x00, 0x00, 0x80, 0x3F];
        assert_eq!(read_i16(&bytes, 0), -2);
        assert_eq!(read_u16(&bytes, 0), 0xFFFE);
        assert_eq!(read_f32(&bytes, 2), 1.0);
        assert_eq!(read_i32(&[0xFF, 0xFF, 0xFF, 0xFF], 0), -1);
    }

    #[test]
    fn name_decoding() {
        let bytes = [b'A', b'B', 0, 0, b'C', 0, 0, 0];
        assert_eq!(read_name_terminated(&bytes), "AB");
        let verbatim = read_name_verbatim(&bytes);
        assert_eq!(verbatim.len(), 8);
        assert_eq!(verbatim, "AB\0\0C\0\0\0");
    }
}
