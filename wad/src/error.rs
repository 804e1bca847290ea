use thiserror::Error;

/// Failures raised while decoding a lump or reading from a decoded one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LumpError {
    /// The span handed to a record decoder is shorter than the record width
    #[error("truncated record: expected {expected} bytes, got {found}")]
    TruncatedRecord { expected: usize, found: usize },
    /// A sub-range `[start, start + len)` reaches past the end of the lump
    #[error("range {start}..{} is out of range for a lump of {count} records", .start + .len)]
    OutOfRange {
        start: usize,
        len: usize,
        count: usize,
    },
    #[error("index {index} is out of range for a lump of {len} records")]
    IndexOutOfRange { index: isize, len: usize },
}
