//! This crate contains the structures and tools for turning the raw bytes of
//! a map lump in to typed records. It does no file I/O: a WAD or BSP reader
//! hands over the bytes of a lump and gets back a [`Lump`] of records.
//!
//! A lump is a contiguous run of fixed width records:
//!
//! ```text,ignore
//!            <───── record width ─────>
//!            ┌────────────────────────┐
//!     0x00 ──│        Record 0        │
//!            │ ────────────────────── │
//!            │        Record 1        │
//!            │ ────────────────────── │
//!            │           .            │
//!            │           .            │
//!            │ ────────────────────── │
//!            │       Record N-1       │
//!            ├────────────────────────┤
//!            │   Trailing bytes (?)   │ <── dropped, see `Lump::has_funny_size`
//!            └────────────────────────┘
//! ```

mod error;

/// A Lump is a chunk of data that starts at an offset in the WAD, and ends
/// at a location that is `sizeof<record-in-lump> * num-of-entries`
pub mod lump;

/// The base record traits and the little-endian field readers used by the
/// decoders
pub mod record;

/// Decoders for the Doom map records
pub mod types;

pub mod map;

pub use crate::error::LumpError;
pub use crate::lump::Lump;
pub use crate::map::{DoomMapLumps, MapLump};
pub use crate::record::{FixedRecord, LumpRecord, RawRecord};
pub use crate::types::*;
