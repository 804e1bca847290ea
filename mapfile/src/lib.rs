//! Map-file side of the decompiler: the entities which are written out as
//! editor text once the lumps they came from are decoded.
//!
//! - [`MapDisplacement`] rebuilds a displacement surface as square grids
//!   from a `DISPINFO` record and its run of `DISP_VERTS`
//! - [`MapPatch`] holds a bezier patch and writes it as a `patchDef2` block
//! - [`DecompilerSettings`] carries the output options to every writer

mod error;

pub mod displacement;
pub mod patch;
pub mod settings;

pub use crate::displacement::MapDisplacement;
pub use crate::error::MapError;
pub use crate::patch::{MapPatch, PatchVertex};
pub use crate::settings::{DecompilerSettings, MapFormat, format_float};
