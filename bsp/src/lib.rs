//! Source engine BSP records for displacement surfaces.
//!
//! A displacement replaces a four sided face with a grid of
//! `(2^power + 1)^2` vertices. The `DISPINFO` lump describes each surface and
//! points at a run of vertices in the `DISP_VERTS` lump:
//!
//! ```text,ignore
//!   DISPINFO[n] ── disp_vert_start ──┐
//!                                    v
//!   DISP_VERTS  [ .. | v0 v1 ... v(side*side - 1) | .. ]
//! ```

mod error;

pub mod disp_info;
pub mod disp_vertex;
pub mod disp_vertices;
pub mod power;

pub use crate::disp_info::{ALLOWED_VERTS_WORDS, DispDescriptor, DispInfo};
pub use crate::disp_vertex::{DispVertex, VertexAttributes};
pub use crate::disp_vertices::SourceDispVertices;
pub use crate::error::DispError;
pub use crate::power::{side_length_for_power, verts_for_power};
