use bsp::DispError;
use thiserror::Error;
use wad::LumpError;

use crate::MapFormat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A grid was handed a different number of points than its dimensions hold
    #[error("expected {expected} points, got {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("({row}, {col}) is outside a grid of {rows} rows by {cols} columns")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error(transparent)]
    Disp(#[from] DispError),
    #[error(transparent)]
    Lump(#[from] LumpError),
    #[error("invalid decompiler settings: {0}")]
    Settings(String),
    /// The output format has no way to write this entity
    #[error("{0} maps can't hold bezier patches")]
    PatchesUnsupported(MapFormat),
}
