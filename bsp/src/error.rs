use thiserror::Error;
use wad::LumpError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispError {
    /// Displacements are only built with a power of 2, 3 or 4
    #[error("unsupported displacement power {0}, expected 2, 3 or 4")]
    UnsupportedPower(i32),
    #[error(transparent)]
    Lump(#[from] LumpError),
}
