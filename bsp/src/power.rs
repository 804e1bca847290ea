use log::warn;

use crate::DispError;

/// Number of vertices along one edge of a displacement of `power`.
/// Power 2 is 5, 3 is 9 and 4 is 17 (`2^power + 1`).
pub fn side_length_for_power(power: i32) -> Result<usize, DispError> {
    match power {
        2..=4 => Ok((1 << power) + 1),
        _ => {
            warn!("Displacement power {} is not supported", power);
            Err(DispError::UnsupportedPower(power))
        }
    }
}

/// Total vertex count of a displacement of `power`: 25, 81 or 289
pub fn verts_for_power(power: i32) -> Result<usize, DispError> {
    side_length_for_power(power).map(|side| side * side)
}
