use glam::{Vec2, Vec3};
use log::warn;

use crate::{DecompilerSettings, MapError};

const LOG_TAG: &str = "MapPatch";
const TEXTURE_PREFIX: &str = "textures/";

/// A control point of a bezier patch
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PatchVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl PatchVertex {
    pub fn new(position: Vec3, uv: Vec2) -> PatchVertex {
        PatchVertex { position, uv }
    }

    /// `( x y z u v )`
    pub fn serialize(&self, settings: &DecompilerSettings) -> String {
        format!(
            "( {} {} {} {} {} )",
            settings.format_float(self.position.x),
            settings.format_float(self.position.y),
            settings.format_float(self.position.z),
            settings.format_float(self.uv.x),
            settings.format_float(self.uv.y),
        )
    }
}

/// A bezier patch: `x` by `y` control points and a texture.
///
/// Points are stored so that `(row, col)` is at `col + row * x`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPatch {
    x: usize,
    y: usize,
    /// `x * y`, checked when the patch is made
    count: usize,
    texture: String,
    points: Vec<PatchVertex>,
}

/// Number of points an `x` by `y` patch holds. Dimensions whose product
/// doesn't fit a `usize` can never be matched by `found` points.
fn point_count(x: usize, y: usize, found: usize) -> Result<usize, MapError> {
    x.checked_mul(y).ok_or_else(|| {
        warn!(target: LOG_TAG, "Patch of {} by {} points is too large", x, y);
        MapError::SizeMismatch {
            expected: usize::MAX,
            found,
        }
    })
}

impl MapPatch {
    /// An empty patch for `x * y` points, fill it with `push`. Points are
    /// not preallocated since the dimensions often come from the file.
    pub fn new(x: usize, y: usize, texture: impl Into<String>) -> Result<MapPatch, MapError> {
        Ok(MapPatch {
            x,
            y,
            count: point_count(x, y, 0)?,
            texture: texture.into(),
            points: Vec::new(),
        })
    }

    pub fn with_points(
        x: usize,
        y: usize,
        texture: impl Into<String>,
        points: Vec<PatchVertex>,
    ) -> Result<MapPatch, MapError> {
        let count = point_count(x, y, points.len())?;
        if points.len() != count {
            return Err(MapError::SizeMismatch {
                expected: count,
                found: points.len(),
            });
        }
        Ok(MapPatch {
            x,
            y,
            count,
            texture: texture.into(),
            points,
        })
    }

    /// Append the next control point. Fails once the patch holds `x * y`.
    pub fn push(&mut self, point: PatchVertex) -> Result<(), MapError> {
        if self.points.len() >= self.count {
            return Err(MapError::SizeMismatch {
                expected: self.count,
                found: self.points.len() + 1,
            });
        }
        self.points.push(point);
        Ok(())
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// The texture name as stored, prefix and all
    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn points(&self) -> &[PatchVertex] {
        &self.points
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == self.count
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&PatchVertex, MapError> {
        if row >= self.y || col >= self.x {
            return Err(self.out_of_range(row, col));
        }
        self.points
            .get(col + row * self.x)
            .ok_or_else(|| self.out_of_range(row, col))
    }

    fn out_of_range(&self, row: usize, col: usize) -> MapError {
        MapError::IndexOutOfRange {
            row,
            col,
            rows: self.y,
            cols: self.x,
        }
    }

    /// The texture name for writing out, with a leading `textures/` removed.
    /// Names too short to hold the prefix are returned as is.
    pub fn display_texture(&self) -> &str {
        match self.texture.get(..TEXTURE_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(TEXTURE_PREFIX) => {
                &self.texture[TEXTURE_PREFIX.len()..]
            }
            _ => &self.texture,
        }
    }

    /// Write the patch as a `patchDef2` block with CRLF line endings.
    /// Fails if `settings.format` has no patches or the patch isn't full.
    ///
    /// Printed row `i` is made of the stored points `i + j * x` for each `j`
    /// in `0..y`, so the printed grid is the stored one transposed. Existing
    /// maps rely on this order.
    pub fn serialize(&self, settings: &DecompilerSettings) -> Result<String, MapError> {
        if !settings.format.supports_patches() {
            return Err(MapError::PatchesUnsupported(settings.format));
        }
        if !self.is_complete() {
            return Err(MapError::SizeMismatch {
                expected: self.count,
                found: self.points.len(),
            });
        }

        let mut out = String::from("{\r\n patchDef2\r\n {\r\n  ");
        out.push_str(self.display_texture());
        out.push_str(&format!("\r\n  ( {} {} 0 0 0 )\r\n  (\r\n", self.x, self.y));
        for i in 0..self.x {
            out.push_str("   ( ");
            for j in 0..self.y {
                out.push_str(&self.points[i + j * self.x].serialize(settings));
                out.push(' ');
            }
            out.push_str(")\r\n");
        }
        out.push_str("  )\r\n }\r\n}\r\n");
        Ok(out)
    }
}
