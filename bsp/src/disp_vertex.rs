use glam::Vec3;
use wad::record::{read_f32, record_span};
use wad::{LumpError, LumpRecord, RawRecord, fixed_record};

/// Per-vertex data of a displacement as needed to rebuild its grid
pub trait VertexAttributes {
    /// Direction the vertex is pushed out along
    fn normal(&self) -> Vec3;
    /// Distance along `normal` from the base surface
    fn dist(&self) -> f32;
    /// Blend between the two textures of a blended material, 0-255
    fn alpha(&self) -> f32;
}

/// One vertex of the `DISP_VERTS` lump (lump 33)
///
/// | Field Size | Data Type | Content                    |
/// |------------|-----------|----------------------------|
/// |  0x00-0x0B |  3 x f32  | Normalised offset direction |
/// |  0x0C-0x0F |    f32    | Distance of the offset     |
/// |  0x10-0x13 |    f32    | Alpha blend                |
///
/// Each record is 20 bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DispVertex {
    raw: RawRecord,
    normal: Vec3,
    dist: f32,
    alpha: f32,
}

impl DispVertex {
    /// Build a vertex which wasn't read from a lump, it has no backing bytes
    pub fn new(normal: Vec3, dist: f32, alpha: f32) -> DispVertex {
        DispVertex {
            raw: RawRecord::new(),
            normal,
            dist,
            alpha,
        }
    }

    pub fn set_normal(&mut self, normal: Vec3) {
        self.normal = normal;
    }

    pub fn set_dist(&mut self, dist: f32) {
        self.dist = dist;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }
}
fixed_record!(DispVertex);

impl LumpRecord for DispVertex {
    const RECORD_SIZE: usize = 20;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DispVertex {
            raw: RawRecord::from_bytes(b),
            normal: Vec3::new(read_f32(b, 0), read_f32(b, 4), read_f32(b, 8)),
            dist: read_f32(b, 12),
            alpha: read_f32(b, 16),
        })
    }
}

impl VertexAttributes for DispVertex {
    fn normal(&self) -> Vec3 {
        self.normal
    }

    fn dist(&self) -> f32 {
        self.dist
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wad::FixedRecord;

    fn vertex_bytes(normal: [f32; 3], dist: f32, alpha: f32) -> Vec<u8> {
        normal
            .iter()
            .chain([dist, alpha].iter())
            .flat_map(|f| f.to_le_bytes())
            .collect()
    }

    #[test]
    fn decode_vertex() {
        let bytes = vertex_bytes([0.0, 0.0, 1.0], 16.5, 255.0);
        let vert = DispVertex::decode(&bytes).unwrap();
        assert_eq!(vert.normal(), Vec3::Z);
        assert_eq!(vert.dist(), 16.5);
        assert_eq!(vert.alpha(), 255.0);
        assert_eq!(vert.length(), 20);
    }

    #[test]
    fn truncated_vertex() {
        let bytes = vertex_bytes([1.0, 0.0, 0.0], 1.0, 0.0);
        assert_eq!(
            DispVertex::decode(&bytes[..19]),
            Err(LumpError::TruncatedRecord {
                expected: 20,
                found: 19
            })
        );
    }

    #[test]
    fn vertex_lump() {
        let mut bytes = vertex_bytes([1.0, 0.0, 0.0], 1.0, 0.0);
        bytes.extend(vertex_bytes([0.0, -1.0, 0.0], 2.0, 128.0));
        let lump = DispVertex::create_lump(&bytes).unwrap();
        assert_eq!(lump.len(), 2);
        assert_eq!(lump[1].normal(), Vec3::NEG_Y);
        assert_eq!(lump[1].alpha(), 128.0);
    }

    #[test]
    fn built_vertex_has_no_bytes() {
        let mut vert = DispVertex::new(Vec3::X, 4.0, 0.0);
        assert_eq!(vert.length(), 0);
        vert.set_dist(8.0);
        assert_eq!(vert.dist(), 8.0);
    }
}
