use std::ops::Deref;

use log::trace;
use wad::{Lump, LumpRecord};

use crate::DispError;
use crate::disp_info::DispDescriptor;
use crate::disp_vertex::DispVertex;
use crate::power::verts_for_power;

/// The `DISP_VERTS` lump. Every displacement owns a contiguous run of
/// vertices in it, sized by the displacement's power.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SourceDispVertices {
    lump: Lump<DispVertex>,
}

impl SourceDispVertices {
    pub fn from_bytes(data: &[u8]) -> Result<Self, DispError> {
        Ok(Self {
            lump: Lump::from_bytes(data)?,
        })
    }

    /// Wrap vertices which were already decoded or gathered from several
    /// surfaces
    pub fn from_vec(vertices: Vec<DispVertex>, lump_length: usize) -> Self {
        Self {
            lump: Lump::from_vec(vertices, lump_length, DispVertex::RECORD_SIZE),
        }
    }

    /// Copy out the vertices of one displacement: `verts_for_power(power)`
    /// vertices starting at `first_index`.
    pub fn extract_range(
        &self,
        first_index: usize,
        power: i32,
    ) -> Result<Vec<DispVertex>, DispError> {
        let count = verts_for_power(power)?;
        trace!(
            "Extracting {} displacement vertices from {} of {}",
            count,
            first_index,
            self.lump.len()
        );
        Ok(self.lump.range(first_index, count)?.to_vec())
    }

    /// The vertices of the displacement described by `info`, starting at
    /// `first_index` (normally the descriptor's first vertex index)
    pub fn vertices_for(
        &self,
        info: &impl DispDescriptor,
        first_index: usize,
    ) -> Result<Vec<DispVertex>, DispError> {
        self.extract_range(first_index, info.power())
    }

    pub fn into_lump(self) -> Lump<DispVertex> {
        self.lump
    }
}

impl Deref for SourceDispVertices {
    type Target = Lump<DispVertex>;

    fn deref(&self) -> &Self::Target {
        &self.lump
    }
}

impl From<Lump<DispVertex>> for SourceDispVertices {
    fn from(lump: Lump<DispVertex>) -> Self {
        Self { lump }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use wad::LumpError;

    use super::*;
    use crate::disp_info::DispInfo;
    use crate::disp_vertex::VertexAttributes;

    fn vertices(count: usize) -> SourceDispVertices {
        let verts = (0..count)
            .map(|i| DispVertex::new(Vec3::Z, i as f32, 0.0))
            .collect::<Vec<_>>();
        SourceDispVertices::from_vec(verts, count * 20)
    }

    #[test]
    fn extract_whole_power_two() {
        let verts = vertices(25);
        let range = verts.extract_range(0, 2).unwrap();
        assert_eq!(range.len(), 25);
        assert_eq!(range[24].dist(), 24.0);
    }

    #[test]
    fn extract_each_power() {
        let verts = vertices(25 + 81 + 289);
        let p2 = verts.extract_range(0, 2).unwrap();
        let p3 = verts.extract_range(25, 3).unwrap();
        let p4 = verts.extract_range(106, 4).unwrap();
        assert_eq!(p2.len(), 25);
        assert_eq!(p3.len(), 81);
        assert_eq!(p4.len(), 289);
        assert_eq!(p3[0].dist(), 25.0);
        assert_eq!(p4[288].dist(), 394.0);
    }

    #[test]
    fn extract_past_end() {
        let verts = vertices(30);
        assert_eq!(
            verts.extract_range(6, 2),
            Err(DispError::Lump(LumpError::OutOfRange {
                start: 6,
                len: 25,
                count: 30
            }))
        );
        assert!(verts.extract_range(5, 2).is_ok());
    }

    #[test]
    fn extract_bad_power() {
        let verts = vertices(300);
        assert_eq!(
            verts.extract_range(0, 5),
            Err(DispError::UnsupportedPower(5))
        );
        assert_eq!(
            verts.extract_range(0, 1),
            Err(DispError::UnsupportedPower(1))
        );
    }

    #[test]
    fn vertices_for_descriptor() {
        let verts = vertices(100);
        let info = DispInfo::new(3, Vec3::ZERO, 10);
        let range = verts
            .vertices_for(&info, info.disp_vert_start() as usize)
            .unwrap();
        assert_eq!(range.len(), 81);
        assert_eq!(range[0].dist(), 10.0);
    }

    #[test]
    fn from_bytes() {
        let bytes: Vec<u8> = (0..25)
            .flat_map(|i| {
                [0.0f32, 0.0, 1.0, i as f32, 0.0]
                    .into_iter()
                    .flat_map(f32::to_le_bytes)
            })
            .collect();
        let verts = SourceDispVertices::from_bytes(&bytes).unwrap();
        assert_eq!(verts.len(), 25);
        assert_eq!(verts.lump_length(), 500);
        assert!(!verts.has_funny_size());
        assert_eq!(verts.extract_range(0, 2).unwrap()[3].dist(), 3.0);
    }
}
