use std::fmt;

use log::{debug, warn};

use crate::types::{DLinedef, DSector, DSeg, DSidedef, DSubSector, DThing, DVertex};
use crate::{Lump, LumpError};

const LOG_TAG: &str = "DoomMap";

/// The lumps which follow a map marker (such as `E1M1`) in a WAD, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLump {
    /// Position and angle for all monster, powerup and spawn location
    Things = 1,
    /// An array of lines referencing two vertices (Two vertexes are connected
    /// by one `LineDef`). Also points to one or two `SideDef` depending on if
    /// this line is a wall or a portal
    LineDefs,
    /// Defines upper, lower, and middle textures. Also defines texture
    /// horizontal and vertical offsets. This is information for a `LineDef`
    SideDefs,
    /// An array of signed short X, Y pairs (`Vertex`). All coordinates in this
    /// map block are indexes into this array
    Vertexes,
    /// Portions of lines cut due to Binary Space Partitioning
    Segs,
    /// Set of segments of a `LineDef` representing a convex subspace
    SubSectors,
    /// BSP with segs, nodes and sub-sector leaves
    Nodes,
    /// Area surrounded by lines, with set ceiling and floor textures/heights
    /// with light level
    Sectors,
}

impl MapLump {
    /// Name of the lump as it appears in the WAD directory
    pub fn name(&self) -> &'static str {
        match self {
            MapLump::Things => "THINGS",
            MapLump::LineDefs => "LINEDEFS",
            MapLump::SideDefs => "SIDEDEFS",
            MapLump::Vertexes => "VERTEXES",
            MapLump::Segs => "SEGS",
            MapLump::SubSectors => "SSECTORS",
            MapLump::Nodes => "NODES",
            MapLump::Sectors => "SECTORS",
        }
    }

    /// Offset of the lump from the map marker in the WAD directory
    pub fn offset_from_marker(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MapLump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The decoded record lumps of one map. A lump which wasn't supplied is left
/// empty.
#[derive(Debug, Default, Clone)]
pub struct DoomMapLumps {
    pub things: Lump<DThing>,
    pub linedefs: Lump<DLinedef>,
    pub sidedefs: Lump<DSidedef>,
    pub vertexes: Lump<DVertex>,
    pub segments: Lump<DSeg>,
    pub subsectors: Lump<DSubSector>,
    pub sectors: Lump<DSector>,
}

impl DoomMapLumps {
    /// Decode the raw lump buffers of a map as handed over by a WAD reader.
    /// NODES is not decoded here since its layout depends on the node builder.
    pub fn decode(lumps: &[(MapLump, &[u8])]) -> Result<Self, LumpError> {
        let mut map = DoomMapLumps::default();

        for (kind, data) in lumps {
            match kind {
                MapLump::Things => map.things = Self::read(*kind, data)?,
                MapLump::LineDefs => map.linedefs = Self::read(*kind, data)?,
                MapLump::SideDefs => map.sidedefs = Self::read(*kind, data)?,
                MapLump::Vertexes => map.vertexes = Self::read(*kind, data)?,
                MapLump::Segs => map.segments = Self::read(*kind, data)?,
                MapLump::SubSectors => map.subsectors = Self::read(*kind, data)?,
                MapLump::Sectors => map.sectors = Self::read(*kind, data)?,
                MapLump::Nodes => {
                    debug!(target: LOG_TAG, "Skipping {} lump, {} bytes", kind, data.len());
                }
            }
        }

        Ok(map)
    }

    fn read<T: crate::LumpRecord>(kind: MapLump, data: &[u8]) -> Result<Lump<T>, LumpError> {
        let lump = Lump::<T>::from_bytes(data)?;
        if lump.has_funny_size() {
            warn!(
                target: LOG_TAG,
                "{} lump has a funny size: {} bytes for {} records",
                kind,
                lump.lump_length(),
                lump.len()
            );
        }
        debug!(target: LOG_TAG, "Decoded {} {} records", lump.len(), kind);
        Ok(lump)
    }

    /// Check that every sidedef points at a sector which exists
    pub fn check_sidedef_sectors(&self) -> Result<(), LumpError> {
        for side in self.sidedefs.iter() {
            side.sector_in(&self.sectors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(floor: i16) -> Vec<u8> {
        let mut b = vec![0u8; 26];
        b[0..2].copy_from_slice(&floor.to_le_bytes());
        b[4..12].copy_from_slice(b"FLOOR4_8");
        b
    }

    fn sidedef(sector: i16) -> Vec<u8> {
        let mut b = vec![0u8; 30];
        b[20..25].copy_from_slice(b"STEP6");
        b[28..30].copy_from_slice(&sector.to_le_bytes());
        b
    }

    #[test]
    fn lump_names() {
        assert_eq!(MapLump::Things.name(), "THINGS");
        assert_eq!(MapLump::SubSectors.to_string(), "SSECTORS");
        assert_eq!(MapLump::Things.offset_from_marker(), 1);
        assert_eq!(MapLump::Sectors.offset_from_marker(), 8);
    }

    #[test]
    fn decode_map_lumps() {
        let mut sectors = sector(0);
        sectors.extend(sector(-24));
        let mut sides = sidedef(0);
        sides.extend(sidedef(1));
        // three spare bytes
        sides.extend([1, 2, 3]);

        let map = DoomMapLumps::decode(&[
            (MapLump::Sectors, sectors.as_slice()),
            (MapLump::SideDefs, sides.as_slice()),
            (MapLump::Nodes, &[0u8; 28][..]),
        ])
        .unwrap();

        assert_eq!(map.sectors.len(), 2);
        assert_eq!(map.sectors[1].floor_height(), -24);
        assert_eq!(map.sidedefs.len(), 2);
        assert!(map.sidedefs.has_funny_size());
        assert!(map.things.is_empty());
        assert!(map.check_sidedef_sectors().is_ok());
    }

    #[test]
    fn bad_sidedef_sector() {
        let sectors = sector(0);
        let sides = sidedef(3);
        let map = DoomMapLumps::decode(&[
            (MapLump::SideDefs, sides.as_slice()),
            (MapLump::Sectors, sectors.as_slice()),
        ])
        .unwrap();
        assert_eq!(
            map.check_sidedef_sectors(),
            Err(LumpError::IndexOutOfRange { index: 3, len: 1 })
        );
    }
}
