use glam::Vec3;
use wad::record::{read_f32, read_i32, read_u16, read_u32, record_span};
use wad::{FixedRecord, LumpError, LumpRecord, RawRecord, fixed_record};

/// Number of `u32` words in the allowed-vertex bitfield
pub const ALLOWED_VERTS_WORDS: usize = 10;

/// What a displacement grid needs to know about the surface it belongs to
pub trait DispDescriptor {
    fn power(&self) -> i32;
    /// Corner of the base face the grid starts from
    fn start_position(&self) -> Vec3;
    /// Bitfield of the vertices which may be tesselated
    fn allowed_verts(&self) -> &[u32; ALLOWED_VERTS_WORDS];
}

/// A record of the `DISPINFO` lump (lump 26)
///
/// | Field Size | Data Type | Content                                  |
/// |------------|-----------|------------------------------------------|
/// | 0x00-0x0B  |  3 x f32  | Start position                           |
/// | 0x0C-0x0F  |    i32    | Index of the first vertex in DISP_VERTS  |
/// | 0x10-0x13  |    i32    | Index of the first triangle in DISP_TRIS |
/// | 0x14-0x17  |    i32    | Power: 2, 3 or 4                         |
/// | 0x18-0x1B  |    i32    | Minimum tesselation                      |
/// | 0x1C-0x1F  |    f32    | Lighting smoothing angle                 |
/// | 0x20-0x23  |    i32    | Surface contents                         |
/// | 0x24-0x25  |    u16    | Face this displacement replaces          |
/// | 0x28-0x2B  |    i32    | Index in to the lightmap alpha lump      |
/// | 0x2C-0x2F  |    i32    | Index in to the lightmap sample lump     |
/// | 0x30-0x87  |  88 bytes | Edge and corner neighbours               |
/// | 0x88-0xAF  |  10 x u32 | Allowed vertices                         |
///
/// Each record is 176 bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DispInfo {
    raw: RawRecord,
    start_position: Vec3,
    disp_vert_start: i32,
    disp_tri_start: i32,
    power: i32,
    min_tess: i32,
    smoothing_angle: f32,
    contents: i32,
    map_face: u16,
    lightmap_alpha_start: i32,
    lightmap_sample_position_start: i32,
    allowed_verts: [u32; ALLOWED_VERTS_WORDS],
}

const NEIGHBOURS_START: usize = 0x30;
const ALLOWED_VERTS_START: usize = 0x88;

impl DispInfo {
    /// A descriptor which wasn't read from a lump
    pub fn new(power: i32, start_position: Vec3, disp_vert_start: i32) -> DispInfo {
        DispInfo {
            raw: RawRecord::new(),
            start_position,
            disp_vert_start,
            disp_tri_start: 0,
            power,
            min_tess: 0,
            smoothing_angle: 0.0,
            contents: 0,
            map_face: 0,
            lightmap_alpha_start: 0,
            lightmap_sample_position_start: 0,
            allowed_verts: [u32::MAX; ALLOWED_VERTS_WORDS],
        }
    }

    /// The neighbour tables, left undecoded. Empty if the record was not
    /// read from a lump.
    pub fn neighbours(&self) -> &[u8] {
        self.raw
            .data()
            .get(NEIGHBOURS_START..ALLOWED_VERTS_START)
            .unwrap_or(&[])
    }

    pub fn set_start_position(&mut self, start_position: Vec3) {
        self.start_position = start_position;
    }

    /// Index of the first vertex of this surface in `DISP_VERTS`
    pub fn disp_vert_start(&self) -> i32 {
        self.disp_vert_start
    }

    pub fn set_disp_vert_start(&mut self, disp_vert_start: i32) {
        self.disp_vert_start = disp_vert_start;
    }

    pub fn disp_tri_start(&self) -> i32 {
        self.disp_tri_start
    }

    pub fn set_disp_tri_start(&mut self, disp_tri_start: i32) {
        self.disp_tri_start = disp_tri_start;
    }

    pub fn set_power(&mut self, power: i32) {
        self.power = power;
    }

    pub fn min_tess(&self) -> i32 {
        self.min_tess
    }

    pub fn set_min_tess(&mut self, min_tess: i32) {
        self.min_tess = min_tess;
    }

    pub fn smoothing_angle(&self) -> f32 {
        self.smoothing_angle
    }

    pub fn set_smoothing_angle(&mut self, smoothing_angle: f32) {
        self.smoothing_angle = smoothing_angle;
    }

    pub fn contents(&self) -> i32 {
        self.contents
    }

    pub fn set_contents(&mut self, contents: i32) {
        self.contents = contents;
    }

    /// The face this displacement replaces
    pub fn map_face(&self) -> u16 {
        self.map_face
    }

    pub fn set_map_face(&mut self, map_face: u16) {
        self.map_face = map_face;
    }

    pub fn lightmap_alpha_start(&self) -> i32 {
        self.lightmap_alpha_start
    }

    pub fn set_lightmap_alpha_start(&mut self, lightmap_alpha_start: i32) {
        self.lightmap_alpha_start = lightmap_alpha_start;
    }

    pub fn lightmap_sample_position_start(&self) -> i32 {
        self.lightmap_sample_position_start
    }

    pub fn set_lightmap_sample_position_start(&mut self, start: i32) {
        self.lightmap_sample_position_start = start;
    }

    pub fn set_allowed_verts(&mut self, allowed_verts: [u32; ALLOWED_VERTS_WORDS]) {
        self.allowed_verts = allowed_verts;
    }
}
fixed_record!(DispInfo);

impl LumpRecord for DispInfo {
    const RECORD_SIZE: usize = 176;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;

        let mut allowed_verts = [0u32; ALLOWED_VERTS_WORDS];
        for (i, word) in allowed_verts.iter_mut().enumerate() {
            *word = read_u32(b, ALLOWED_VERTS_START + i * 4);
        }

        Ok(DispInfo {
            raw: RawRecord::from_bytes(b),
            start_position: Vec3::new(read_f32(b, 0), read_f32(b, 4), read_f32(b, 8)),
            disp_vert_start: read_i32(b, 12),
            disp_tri_start: read_i32(b, 16),
            power: read_i32(b, 20),
            min_tess: read_i32(b, 24),
            smoothing_angle: read_f32(b, 28),
            contents: read_i32(b, 32),
            map_face: read_u16(b, 36),
            lightmap_alpha_start: read_i32(b, 40),
            lightmap_sample_position_start: read_i32(b, 44),
            allowed_verts,
        })
    }
}

impl DispDescriptor for DispInfo {
    fn power(&self) -> i32 {
        self.power
    }

    fn start_position(&self) -> Vec3 {
        self.start_position
    }

    fn allowed_verts(&self) -> &[u32; ALLOWED_VERTS_WORDS] {
        &self.allowed_verts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_bytes() -> Vec<u8> {
        let mut b = vec![0u8; 176];
        b[0..4].copy_from_slice(&(-64.0f32).to_le_bytes());
        b[4..8].copy_from_slice(&128.0f32.to_le_bytes());
        b[8..12].copy_from_slice(&8.0f32.to_le_bytes());
        b[12..16].copy_from_slice(&81i32.to_le_bytes());
        b[16..20].copy_from_slice(&128i32.to_le_bytes());
        b[20..24].copy_from_slice(&3i32.to_le_bytes());
        b[28..32].copy_from_slice(&45.0f32.to_le_bytes());
        b[32..36].copy_from_slice(&1i32.to_le_bytes());
        b[36..38].copy_from_slice(&412u16.to_le_bytes());
        b[48] = 0xAB;
        for i in 0..ALLOWED_VERTS_WORDS {
            let at = ALLOWED_VERTS_START + i * 4;
            b[at..at + 4].copy_from_slice(&(i as u32 * 3).to_le_bytes());
        }
        b
    }

    #[test]
    fn decode_dispinfo() {
        let info = DispInfo::decode(&info_bytes()).unwrap();
        assert_eq!(info.start_position(), Vec3::new(-64.0, 128.0, 8.0));
        assert_eq!(info.disp_vert_start(), 81);
        assert_eq!(info.disp_tri_start(), 128);
        assert_eq!(info.power(), 3);
        assert_eq!(info.smoothing_angle(), 45.0);
        assert_eq!(info.contents(), 1);
        assert_eq!(info.map_face(), 412);
        assert_eq!(info.allowed_verts()[0], 0);
        assert_eq!(info.allowed_verts()[9], 27);
        assert_eq!(info.neighbours().len(), 88);
        assert_eq!(info.neighbours()[0], 0xAB);
    }

    #[test]
    fn truncated_dispinfo() {
        let bytes = info_bytes();
        assert!(matches!(
            DispInfo::decode(&bytes[..100]),
            Err(LumpError::TruncatedRecord {
                expected: 176,
                found: 100
            })
        ));
    }

    #[test]
    fn built_dispinfo() {
        let info = DispInfo::new(2, Vec3::ONE, 0);
        assert_eq!(info.power(), 2);
        assert!(info.neighbours().is_empty());
        assert_eq!(info.allowed_verts(), &[u32::MAX; ALLOWED_VERTS_WORDS]);
    }

    #[test]
    fn setters_leave_bytes_alone() {
        let bytes = info_bytes();
        let mut info = DispInfo::decode(&bytes).unwrap();
        info.set_power(4);
        info.set_disp_vert_start(-1);
        info.set_map_face(7);
        info.set_allowed_verts([1; ALLOWED_VERTS_WORDS]);
        assert_eq!(info.power(), 4);
        assert_eq!(info.disp_vert_start(), -1);
        assert_eq!(info.map_face(), 7);
        assert_eq!(info.allowed_verts()[9], 1);
        assert_eq!(info.data(), &bytes[..]);

        let lump = DispInfo::create_lump(&[bytes.as_slice(), &bytes[..10]].concat()).unwrap();
        assert_eq!(lump.len(), 1);
        assert_eq!(lump[0].contents(), 1);
    }
}
