//! Record decoders for the Doom map lumps, in WAD order:
//!  - [X] Thing
//!  - [X] LineDef
//!  - [X] SideDef
//!  - [X] Vertex
//!  - [X] Segment   (SEGS)
//!  - [X] SubSector (SSECTORS)
//!  - [ ] Node
//!  - [X] Sector
//!
//! Every record keeps the bytes it was decoded from. Setters only change the
//! decoded fields.

use crate::record::{
    LumpRecord, RawRecord, read_i16, read_name_terminated, read_name_verbatim, read_u16,
    record_span,
};
use crate::{Lump, LumpError};

/// Length of a texture or flat name in a map lump
pub const NAME_LENGTH: usize = 8;

/// Sidedef or linedef index used to mark "no side"
pub const NO_SIDEDEF: u16 = 0xFFFF;

/// Implement [`FixedRecord`](crate::record::FixedRecord) and a `create_lump`
/// constructor for a record type which keeps its bytes in a `raw: RawRecord`
/// field and implements [`LumpRecord`].
#[macro_export]
macro_rules! fixed_record {
    ($name:ident) => {
        impl $crate::record::FixedRecord for $name {
            fn data(&self) -> &[u8] {
                $crate::record::FixedRecord::data(&self.raw)
            }
        }

        impl $name {
            /// Decode a whole lump of these records
            pub fn create_lump(data: &[u8]) -> Result<$crate::Lump<$name>, $crate::LumpError> {
                $crate::Lump::from_bytes(data)
            }
        }
    };
}

/// A `Thing` describes only the position, type, and angle + spawn flags
///
/// The data in the WAD lump is structured as follows:
///
/// | Field Size | Data Type | Content    |
/// |------------|-----------|------------|
/// |  0x00-0x01 |    i16    | X Position |
/// |  0x02-0x03 |    i16    | Y Position |
/// |  0x04-0x05 |    i16    | Angle      |
/// |  0x06-0x07 |    i16    | Type       |
/// |  0x08-0x09 |    i16    | Flags      |
///
/// Each `Thing` record is 10 bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DThing {
    raw: RawRecord,
    x: i16,
    y: i16,
    angle: i16,
    kind: i16,
    flags: i16,
}

impl LumpRecord for DThing {
    const RECORD_SIZE: usize = 10;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DThing {
            raw: RawRecord::from_bytes(b),
            x: read_i16(b, 0),
            y: read_i16(b, 2),
            angle: read_i16(b, 4),
            kind: read_i16(b, 6),
            flags: read_i16(b, 8),
        })
    }
}
fixed_record!(DThing);

impl DThing {
    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn set_x(&mut self, x: i16) {
        self.x = x;
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn set_y(&mut self, y: i16) {
        self.y = y;
    }

    pub fn angle(&self) -> i16 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: i16) {
        self.angle = angle;
    }

    pub fn kind(&self) -> i16 {
        self.kind
    }

    pub fn set_kind(&mut self, kind: i16) {
        self.kind = kind;
    }

    pub fn flags(&self) -> i16 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: i16) {
        self.flags = flags;
    }
}

/// A `Vertex` is the basic struct used for any type of coordinate
/// in the map
///
/// | Field Size | Data Type | Content      |
/// |------------|-----------|--------------|
/// |  0x00-0x01 |    i16    | X Coordinate |
/// |  0x02-0x03 |    i16    | Y Coordinate |
#[derive(Debug, Clone, PartialEq)]
pub struct DVertex {
    raw: RawRecord,
    x: i16,
    y: i16,
}

impl LumpRecord for DVertex {
    const RECORD_SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DVertex {
            raw: RawRecord::from_bytes(b),
            x: read_i16(b, 0),
            y: read_i16(b, 2),
        })
    }
}
fixed_record!(DVertex);

impl DVertex {
    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn set_x(&mut self, x: i16) {
        self.x = x;
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn set_y(&mut self, y: i16) {
        self.y = y;
    }
}

/// Each linedef represents a line from one of the VERTEXES to another.
///
///| Field Size | Data Type      | Content                                   |
///|------------|----------------|-------------------------------------------|
///|  0x00-0x01 | Unsigned short | Start vertex                              |
///|  0x02-0x03 | Unsigned short | End vertex                                |
///|  0x04-0x05 | Unsigned short | Flags                                     |
///|  0x06-0x07 | Unsigned short | Line type / Action                        |
///|  0x08-0x09 | Unsigned short | Sector tag                                |
///|  0x0A-0x0B | Unsigned short | Front sidedef ( 0xFFFF side not present ) |
///|  0x0C-0x0D | Unsigned short | Back sidedef  ( 0xFFFF side not present ) |
///
/// Each linedef's record is 14 bytes, and is made up of 7 16-bit
/// fields
#[derive(Debug, Clone, PartialEq)]
pub struct DLinedef {
    raw: RawRecord,
    start_vertex: u16,
    end_vertex: u16,
    flags: u16,
    special: u16,
    sector_tag: u16,
    front_sidedef: u16,
    back_sidedef: u16,
}

impl LumpRecord for DLinedef {
    const RECORD_SIZE: usize = 14;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DLinedef {
            raw: RawRecord::from_bytes(b),
            start_vertex: read_u16(b, 0),
            end_vertex: read_u16(b, 2),
            flags: read_u16(b, 4),
            special: read_u16(b, 6),
            sector_tag: read_u16(b, 8),
            front_sidedef: read_u16(b, 10),
            back_sidedef: read_u16(b, 12),
        })
    }
}
fixed_record!(DLinedef);

impl DLinedef {
    pub fn start_vertex(&self) -> u16 {
        self.start_vertex
    }

    pub fn set_start_vertex(&mut self, v: u16) {
        self.start_vertex = v;
    }

    pub fn end_vertex(&self) -> u16 {
        self.end_vertex
    }

    pub fn set_end_vertex(&mut self, v: u16) {
        self.end_vertex = v;
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u16) {
        self.flags = flags;
    }

    pub fn special(&self) -> u16 {
        self.special
    }

    pub fn set_special(&mut self, special: u16) {
        self.special = special;
    }

    pub fn sector_tag(&self) -> u16 {
        self.sector_tag
    }

    pub fn set_sector_tag(&mut self, tag: u16) {
        self.sector_tag = tag;
    }

    /// A linedef always has at least the front (right) side
    pub fn front_sidedef(&self) -> u16 {
        self.front_sidedef
    }

    pub fn set_front_sidedef(&mut self, side: u16) {
        self.front_sidedef = side;
    }

    /// `None` if the line is one-sided
    pub fn back_sidedef(&self) -> Option<u16> {
        (self.back_sidedef != NO_SIDEDEF).then_some(self.back_sidedef)
    }

    pub fn set_back_sidedef(&mut self, side: Option<u16>) {
        self.back_sidedef = side.unwrap_or(NO_SIDEDEF);
    }
}

/// The Segments (SEGS) are in a sequential order determined by the `SubSector`
/// (SSECTOR), which are part of the NODES recursive tree
///
/// | Field Size | Data Type | Content                              |
/// |------------|-----------|--------------------------------------|
/// |  0x00-0x01 |    u16    | Index to vertex the line starts from |
/// |  0x02-0x03 |    u16    | Index to vertex the line ends with   |
/// |  0x04-0x05 |    i16    | Angle in Binary Angle Measurement (BAMS) |
/// |  0x06-0x07 |    u16    | Index to the linedef this seg travels along|
/// |  0x08-0x09 |    i16    | Direction along line. 0 == SEG is on the right and follows the line, 1 == SEG travels in opposite direction |
/// |  0x0A-0x0B |    i16    | Offset: this is the distance along the linedef this seg starts at |
///
/// Each `Segment` record is 12 bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DSeg {
    raw: RawRecord,
    start_vertex: u16,
    end_vertex: u16,
    angle: i16,
    linedef: u16,
    direction: i16,
    offset: i16,
}

impl LumpRecord for DSeg {
    const RECORD_SIZE: usize = 12;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DSeg {
            raw: RawRecord::from_bytes(b),
            start_vertex: read_u16(b, 0),
            end_vertex: read_u16(b, 2),
            angle: read_i16(b, 4),
            linedef: read_u16(b, 6),
            direction: read_i16(b, 8),
            offset: read_i16(b, 10),
        })
    }
}
fixed_record!(DSeg);

impl DSeg {
    pub fn start_vertex(&self) -> u16 {
        self.start_vertex
    }

    pub fn set_start_vertex(&mut self, v: u16) {
        self.start_vertex = v;
    }

    pub fn end_vertex(&self) -> u16 {
        self.end_vertex
    }

    pub fn set_end_vertex(&mut self, v: u16) {
        self.end_vertex = v;
    }

    /// Binary Angle Measurement
    ///
    /// Degrees(0-360) = angle * 0.005493164
    pub fn angle(&self) -> i16 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: i16) {
        self.angle = angle;
    }

    pub fn linedef(&self) -> u16 {
        self.linedef
    }

    pub fn set_linedef(&mut self, linedef: u16) {
        self.linedef = linedef;
    }

    /// The `side`, 0 = front/right, 1 = back/left
    pub fn direction(&self) -> i16 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: i16) {
        self.direction = direction;
    }

    pub fn offset(&self) -> i16 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: i16) {
        self.offset = offset;
    }
}

/// A `SubSector` divides up all the SECTORS into convex polygons.
///
/// | Field Size | Data Type | Content                            |
/// |------------|-----------|------------------------------------|
/// |  0x00-0x01 |    u16    | How many segments line this sector |
/// |  0x02-0x03 |    u16    | Index to the starting segment      |
#[derive(Debug, Clone, PartialEq)]
pub struct DSubSector {
    raw: RawRecord,
    seg_count: u16,
    start_seg: u16,
}

impl LumpRecord for DSubSector {
    const RECORD_SIZE: usize = 4;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DSubSector {
            raw: RawRecord::from_bytes(b),
            seg_count: read_u16(b, 0),
            start_seg: read_u16(b, 2),
        })
    }
}
fixed_record!(DSubSector);

impl DSubSector {
    pub fn seg_count(&self) -> u16 {
        self.seg_count
    }

    pub fn set_seg_count(&mut self, count: u16) {
        self.seg_count = count;
    }

    pub fn start_seg(&self) -> u16 {
        self.start_seg
    }

    pub fn set_start_seg(&mut self, seg: u16) {
        self.start_seg = seg;
    }
}

/// A `Sector` is a horizontal (east-west and north-south) area of the map
/// where a floor height and ceiling height is defined.
///
/// | Field Size | Data Type | Content                 |
/// |------------|-----------|-------------------------|
/// |  0x00-0x01 |    i16    | Floor height            |
/// |  0x02-0x03 |    i16    | Ceiling height          |
/// |  0x04-0x0B |  8 ASCII  | Floor flat name         |
/// |  0x0C-0x13 |  8 ASCII  | Ceiling flat name       |
/// |  0x14-0x15 |    i16    | Light level             |
/// |  0x16-0x17 |    i16    | Special type            |
/// |  0x18-0x19 |    i16    | Tag                     |
///
/// The flat names are read as all 8 bytes, trailing NUL bytes included.
///
/// Each `Sector` record is 26 bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DSector {
    raw: RawRecord,
    floor_height: i16,
    ceil_height: i16,
    floor_tex: String,
    ceil_tex: String,
    light_level: i16,
    kind: i16,
    tag: i16,
}

impl LumpRecord for DSector {
    const RECORD_SIZE: usize = 26;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DSector {
            raw: RawRecord::from_bytes(b),
            floor_height: read_i16(b, 0),
            ceil_height: read_i16(b, 2),
            floor_tex: read_name_verbatim(&b[4..12]),
            ceil_tex: read_name_verbatim(&b[12..20]),
            light_level: read_i16(b, 20),
            kind: read_i16(b, 22),
            tag: read_i16(b, 24),
        })
    }
}
fixed_record!(DSector);

impl DSector {
    pub fn floor_height(&self) -> i16 {
        self.floor_height
    }

    pub fn set_floor_height(&mut self, height: i16) {
        self.floor_height = height;
    }

    pub fn ceil_height(&self) -> i16 {
        self.ceil_height
    }

    pub fn set_ceil_height(&mut self, height: i16) {
        self.ceil_height = height;
    }

    pub fn floor_tex(&self) -> &str {
        &self.floor_tex
    }

    pub fn set_floor_tex(&mut self, name: impl Into<String>) {
        self.floor_tex = name.into();
    }

    pub fn ceil_tex(&self) -> &str {
        &self.ceil_tex
    }

    pub fn set_ceil_tex(&mut self, name: impl Into<String>) {
        self.ceil_tex = name.into();
    }

    /// Light level from 0-255. There are actually only 32 brightnesses
    /// possible so blocks of 8 are the same bright
    pub fn light_level(&self) -> i16 {
        self.light_level
    }

    pub fn set_light_level(&mut self, level: i16) {
        self.light_level = level;
    }

    /// This determines some area-effects called special sectors
    pub fn kind(&self) -> i16 {
        self.kind
    }

    pub fn set_kind(&mut self, kind: i16) {
        self.kind = kind;
    }

    /// A "tag" number corresponding to LINEDEF(s) with the same tag number
    pub fn tag(&self) -> i16 {
        self.tag
    }

    pub fn set_tag(&mut self, tag: i16) {
        self.tag = tag;
    }
}

/// Which of the three wall textures of a sidedef
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideTexture {
    /// Used for example in the upper of a window
    Upper = 0,
    /// Used for example in the front of a step
    Lower = 1,
    /// The regular part of a wall
    Middle = 2,
}

/// A sidedef is a definition of what wall texture(s) to draw along a
/// `LineDef`, and a group of sidedefs outline the space of a `Sector`
///
/// | Field Size | Data Type | Content                 |
/// |------------|-----------|-------------------------|
/// |  0x00-0x01 |    i16    | X offset                |
/// |  0x02-0x03 |    i16    | Y offset                |
/// |  0x04-0x0B |  8 ASCII  | Upper texture name      |
/// |  0x0C-0x13 |  8 ASCII  | Lower texture name      |
/// |  0x14-0x1B |  8 ASCII  | Middle texture name     |
/// |  0x1C-0x1D |    i16    | Sector number this faces|
///
/// Texture names end at the first NUL byte.
///
/// Each `SideDef` record is 30 bytes
#[derive(Debug, Clone, PartialEq)]
pub struct DSidedef {
    raw: RawRecord,
    x_offset: i16,
    y_offset: i16,
    textures: [String; 3],
    sector: i16,
}

impl LumpRecord for DSidedef {
    const RECORD_SIZE: usize = 30;

    fn decode(bytes: &[u8]) -> Result<Self, LumpError> {
        let b = record_span(bytes, Self::RECORD_SIZE)?;
        Ok(DSidedef {
            raw: RawRecord::from_bytes(b),
            x_offset: read_i16(b, 0),
            y_offset: read_i16(b, 2),
            textures: [
                read_name_terminated(&b[4..12]),
                read_name_terminated(&b[12..20]),
                read_name_terminated(&b[20..28]),
            ],
            sector: read_i16(b, 28),
        })
    }
}
fixed_record!(DSidedef);

impl DSidedef {
    pub fn x_offset(&self) -> i16 {
        self.x_offset
    }

    pub fn set_x_offset(&mut self, offset: i16) {
        self.x_offset = offset;
    }

    pub fn y_offset(&self) -> i16 {
        self.y_offset
    }

    pub fn set_y_offset(&mut self, offset: i16) {
        self.y_offset = offset;
    }

    pub fn texture(&self, which: SideTexture) -> &str {
        &self.textures[which as usize]
    }

    pub fn set_texture(&mut self, which: SideTexture, name: impl Into<String>) {
        self.textures[which as usize] = name.into();
    }

    pub fn upper_tex(&self) -> &str {
        self.texture(SideTexture::Upper)
    }

    pub fn lower_tex(&self) -> &str {
        self.texture(SideTexture::Lower)
    }

    pub fn middle_tex(&self) -> &str {
        self.texture(SideTexture::Middle)
    }

    /// Index in to the SECTORS lump
    pub fn sector(&self) -> i16 {
        self.sector
    }

    pub fn set_sector(&mut self, sector: i16) {
        self.sector = sector;
    }

    /// Look up the sector this side faces
    pub fn sector_in<'a>(&self, sectors: &'a Lump<DSector>) -> Result<&'a DSector, LumpError> {
        sectors.try_get(self.sector as isize)
    }
}
