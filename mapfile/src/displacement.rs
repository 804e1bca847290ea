use bsp::{
    ALLOWED_VERTS_WORDS, DispDescriptor, DispInfo, SourceDispVertices, VertexAttributes,
    side_length_for_power, verts_for_power,
};
use glam::Vec3;
use log::debug;
use wad::LumpError;

use crate::{DecompilerSettings, MapError};

const LOG_TAG: &str = "MapDisplacement";

/// A displacement surface rebuilt as square grids of per-vertex values.
///
/// Each grid is `side * side` with `side = 2^power + 1`, stored row-major:
/// `(row, col)` is at `row * side + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDisplacement {
    power: i32,
    side: usize,
    start: Vec3,
    normals: Vec<Vec3>,
    dists: Vec<f32>,
    alphas: Vec<f32>,
    allowed_verts: [u32; ALLOWED_VERTS_WORDS],
}

impl MapDisplacement {
    /// Build the grids from a descriptor and its flat run of vertices
    pub fn new<V: VertexAttributes>(
        info: &impl DispDescriptor,
        vertices: &[V],
    ) -> Result<MapDisplacement, MapError> {
        let power = info.power();
        let side = side_length_for_power(power)?;
        let expected = verts_for_power(power)?;
        if vertices.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                found: vertices.len(),
            });
        }

        Ok(MapDisplacement {
            power,
            side,
            start: info.start_position(),
            normals: vertices.iter().map(V::normal).collect(),
            dists: vertices.iter().map(V::dist).collect(),
            alphas: vertices.iter().map(V::alpha).collect(),
            allowed_verts: *info.allowed_verts(),
        })
    }

    /// Build the displacement described by `info` from the `DISP_VERTS` lump
    pub fn from_source(
        info: &DispInfo,
        vertices: &SourceDispVertices,
    ) -> Result<MapDisplacement, MapError> {
        let start = info.disp_vert_start();
        let first = usize::try_from(start).map_err(|_| LumpError::IndexOutOfRange {
            index: start as isize,
            len: vertices.len(),
        })?;
        debug!(
            target: LOG_TAG,
            "Face {} displacement of power {} from vertex {}",
            info.map_face(),
            info.power(),
            first
        );
        let verts = vertices.vertices_for(info, first)?;
        Self::new(info, &verts)
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn allowed_verts(&self) -> &[u32; ALLOWED_VERTS_WORDS] {
        &self.allowed_verts
    }

    /// Number of rows and columns in each grid
    pub fn side_length(&self) -> usize {
        self.side
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MapError> {
        if row >= self.side || col >= self.side {
            return Err(MapError::IndexOutOfRange {
                row,
                col,
                rows: self.side,
                cols: self.side,
            });
        }
        Ok(row * self.side + col)
    }

    pub fn normal(&self, row: usize, col: usize) -> Result<Vec3, MapError> {
        Ok(self.normals[self.index(row, col)?])
    }

    pub fn dist(&self, row: usize, col: usize) -> Result<f32, MapError> {
        Ok(self.dists[self.index(row, col)?])
    }

    pub fn alpha(&self, row: usize, col: usize) -> Result<f32, MapError> {
        Ok(self.alphas[self.index(row, col)?])
    }

    /// Write the Hammer `dispinfo` block for the side this displacement
    /// belongs to.
    ///
    /// This is always Hammer syntax. Only `precision` is read from
    /// `settings`, the caller picks this writer for [`MapFormat::Hammer`]
    /// output.
    ///
    /// [`MapFormat::Hammer`]: crate::MapFormat::Hammer
    pub fn to_vmf(&self, settings: &DecompilerSettings) -> String {
        let f = |v: f32| settings.format_float(v);

        let mut out = String::from("\t\tdispinfo\r\n\t\t{\r\n");
        out.push_str(&format!("\t\t\t\"power\" \"{}\"\r\n", self.power));
        out.push_str(&format!(
            "\t\t\t\"startposition\" \"[{} {} {}]\"\r\n",
            f(self.start.x),
            f(self.start.y),
            f(self.start.z),
        ));
        out.push_str("\t\t\t\"elevation\" \"0\"\r\n");
        out.push_str("\t\t\t\"subdiv\" \"0\"\r\n");

        self.write_rows(&mut out, "normals", |i| {
            let n = self.normals[i];
            format!("{} {} {}", f(n.x), f(n.y), f(n.z))
        });
        self.write_rows(&mut out, "distances", |i| f(self.dists[i]));
        self.write_rows(&mut out, "alphas", |i| f(self.alphas[i]));

        let words = self
            .allowed_verts
            .iter()
            .map(|w| (*w as i32).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str("\t\t\tallowed_verts\r\n\t\t\t{\r\n");
        out.push_str(&format!(
            "\t\t\t\t\"{}\" \"{}\"\r\n",
            ALLOWED_VERTS_WORDS, words
        ));
        out.push_str("\t\t\t}\r\n\t\t}\r\n");
        out
    }

    fn write_rows<F: Fn(usize) -> String>(&self, out: &mut String, name: &str, cell: F) {
        out.push_str(&format!("\t\t\t{name}\r\n\t\t\t{{\r\n"));
        for row in 0..self.side {
            let cells = (0..self.side)
                .map(|col| cell(row * self.side + col))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!("\t\t\t\t\"row{row}\" \"{cells}\"\r\n"));
        }
        out.push_str("\t\t\t}\r\n");
    }
}
