//! Decompiler options which change how map entities are written out.
//!
//! These are passed to every writer, there is no global state.

use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use nanoserde::{DeRon, SerRon};

use crate::MapError;

const LOG_TAG: &str = "DecompilerSettings";

/// The editor format the output map is written for
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum MapFormat {
    /// Quake 3 and most idTech 3 editors
    #[default]
    Quake3,
    GtkRadiant,
    /// Valve Hammer `.vmf`
    Hammer,
}

impl MapFormat {
    /// Hammer has no bezier patches
    pub fn supports_patches(&self) -> bool {
        !matches!(self, MapFormat::Hammer)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MapFormat::Quake3 | MapFormat::GtkRadiant => "map",
            MapFormat::Hammer => "vmf",
        }
    }
}

impl FromStr for MapFormat {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quake3" => Ok(Self::Quake3),
            "gtkradiant" => Ok(Self::GtkRadiant),
            "hammer" | "vmf" => Ok(Self::Hammer),
            _ => Err(MapError::Settings(format!("invalid map format: {s}"))),
        }
    }
}

impl fmt::Display for MapFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MapFormat::Quake3 => "quake3",
            MapFormat::GtkRadiant => "gtkradiant",
            MapFormat::Hammer => "hammer",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompilerSettings {
    /// Decimal places kept when writing coordinates
    pub precision: usize,
    /// How many lumps a caller may decode at once. Not used by the decoders
    /// themselves.
    pub num_threads: usize,
    /// Patches are refused for formats without them
    pub format: MapFormat,
}

impl Default for DecompilerSettings {
    fn default() -> Self {
        Self {
            precision: 6,
            num_threads: 1,
            format: MapFormat::default(),
        }
    }
}

/// On-disk form
#[derive(Debug, Clone, DeRon, SerRon)]
struct SettingsFile {
    precision: usize,
    num_threads: usize,
    format: String,
}

impl DecompilerSettings {
    /// Read settings from RON text
    pub fn from_ron(text: &str) -> Result<Self, MapError> {
        let file = SettingsFile::deserialize_ron(text)
            .map_err(|e| MapError::Settings(e.to_string()))?;

        if file.num_threads == 0 {
            warn!(target: LOG_TAG, "num_threads of 0, using 1");
        }
        let settings = Self {
            precision: file.precision,
            num_threads: file.num_threads.max(1),
            format: file.format.parse()?,
        };

        info!(target: LOG_TAG, "Loaded decompiler settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_ron(&self) -> String {
        SettingsFile {
            precision: self.precision,
            num_threads: self.num_threads,
            format: self.format.to_string(),
        }
        .serialize_ron()
    }

    /// Write `value` rounded to `precision` places, without trailing zeros
    pub fn format_float(&self, value: f32) -> String {
        format_float(value, self.precision)
    }
}

/// `1.500000` is written as `1.5`, `2.000` as `2` and `-0` as `0`
pub fn format_float(value: f32, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
