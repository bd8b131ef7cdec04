// src/models/settings.rs
//
// The overlay style settings. One GridSettings value describes the whole
// overlay; the host replaces fields at runtime via the OSC surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    Square,
    Hexagon,
}

impl GridType {
    pub fn toggled(self) -> Self {
        match self {
            GridType::Square => GridType::Hexagon,
            GridType::Hexagon => GridType::Square,
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridType::Square => write!(f, "square"),
            GridType::Hexagon => write!(f, "hexagon"),
        }
    }
}

// Unrecognized names are an error, not a silent hexagon fallback.
impl FromStr for GridType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(GridType::Square),
            "hexagon" => Ok(GridType::Hexagon),
            other => Err(format!("unrecognized grid type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    pub grid_type: GridType,
    pub thickness: f32,
    pub color: String,
    pub opacity: f32,
}
