// src/config/types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::models::{GridSettings, GridType};

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub preset_file: String,
}

// Startup overlay style plus the container fractions. The overlay pane
// occupies width_fraction x height_fraction of the window.
#[derive(Debug, Deserialize)]
pub struct OverlayConfig {
    pub grid_type: GridType,
    pub thickness: f32,
    pub color: String,
    pub opacity: f32,
    pub width_fraction: f32,
    pub height_fraction: f32,
}

impl OverlayConfig {
    pub fn settings(&self) -> GridSettings {
        GridSettings {
            grid_type: self.grid_type,
            thickness: self.thickness,
            color: self.color.clone(),
            opacity: self.opacity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BackgroundConfig {
    pub color: String,
}
