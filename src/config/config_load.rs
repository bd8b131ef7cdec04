// src/config/config_load.rs
//
// loading config.toml

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::config_types::{
    BackgroundConfig, OscConfig, OverlayConfig, PathConfig, WindowConfig,
};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub osc: OscConfig,
    pub paths: PathConfig,
    pub overlay: OverlayConfig,
    pub background: BackgroundConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_preset_path(&self) -> PathBuf {
        if Path::new(&self.paths.preset_file).is_absolute() {
            PathBuf::from(&self.paths.preset_file)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            {
                let candidate = exe_dir.join(&self.paths.preset_file);
                if candidate.exists() {
                    return candidate;
                }
            }
            PathBuf::from(&self.paths.preset_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridType;

    const CONFIG: &str = r##"
        [window]
        width = 1280
        height = 720

        [osc]
        rx_port = 7400

        [paths]
        preset_file = "presets.json"

        [overlay]
        grid_type = "hexagon"
        thickness = 3.0
        color = "#e0e6f0"
        opacity = 60.0
        width_fraction = 0.7
        height_fraction = 0.8

        [background]
        color = "#101418"
    "##;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(CONFIG).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.osc.rx_port, 7400);
        assert_eq!(config.paths.preset_file, "presets.json");
        assert_eq!(config.overlay.width_fraction, 0.7);
        assert_eq!(config.background.color, "#101418");

        let settings = config.overlay.settings();
        assert_eq!(settings.grid_type, GridType::Hexagon);
        assert_eq!(settings.opacity, 60.0);
    }

    #[test]
    fn test_unknown_grid_type_fails_to_parse() {
        let broken = CONFIG.replace("\"hexagon\"", "\"triangle\"");
        assert!(toml::from_str::<Config>(&broken).is_err());
    }
}
