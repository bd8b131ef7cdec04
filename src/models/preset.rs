// src/models/preset.rs
// the JSON-based preset data model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use std::fs;
use std::path::Path;

use std::error::Error;

use crate::models::settings::GridSettings;

#[derive(Debug, Serialize, Deserialize)]
pub struct PresetBook {
    pub presets: HashMap<String, GridSettings>,
}

impl PresetBook {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let book: PresetBook = serde_json::from_str(&content)?;
        Ok(book)
    }

    pub fn get(&self, name: &str) -> Option<&GridSettings> {
        self.presets.get(name)
    }

    /// Preset names in a stable order for number-key bindings.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::GridType;

    const BOOK: &str = r##"{
        "presets": {
            "blueprint": {
                "gridType": "square",
                "thickness": 3.0,
                "color": "#4aa3ff",
                "opacity": 45.0
            },
            "honeycomb": {
                "gridType": "hexagon",
                "thickness": 2.0,
                "color": "#ffb000",
                "opacity": 70.0
            }
        }
    }"##;

    #[test]
    fn test_parse_preset_book() {
        let book: PresetBook = serde_json::from_str(BOOK).unwrap();
        assert_eq!(book.presets.len(), 2);

        let honeycomb = book.get("honeycomb").unwrap();
        assert_eq!(honeycomb.grid_type, GridType::Hexagon);
        assert_eq!(honeycomb.opacity, 70.0);

        assert!(book.get("missing").is_none());
    }

    #[test]
    fn test_sorted_names() {
        let book: PresetBook = serde_json::from_str(BOOK).unwrap();
        assert_eq!(book.sorted_names(), vec!["blueprint", "honeycomb"]);
    }
}
