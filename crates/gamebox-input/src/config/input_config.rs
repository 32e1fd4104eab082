use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::input::Keymap;

const CONFIG_FILE: &str = "input.json";

/// Geometry and wording of the keyboard picker overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    /// Pointer-downs closer than this to the viewport top open the picker.
    pub threshold_px: f64,
    /// Prompt shown inside the visible picker.
    pub label: String,
    pub height_px: f64,
    /// Gap between the viewport edge and the picker.
    pub inset_px: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            threshold_px: 30.0,
            label: "Click/Tap here to enable the keyboard".to_string(),
            height_px: 30.0,
            inset_px: 5.0,
        }
    }
}

/// Complete input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct InputConfig {
    pub keymap: Keymap,
    pub picker: PickerConfig,
}

impl InputConfig {
    /// Loads config from the default config file.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    /// Saves config to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(CONFIG_FILE)
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.keymap.normalize();
    }
}
