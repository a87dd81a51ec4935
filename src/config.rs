//! Application configuration: canvas size plus pattern constants
//!
//! Stored as pretty-printed JSON. Missing fields fall back to the reference
//! 800x800 layout.

use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Error;
use crate::pattern::{Mandala, PatternConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub pattern: PatternConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Config {
    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load config from a JSON file
    ///
    /// Only parses; call [`Config::validate`] or [`Config::mandala`] to check
    /// the values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.mandala().map(|_| ())
    }

    /// Build the validated composer for this config
    pub fn mandala(&self) -> Result<Mandala, Error> {
        Mandala::new(self.canvas.width, self.canvas.height, self.pattern.clone())
    }
}
