//! Centralized touch and camera options with TOML preset support.
//!
//! Options serialize to/from TOML so a tuned feel can be saved as a preset
//! and loaded by the viewer.

mod camera;
mod touch;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use touch::TouchOptions;

use crate::error::TouchCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[touch]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Touch sensitivity.
    pub touch: TouchOptions,
    /// Base camera projection and motion.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, TouchCamError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| TouchCamError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TouchCamError> {
        let content = std::fs::read_to_string(path).map_err(TouchCamError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TouchCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TouchCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TouchCamError::Io)?;
        }
        std::fs::write(path, content).map_err(TouchCamError::Io)
    }

    /// Reject values the touch controller cannot divide by.
    pub fn validate(&self) -> Result<(), TouchCamError> {
        match self.touch.invalid_field() {
            Some(field) => Err(TouchCamError::InvalidOption(format!(
                "touch.{field} must be a positive finite number"
            ))),
            None => Ok(()),
        }
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
