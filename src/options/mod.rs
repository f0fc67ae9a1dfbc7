//! Centralized runtime options with TOML preset support.
//!
//! Everything tweakable about the interaction core (dim strength,
//! highlight treatment, camera tween feel) is consolidated here. Options
//! serialize to/from TOML for view presets.

mod camera;
mod style;

use std::path::Path;

pub use camera::{CameraOptions, EasingKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::StyleOptions;

use crate::error::GravaError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Style rule parameters (dimming, highlighting).
    pub style: StyleOptions,
    /// Camera tween and fit parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GravaError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, GravaError> {
        toml::from_str(content)
            .map_err(|e| GravaError::OptionsParse(e.to_string()))
    }

    /// Serialize to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`GravaError::OptionsParse`] when serialization fails.
    pub fn to_toml_str(&self) -> Result<String, GravaError> {
        toml::to_string_pretty(self)
            .map_err(|e| GravaError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GravaError::Io`] when the file cannot be read and
    /// [`GravaError::OptionsParse`] on malformed TOML.
    pub fn load_preset(path: &Path) -> Result<Self, GravaError> {
        let content = std::fs::read_to_string(path).map_err(GravaError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GravaError::OptionsParse`] when serialization fails and
    /// [`GravaError::Io`] when the file cannot be written.
    pub fn save_preset(&self, path: &Path) -> Result<(), GravaError> {
        let content = self.to_toml_str()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GravaError::Io)?;
        }
        std::fs::write(path, content).map_err(GravaError::Io)
    }
}
