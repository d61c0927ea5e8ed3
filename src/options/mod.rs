//! Centralized rendering options with TOML preset support.
//!
//! All tweakable settings (colors, primitive geometry, scene furniture,
//! camera framing, viewer page) are consolidated here. Options serialize
//! to/from TOML so a preset file only needs the values it overrides.

mod camera;
mod colors;
mod display;
mod geometry;
mod viewer;

use std::path::Path;

pub use camera::{CameraOptions, DEFAULT_FIT_PADDING, DEFAULT_FOVY};
pub use colors::ColorOptions;
pub use display::DisplayOptions;
pub use geometry::GeometryOptions;
pub use viewer::ViewerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VseprError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[colors]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Color palette.
    pub colors: ColorOptions,
    /// Primitive sizes and sampling.
    pub geometry: GeometryOptions,
    /// Axes and central atom toggles.
    pub display: DisplayOptions,
    /// Camera framing parameters.
    pub camera: CameraOptions,
    /// Viewer page settings.
    pub viewer: ViewerOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VseprError> {
        let content = std::fs::read_to_string(path).map_err(VseprError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VseprError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VseprError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VseprError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VseprError::Io)?;
        }
        std::fs::write(path, content).map_err(VseprError::Io)
    }
}
