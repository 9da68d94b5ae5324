//! Configuration for the grid viewer.
//!
//! Loaded from a TOML file; command-line flags override individual values.

use bevy::prelude::*;
use grid_core::{ConfigError, GridConfig, UVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::host::LabelStyle;

/// Complete viewer configuration.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Grid size and placement
    pub grid: GridConfig,
    /// Label appearance
    pub labels: LabelStyle,
    /// Window settings
    pub window: WindowConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        let size = UVec2::new(8, 6);
        let cell_size = Vec2::splat(64.0);
        Self {
            grid: GridConfig {
                size,
                cell_size,
                // Centered on the world origin
                origin: -size.as_vec2() * cell_size / 2.0,
                ..GridConfig::default()
            },
            labels: LabelStyle::default(),
            window: WindowConfig::default(),
        }
    }
}

impl VizConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if !(self.labels.font_size > 0.0 && self.labels.scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "label font size and scale must be positive, got {} and {}",
                self.labels.font_size, self.labels.scale
            )));
        }
        Ok(())
    }
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Labeled Grid".into(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Grid Viewer Configuration

[grid]
size = [8, 6]
cell_size = [64.0, 64.0]
origin = [-256.0, -192.0]

[grid.visualizer]
empty_cell = "remove"
reposition_labels = false

[labels]
font_size = 40.0
color = [1.0, 1.0, 1.0, 1.0]
scale = 0.5
z = 1.0

[window]
title = "Labeled Grid"
width = 1280.0
height = 720.0
"#
    .to_string()
}
