//! Configuration loading for grids.
//!
//! Grid settings can be loaded from a TOML file; every section is optional
//! and falls back to its defaults.

use bevy_math::{UVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::geom::GridGeometry;
use crate::visualizer::EmptyCellPolicy;

/// Complete grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cells along x and y
    pub size: UVec2,
    /// World-space size of one cell
    pub cell_size: Vec2,
    /// World position of the lower corner of cell (0, 0)
    pub origin: Vec2,
    /// Text visualizer behavior
    pub visualizer: VisualizerConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: UVec2::new(8, 6),
            cell_size: Vec2::ONE,
            origin: Vec2::ZERO,
            visualizer: VisualizerConfig::default(),
        }
    }
}

impl GridConfig {
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

    /// Rejects sizes and geometry a world-space grid cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.x == 0 || self.size.y == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid size must be non-zero, got {}",
                self.size
            )));
        }
        if self.geometry().is_degenerate() {
            return Err(ConfigError::Invalid(format!(
                "cell size must be positive and finite, got {}",
                self.cell_size
            )));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "origin must be finite, got {}",
                self.origin
            )));
        }
        Ok(())
    }

    /// Cell size and origin as a [`GridGeometry`].
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.cell_size, self.origin)
    }
}

/// Behavior of the text-label visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// What happens to a label when its cell is emptied
    pub empty_cell: EmptyCellPolicy,
    /// Move existing labels when cell size or origin change
    pub reposition_labels: bool,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Error writing TOML config
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Parsed values that cannot describe a grid
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Grid Configuration

size = [8, 6]
cell_size = [1.0, 1.0]
origin = [0.0, 0.0]

[visualizer]
empty_cell = "remove"
reposition_labels = false
"#
    .to_string()
}
