//! Typed 2D grid with world-space mapping and pluggable visualization.
//!
//! A [`Grid`] owns a fixed-size [`CellArray`] of optional values and a
//! [`GridGeometry`] that maps between world positions and cell indices.
//! Rendering is delegated to a [`GridVisualizer`], which talks to the host
//! engine through the [`SceneHost`] / [`LabelHost`] capabilities. The default
//! [`TextLabelVisualizer`] draws each occupied cell as a text label.
//!
//! # Modules
//!
//! - [`cells`]: the dense 2D array backing a grid
//! - [`geom`]: world/grid coordinate conversion
//! - [`grid`]: the grid container
//! - [`visualizer`]: visualizer capability and the text-label implementation
//! - [`config`]: TOML configuration
//! - [`error`]: error types

pub mod cells;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod visualizer;

pub use bevy_math::{IVec2, UVec2, Vec2};

pub use cells::CellArray;
pub use config::{default_config_toml, ConfigError, GridConfig, VisualizerConfig};
pub use error::GridError;
pub use geom::GridGeometry;
pub use grid::{Grid, LabelGrid};
pub use visualizer::{
    EmptyCellPolicy, GridVisualizer, LabelHost, SceneHost, TextLabelVisualizer,
};
