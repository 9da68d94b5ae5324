//! Visualization layer: Bevy host for labeled grids.

pub mod config;
pub mod editor;
pub mod host;
pub mod labels;
pub mod plugin;

pub use config::VizConfig;
pub use host::{BevyLabelHost, GridLabel, LabelStyle};
pub use labels::{GridLabelPlugin, LabeledGrid};
pub use plugin::GridVizPlugin;
