//! Visualizer capability and the default text-label implementation.
//!
//! A visualizer never holds a reference back to the grid it draws. It is
//! handed a snapshot (cell array, parent scope, cell size, origin) on every
//! render call and talks to the engine through a host capability:
//!
//! - [`SceneHost`] names the engine's handle type for "where to attach".
//! - [`LabelHost`] adds the primitive the text visualizer needs: create,
//!   retext, move and remove a positioned, parented text label.

use std::fmt;

use bevy_math::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::cells::CellArray;
use crate::config::VisualizerConfig;
use crate::geom::GridGeometry;

/// An engine that visual output can be attached to.
pub trait SceneHost {
    /// Opaque handle of the parent that visuals are attached under.
    type Scope: Copy;
}

/// An engine that can display floating text labels.
pub trait LabelHost: SceneHost {
    /// Handle of a created label.
    type Label: Copy;

    /// Create a label showing `text` at `position`, local to `parent` when
    /// given and in world space otherwise.
    fn create_label(&mut self, text: &str, parent: Option<Self::Scope>, position: Vec2)
        -> Self::Label;

    /// Replace the text of an existing label.
    fn set_label_text(&mut self, label: Self::Label, text: &str);

    /// Move an existing label.
    fn set_label_position(&mut self, label: Self::Label, position: Vec2);

    /// Destroy a label.
    fn remove_label(&mut self, label: Self::Label);
}

/// Turns a snapshot of grid contents into a visual representation.
pub trait GridVisualizer<T, H: SceneHost + ?Sized> {
    /// Produce or update visuals for `cells`, placed with `cell_size` and
    /// `origin` and attached under `parent`.
    fn visualize(
        &mut self,
        host: &mut H,
        cells: &CellArray<T>,
        parent: Option<H::Scope>,
        cell_size: Vec2,
        origin: Vec2,
    );
}

/// What the text visualizer does with a label whose cell became empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCellPolicy {
    /// Remove the label and forget it.
    #[default]
    Remove,
    /// Leave the label showing its last text.
    Retain,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PlacedLabel<L> {
    handle: L,
    position: Vec2,
}

fn display_text<T: fmt::Display>(value: &T) -> String {
    value.to_string()
}

/// Renders each occupied cell as a text label at the cell's center.
///
/// Label handles are cached per cell, so repeated renders only update text.
/// The cache is sized from the first array it sees.
pub struct TextLabelVisualizer<T, L> {
    labels: Option<CellArray<PlacedLabel<L>>>,
    format: fn(&T) -> String,
    config: VisualizerConfig,
}

impl<T: fmt::Display, L> Default for TextLabelVisualizer<T, L> {
    fn default() -> Self {
        Self::with_formatter(display_text::<T>)
    }
}

impl<T, L> fmt::Debug for TextLabelVisualizer<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextLabelVisualizer")
            .field("label_count", &self.label_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T, L> TextLabelVisualizer<T, L> {
    /// Create a visualizer that renders values with `format`.
    pub fn with_formatter(format: fn(&T) -> String) -> Self {
        Self {
            labels: None,
            format,
            config: VisualizerConfig::default(),
        }
    }

    /// Replace the behavior settings.
    pub fn with_config(mut self, config: VisualizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Number of labels currently alive.
    pub fn label_count(&self) -> usize {
        self.labels.as_ref().map_or(0, CellArray::occupied_count)
    }
}

impl<T, L: Copy> TextLabelVisualizer<T, L> {
    /// The label drawn for `position`, if any.
    pub fn label_at(&self, position: IVec2) -> Option<L> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(position))
            .map(|label| label.handle)
    }

    /// Remove every label and drop the cache.
    pub fn reset<H>(&mut self, host: &mut H)
    where
        H: LabelHost<Label = L> + ?Sized,
    {
        if let Some(labels) = self.labels.take() {
            for (_, label) in labels.iter() {
                if let Some(label) = label {
                    host.remove_label(label.handle);
                }
            }
        }
    }
}

impl<T, L, H> GridVisualizer<T, H> for TextLabelVisualizer<T, L>
where
    L: Copy,
    H: LabelHost<Label = L> + ?Sized,
{
    fn visualize(
        &mut self,
        host: &mut H,
        cells: &CellArray<T>,
        parent: Option<H::Scope>,
        cell_size: Vec2,
        origin: Vec2,
    ) {
        let size = cells.size();
        if self.labels.as_ref().is_some_and(|labels| labels.size() != size) {
            tracing::warn!(
                "Label cache sized {:?} does not match cells sized {:?}, rebuilding",
                self.labels.as_ref().map(CellArray::size),
                size
            );
            self.reset(host);
        }

        let geometry = GridGeometry::new(cell_size, origin);
        let format = self.format;
        let config = self.config;
        let labels = self.labels.get_or_insert_with(|| CellArray::new(size));

        for (position, value) in cells.iter() {
            let Some(slot) = labels.slot_mut(position) else {
                continue;
            };

            let Some(value) = value else {
                if config.empty_cell == EmptyCellPolicy::Remove {
                    if let Some(label) = slot.take() {
                        host.remove_label(label.handle);
                    }
                }
                continue;
            };

            let text = format(value);
            match slot {
                Some(label) => {
                    host.set_label_text(label.handle, &text);
                    if config.reposition_labels {
                        let center = geometry.cell_center(position);
                        if label.position != center {
                            host.set_label_position(label.handle, center);
                            label.position = center;
                        }
                    }
                }
                None => {
                    let center = geometry.cell_center(position);
                    let handle = host.create_label(&text, parent, center);
                    *slot = Some(PlacedLabel {
                        handle,
                        position: center,
                    });
                }
            }
        }
    }
}
