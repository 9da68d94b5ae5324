//! Grid components and the system that keeps their labels in sync.

use std::fmt;
use std::marker::PhantomData;

use bevy::prelude::*;
use grid_core::{Grid, GridConfig, LabelGrid};

use crate::host::{BevyLabelHost, LabelStyle};

/// A grid attached to an entity. Its labels are spawned as children of that
/// entity, so the entity's transform places the whole grid.
#[derive(Component, Deref, DerefMut)]
pub struct LabeledGrid<T: Send + Sync + 'static>(pub LabelGrid<T, Entity>);

impl<T: fmt::Display + Send + Sync + 'static> LabeledGrid<T> {
    /// Create an empty grid from configuration.
    pub fn from_config(config: &GridConfig) -> Self {
        Self(Grid::labeled(config))
    }
}

impl<T: Send + Sync + 'static> LabeledGrid<T> {
    /// The grid plus the spatial components its labels need to inherit a
    /// transform.
    pub fn bundle(self, transform: Transform) -> (Self, SpatialBundle) {
        (self, SpatialBundle::from_transform(transform))
    }
}

/// Plugin rendering every [`LabeledGrid<T>`] whose contents changed.
pub struct GridLabelPlugin<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> GridLabelPlugin<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for GridLabelPlugin<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display + Send + Sync + 'static> Plugin for GridLabelPlugin<T> {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelStyle>()
            .add_systems(Update, render_labeled_grids::<T>);
    }
}

/// System to push changed grid contents to their labels.
fn render_labeled_grids<T: fmt::Display + Send + Sync + 'static>(
    mut commands: Commands,
    style: Res<LabelStyle>,
    mut grids: Query<(Entity, &mut LabeledGrid<T>), Changed<LabeledGrid<T>>>,
) {
    for (entity, mut grid) in grids.iter_mut() {
        let mut host = BevyLabelHost::new(&mut commands, &style);
        // Rendering only touches the label cache; don't re-trigger ourselves.
        grid.bypass_change_detection().render(&mut host, Some(entity));
        tracing::debug!(
            "Rendered grid {:?} ({} occupied cells)",
            entity,
            grid.occupied_count()
        );
    }
}
