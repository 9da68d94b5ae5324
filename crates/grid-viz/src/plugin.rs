//! Main visualization plugin that ties all systems together.

use bevy::prelude::*;

use crate::config::VizConfig;
use crate::editor::EditorPlugin;
use crate::labels::GridLabelPlugin;

/// Main plugin for the grid viewer.
///
/// Sets up the window from [`VizConfig`], renders `u32` grids as labels and
/// adds the interactive editor.
pub struct GridVizPlugin {
    pub config: VizConfig,
}

impl Plugin for GridVizPlugin {
    fn build(&self, app: &mut App) {
        let window = &self.config.window;
        app.insert_resource(self.config.clone())
            .insert_resource(self.config.labels.clone())
            .insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.15)))
            .add_plugins(DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: window.title.clone(),
                    resolution: (window.width, window.height).into(),
                    ..default()
                }),
                ..default()
            }))
            .add_plugins((GridLabelPlugin::<u32>::new(), EditorPlugin));
    }
}
