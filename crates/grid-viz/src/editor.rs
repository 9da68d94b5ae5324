//! Interactive editing: click to change cells, keys for bulk edits.
//!
//! Controls:
//! - Left click: increment the clicked cell
//! - Right click: clear the clicked cell
//! - R: fill with random values
//! - C: clear every cell

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use grid_core::{CellArray, IVec2};
use rand::Rng;

use crate::config::VizConfig;
use crate::labels::LabeledGrid;

/// Plugin for the editable demo grid.
pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, spawn_editor_grid))
            .add_systems(
                Update,
                (handle_cell_clicks, handle_keyboard_edits, draw_grid_lines),
            );
    }
}

/// Marker for the main 2D camera.
#[derive(Component)]
pub struct MainCamera;

/// Marker for the grid the editor controls.
#[derive(Component)]
pub struct EditorGrid;

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2dBundle::default(), MainCamera));
}

fn spawn_editor_grid(mut commands: Commands, config: Res<VizConfig>) {
    let grid: LabeledGrid<u32> = LabeledGrid::from_config(&config.grid);
    commands.spawn((grid.bundle(Transform::IDENTITY), EditorGrid));

    tracing::info!(
        "Spawned {}x{} grid with {}x{} cells",
        config.grid.size.x,
        config.grid.size.y,
        config.grid.cell_size.x,
        config.grid.cell_size.y
    );
}

/// The value a left click leaves in a cell.
pub fn next_value(current: Option<&u32>) -> u32 {
    current.map_or(1, |v| v.saturating_add(1))
}

/// System to edit the cell under the cursor.
fn handle_cell_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut grids: Query<(&mut LabeledGrid<u32>, &GlobalTransform), With<EditorGrid>>,
) {
    let increment = mouse.just_pressed(MouseButton::Left);
    let clear = mouse.just_pressed(MouseButton::Right);
    if !increment && !clear {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    for (mut grid, grid_transform) in grids.iter_mut() {
        // Labels live in the grid entity's local space
        let local = grid_transform
            .affine()
            .inverse()
            .transform_point3(world.extend(0.0))
            .truncate();

        let position = match grid.world_to_grid(local) {
            Ok(position) if grid.contains(position) => position,
            Ok(position) => {
                tracing::debug!("Click at {} is outside the grid ({})", local, position);
                continue;
            }
            Err(e) => {
                tracing::warn!("Cannot map click to grid: {}", e);
                continue;
            }
        };

        let result = if clear {
            grid.clear_value(position).map(|_| ())
        } else {
            let value = next_value(grid.value(position));
            grid.set_value(position, value)
        };
        if let Err(e) = result {
            tracing::warn!("Edit at {} failed: {}", position, e);
        }
    }
}

/// System for bulk edits from the keyboard.
fn handle_keyboard_edits(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut grids: Query<&mut LabeledGrid<u32>, With<EditorGrid>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        let mut rng = rand::thread_rng();
        for mut grid in grids.iter_mut() {
            let values = CellArray::from_fn(grid.size(), |_| {
                rng.gen_bool(0.6).then(|| rng.gen_range(1..100))
            });
            if let Err(e) = grid.set_values(values) {
                tracing::error!("Randomize failed: {}", e);
            }
        }
        tracing::info!("Randomized grid values");
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        for mut grid in grids.iter_mut() {
            grid.clear();
        }
        tracing::info!("Cleared grid values");
    }
}

/// System to outline every cell.
fn draw_grid_lines(mut gizmos: Gizmos, grids: Query<(&LabeledGrid<u32>, &GlobalTransform)>) {
    let color = Color::srgba(1.0, 1.0, 1.0, 0.25);

    for (grid, transform) in grids.iter() {
        let size = grid.size().as_ivec2();
        let to_world = |p: IVec2| {
            transform
                .transform_point(grid.grid_to_world(p).extend(0.0))
                .truncate()
        };

        for x in 0..=size.x {
            gizmos.line_2d(to_world(IVec2::new(x, 0)), to_world(IVec2::new(x, size.y)), color);
        }
        for y in 0..=size.y {
            gizmos.line_2d(to_world(IVec2::new(0, y)), to_world(IVec2::new(size.x, y)), color);
        }
    }
}
