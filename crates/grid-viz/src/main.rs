//! Labeled Grid Viewer
//!
//! Run with: cargo run -p grid-viz
//!
//! Examples:
//!   cargo run -p grid-viz -- --width 9 --height 9 --cell-size 48
//!   cargo run -p grid-viz -- --config grid.toml --retain-empty
//!   cargo run -p grid-viz -- --print-config > grid.toml

use bevy::prelude::*;
use clap::Parser;
use grid_core::{EmptyCellPolicy, UVec2, Vec2};
use grid_viz::config::default_config_toml;
use grid_viz::{GridVizPlugin, VizConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Labeled Grid Viewer
#[derive(Parser, Debug)]
#[command(name = "grid-viz")]
#[command(about = "Interactive viewer for a labeled 2D grid")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    width: Option<u32>,

    /// Number of rows
    #[arg(long)]
    height: Option<u32>,

    /// Cell edge length in world units
    #[arg(long)]
    cell_size: Option<f32>,

    /// Keep a label on screen after its cell is cleared
    #[arg(long)]
    retain_empty: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.print_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    let mut config = match &args.config {
        Some(path) => match VizConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => VizConfig::default(),
    };

    // CLI overrides; the grid stays centered on the origin
    let grid = &mut config.grid;
    let size = UVec2::new(
        args.width.unwrap_or(grid.size.x),
        args.height.unwrap_or(grid.size.y),
    );
    let cell_size = args.cell_size.map_or(grid.cell_size, Vec2::splat);
    if size != grid.size || cell_size != grid.cell_size {
        grid.size = size;
        grid.cell_size = cell_size;
        grid.origin = -size.as_vec2() * cell_size / 2.0;
    }
    if args.retain_empty {
        grid.visualizer.empty_cell = EmptyCellPolicy::Retain;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    App::new().add_plugins(GridVizPlugin { config }).run();
    ExitCode::SUCCESS
}
