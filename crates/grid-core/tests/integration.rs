//! Integration tests for the grid container and its text visualizer.

use grid_core::{
    CellArray, EmptyCellPolicy, Grid, GridConfig, GridGeometry, GridVisualizer, IVec2,
    LabelGrid, LabelHost, SceneHost, TextLabelVisualizer, UVec2, Vec2, VisualizerConfig,
};

/// A host that records every label operation instead of drawing.
#[derive(Default)]
struct RecordingHost {
    labels: Vec<RecordedLabel>,
    creates: usize,
    text_updates: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct RecordedLabel {
    text: String,
    parent: Option<&'static str>,
    position: Vec2,
    removed: bool,
}

impl SceneHost for RecordingHost {
    type Scope = &'static str;
}

impl LabelHost for RecordingHost {
    type Label = usize;

    fn create_label(&mut self, text: &str, parent: Option<&'static str>, position: Vec2) -> usize {
        self.creates += 1;
        self.labels.push(RecordedLabel {
            text: text.to_string(),
            parent,
            position,
            removed: false,
        });
        self.labels.len() - 1
    }

    fn set_label_text(&mut self, label: usize, text: &str) {
        self.text_updates += 1;
        self.labels[label].text = text.to_string();
    }

    fn set_label_position(&mut self, label: usize, position: Vec2) {
        self.labels[label].position = position;
    }

    fn remove_label(&mut self, label: usize) {
        self.labels[label].removed = true;
    }
}

impl RecordingHost {
    fn live(&self) -> impl Iterator<Item = &RecordedLabel> {
        self.labels.iter().filter(|l| !l.removed)
    }
}

type TestGrid<T> = LabelGrid<T, usize>;

fn unit_grid<T>(width: u32, height: u32) -> TestGrid<T> {
    Grid::with_geometry(
        UVec2::new(width, height),
        GridGeometry::new(Vec2::ONE, Vec2::ZERO),
    )
}

/// Every valid cell returns what was written to it.
#[test]
fn test_write_then_read_every_cell() {
    let mut grid = unit_grid::<u32>(5, 4);
    for y in 0..4 {
        for x in 0..5 {
            grid.set_value(IVec2::new(x, y), (x * 100 + y) as u32).unwrap();
        }
    }
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(grid.value(IVec2::new(x, y)), Some(&((x * 100 + y) as u32)));
        }
    }
}

/// Out-of-range reads are absent and writes touch nothing.
#[test]
fn test_out_of_range_is_harmless() {
    let mut grid = unit_grid::<u32>(3, 3);
    grid.fill(1);
    let snapshot = grid.values().clone();

    for x in -2..6 {
        for y in -2..6 {
            let p = IVec2::new(x, y);
            if grid.contains(p) {
                continue;
            }
            assert!(grid.set_value(p, 42).is_err());
            assert_eq!(grid.value(p), None);
            assert_eq!(grid.value_or_default(p), 0);
        }
    }

    assert_eq!(grid.values(), &snapshot);
}

/// A bulk replacement of the wrong size is rejected.
#[test]
fn test_mismatched_bulk_replacement() {
    let mut grid = unit_grid::<char>(2, 3);
    grid.set_value(IVec2::new(1, 2), 'z').unwrap();
    let snapshot = grid.values().clone();

    let wrong = CellArray::from_rows(vec![vec![Some('a'), Some('b'), Some('c')]]).unwrap();
    assert!(grid.set_values(wrong).is_err());
    assert_eq!(grid.values(), &snapshot);

    let right = CellArray::filled(UVec2::new(2, 3), 'q');
    grid.set_values(right).unwrap();
    assert_eq!(grid.value(IVec2::new(1, 2)), Some(&'q'));
}

/// World positions floor toward negative infinity.
#[test]
fn test_world_to_grid_floor() {
    let grid: TestGrid<u8> = Grid::with_geometry(
        UVec2::new(4, 4),
        GridGeometry::new(Vec2::splat(2.0), Vec2::ZERO),
    );

    assert_eq!(grid.world_to_grid(Vec2::new(5.0, 5.0)), Ok(IVec2::new(2, 2)));
    assert_eq!(grid.world_to_grid(Vec2::new(-1.0, -1.0)), Ok(IVec2::new(-1, -1)));
}

/// Rendering twice creates one label and then updates its text.
#[test]
fn test_render_twice_creates_once() {
    let mut grid = unit_grid::<&str>(2, 2);
    grid.set_value(IVec2::ZERO, "A").unwrap();
    let mut host = RecordingHost::default();

    grid.render(&mut host, None);
    grid.render(&mut host, None);

    assert_eq!(host.creates, 1);
    assert_eq!(host.text_updates, 1);
    assert_eq!(host.labels.len(), 1);
    assert_eq!(host.labels[0].position, Vec2::new(0.5, 0.5));
    assert_eq!(host.labels[0].text, "A");
}

/// Labels follow value changes and attach under the given parent.
#[test]
fn test_render_tracks_changes() {
    let mut grid = unit_grid::<u32>(3, 1);
    let mut host = RecordingHost::default();

    grid.set_value(IVec2::new(0, 0), 1).unwrap();
    grid.set_value(IVec2::new(2, 0), 3).unwrap();
    grid.render(&mut host, Some("board"));

    grid.set_value(IVec2::new(0, 0), 10).unwrap();
    grid.render(&mut host, Some("board"));

    let live: Vec<_> = host.live().collect();
    assert_eq!(live.len(), 2);
    assert_eq!(live[0].text, "10");
    assert_eq!(live[1].text, "3");
    assert_eq!(live[1].position, Vec2::new(2.5, 0.5));
    assert!(live.iter().all(|l| l.parent == Some("board")));
}

/// Emptying a cell removes its label by default.
#[test]
fn test_cleared_cell_loses_label() {
    let mut grid = unit_grid::<&str>(2, 2);
    let mut host = RecordingHost::default();

    grid.set_value(IVec2::ZERO, "A").unwrap();
    grid.render(&mut host, None);
    grid.clear_value(IVec2::ZERO).unwrap();
    grid.render(&mut host, None);

    assert_eq!(host.live().count(), 0);
}

/// The retain policy keeps the last text on screen.
#[test]
fn test_cleared_cell_retains_label_when_configured() {
    let config = GridConfig {
        size: UVec2::new(2, 2),
        visualizer: VisualizerConfig {
            empty_cell: EmptyCellPolicy::Retain,
            ..VisualizerConfig::default()
        },
        ..GridConfig::default()
    };
    let mut grid: TestGrid<&str> = Grid::labeled(&config);
    let mut host = RecordingHost::default();

    grid.set_value(IVec2::ZERO, "A").unwrap();
    grid.render(&mut host, None);
    grid.clear_value(IVec2::ZERO).unwrap();
    grid.render(&mut host, None);

    let live: Vec<_> = host.live().collect();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].text, "A");
}

/// An explicit visualizer leaves the grid's own visualizer untouched.
#[test]
fn test_render_with_override() {
    let mut grid = unit_grid::<i32>(2, 1);
    grid.set_value(IVec2::new(1, 0), 12).unwrap();
    let mut host = RecordingHost::default();
    let mut hex: TextLabelVisualizer<i32, usize> =
        TextLabelVisualizer::with_formatter(|v: &i32| format!("{:#x}", v));

    grid.render_with(&mut hex, &mut host, Some("overlay"));

    assert!(grid.visualizer().is_none());
    assert_eq!(hex.label_count(), 1);
    assert_eq!(host.labels[0].text, "0xc");
    assert_eq!(host.labels[0].parent, Some("overlay"));
}

/// A visualizer written against the capability, not the text default.
#[test]
fn test_custom_visualizer() {
    #[derive(Default)]
    struct Census {
        occupied: usize,
        origin: Vec2,
    }

    impl<T> GridVisualizer<T, RecordingHost> for Census {
        fn visualize(
            &mut self,
            _host: &mut RecordingHost,
            cells: &CellArray<T>,
            _parent: Option<&'static str>,
            _cell_size: Vec2,
            origin: Vec2,
        ) {
            self.occupied = cells.occupied_count();
            self.origin = origin;
        }
    }

    let mut grid: Grid<u8, Census> = Grid::with_geometry(
        UVec2::new(3, 3),
        GridGeometry::new(Vec2::ONE, Vec2::new(7.0, 8.0)),
    );
    grid.fill(1);
    grid.clear_value(IVec2::ONE).unwrap();

    let mut host = RecordingHost::default();
    grid.render(&mut host, None);

    let census = grid.visualizer().unwrap();
    assert_eq!(census.occupied, 8);
    assert_eq!(census.origin, Vec2::new(7.0, 8.0));
    assert_eq!(host.creates, 0);
}
