//! The [`Grid`] container: a fixed-size array of optional values placed in
//! world space, with a pluggable visualizer.
//!
//! Misuse never aborts the caller. Out-of-range reads log a warning and
//! return an absent value; rejected writes log an error, leave the grid
//! untouched, and return the [`GridError`] so callers can react.

use std::fmt;

use bevy_math::{IVec2, UVec2, Vec2};

use crate::cells::CellArray;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::GridGeometry;
use crate::visualizer::{GridVisualizer, SceneHost, TextLabelVisualizer};

/// A fixed-size 2D grid of `T` values with a visualizer of type `V`.
///
/// The size never changes after construction. Each cell is either present
/// or absent; new grids start with every cell absent.
#[derive(Debug, Clone)]
pub struct Grid<T, V> {
    geometry: GridGeometry,
    cells: CellArray<T>,
    visualizer: Option<V>,
}

/// A grid drawn with the default text-label visualizer.
pub type LabelGrid<T, L> = Grid<T, TextLabelVisualizer<T, L>>;

impl<T, V> Grid<T, V> {
    /// Create an empty grid with zero cell size at the world origin.
    ///
    /// Zero cell size leaves world-space lookups unavailable until
    /// [`set_geometry`](Grid::set_geometry) is called.
    pub fn new(size: UVec2) -> Self {
        Self::with_geometry(size, GridGeometry::default())
    }

    /// Create an empty grid placed in world space.
    pub fn with_geometry(size: UVec2, geometry: GridGeometry) -> Self {
        Self {
            geometry,
            cells: CellArray::new(size),
            visualizer: None,
        }
    }

    /// Create an empty grid with an explicit visualizer.
    pub fn with_visualizer(size: UVec2, geometry: GridGeometry, visualizer: V) -> Self {
        Self {
            geometry,
            cells: CellArray::new(size),
            visualizer: Some(visualizer),
        }
    }

    /// Create an empty grid from a loaded configuration.
    pub fn from_config(config: &GridConfig) -> Self {
        Self::with_geometry(config.size, config.geometry())
    }

    /// Dimensions as `(width, height)`.
    #[inline]
    pub fn size(&self) -> UVec2 {
        self.cells.size()
    }

    #[inline]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Move or rescale the grid in world space. Cell contents are kept.
    pub fn set_geometry(&mut self, geometry: GridGeometry) {
        self.geometry = geometry;
    }

    /// Whether `position` is a valid cell index.
    #[inline]
    pub fn contains(&self, position: IVec2) -> bool {
        self.cells.contains(position)
    }

    /// Map a world position to a cell index. The index may be out of range.
    pub fn world_to_grid(&self, world: Vec2) -> Result<IVec2, GridError> {
        self.geometry.world_to_grid(world)
    }

    /// World position of a cell's lower corner.
    pub fn grid_to_world(&self, position: IVec2) -> Vec2 {
        self.geometry.grid_to_world(position)
    }

    /// World position of a cell's center.
    pub fn cell_center(&self, position: IVec2) -> Vec2 {
        self.geometry.cell_center(position)
    }

    fn check(&self, position: IVec2) -> Result<(), GridError> {
        if self.cells.contains(position) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                position,
                size: self.size(),
            })
        }
    }

    /// Store `value` at `position`.
    pub fn set_value(&mut self, position: IVec2, value: T) -> Result<(), GridError> {
        let slot = self.slot_for_write(position)?;
        *slot = Some(value);
        Ok(())
    }

    /// Store `value` in the cell containing a world position.
    pub fn set_value_at(&mut self, world: Vec2, value: T) -> Result<(), GridError> {
        let position = self.world_for_write(world)?;
        self.set_value(position, value)
    }

    /// Make the cell at `position` absent, returning what it held.
    pub fn clear_value(&mut self, position: IVec2) -> Result<Option<T>, GridError> {
        let slot = self.slot_for_write(position)?;
        Ok(slot.take())
    }

    /// Make the cell containing a world position absent.
    pub fn clear_value_at(&mut self, world: Vec2) -> Result<Option<T>, GridError> {
        let position = self.world_for_write(world)?;
        self.clear_value(position)
    }

    fn slot_for_write(&mut self, position: IVec2) -> Result<&mut Option<T>, GridError> {
        if let Err(err) = self.check(position) {
            tracing::error!("Dropped write: {}", err);
            return Err(err);
        }
        let size = self.size();
        self.cells
            .slot_mut(position)
            .ok_or(GridError::OutOfRange { position, size })
    }

    fn world_for_write(&self, world: Vec2) -> Result<IVec2, GridError> {
        self.geometry.world_to_grid(world).inspect_err(|err| {
            tracing::error!("Dropped write at world position {}: {}", world, err);
        })
    }

    /// Replace every cell at once.
    ///
    /// Fails without modifying the grid if `values` has a different size.
    pub fn set_values(&mut self, values: CellArray<T>) -> Result<(), GridError> {
        if values.size() != self.size() {
            let err = GridError::SizeMismatch {
                expected: self.size(),
                actual: values.size(),
            };
            tracing::error!("Rejected bulk replacement: {}", err);
            return Err(err);
        }
        self.cells = values;
        Ok(())
    }

    /// The value at `position`.
    ///
    /// Returns `None` for absent cells and, with a logged warning, for
    /// positions outside the grid.
    pub fn value(&self, position: IVec2) -> Option<&T> {
        match self.try_value(position) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Read outside grid: {}", err);
                None
            }
        }
    }

    /// The value in the cell containing a world position.
    pub fn value_at(&self, world: Vec2) -> Option<&T> {
        match self.geometry.world_to_grid(world) {
            Ok(position) => self.value(position),
            Err(err) => {
                tracing::warn!("Read at world position {}: {}", world, err);
                None
            }
        }
    }

    /// The value at `position`, reporting out-of-range access as an error
    /// instead of logging it.
    pub fn try_value(&self, position: IVec2) -> Result<Option<&T>, GridError> {
        self.check(position)?;
        Ok(self.cells.get(position))
    }

    /// The live cell array.
    ///
    /// This is a borrow of the grid's own storage, not a copy; clone it to
    /// keep a snapshot.
    pub fn values(&self) -> &CellArray<T> {
        &self.cells
    }

    /// Row-major iterator over `(position, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Option<&T>)> + '_ {
        self.cells.iter()
    }

    /// Number of present cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.occupied_count()
    }

    /// Make every cell absent.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// The grid's own visualizer, if one was supplied or created.
    pub fn visualizer(&self) -> Option<&V> {
        self.visualizer.as_ref()
    }

    pub fn visualizer_mut(&mut self) -> Option<&mut V> {
        self.visualizer.as_mut()
    }

    /// Draw the grid with an explicitly supplied visualizer.
    pub fn render_with<H, W>(&self, visualizer: &mut W, host: &mut H, parent: Option<H::Scope>)
    where
        H: SceneHost + ?Sized,
        W: GridVisualizer<T, H> + ?Sized,
    {
        visualizer.visualize(
            host,
            &self.cells,
            parent,
            self.geometry.cell_size,
            self.geometry.origin,
        );
    }

    /// Draw the grid with its own visualizer, creating the default one on
    /// first use.
    pub fn render<H>(&mut self, host: &mut H, parent: Option<H::Scope>)
    where
        H: SceneHost + ?Sized,
        V: GridVisualizer<T, H> + Default,
    {
        let visualizer = self.visualizer.get_or_insert_with(V::default);
        visualizer.visualize(
            host,
            &self.cells,
            parent,
            self.geometry.cell_size,
            self.geometry.origin,
        );
    }
}

impl<T: fmt::Display, L> LabelGrid<T, L> {
    /// Create an empty grid whose text visualizer follows `config.visualizer`.
    pub fn labeled(config: &GridConfig) -> Self {
        let visualizer = TextLabelVisualizer::default().with_config(config.visualizer);
        Self::with_visualizer(config.size, config.geometry(), visualizer)
    }
}

impl<T: Clone, V> Grid<T, V> {
    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for (_, slot) in self.cells.iter_mut() {
            *slot = Some(value.clone());
        }
    }
}

impl<T: Default + Clone, V> Grid<T, V> {
    /// The value at `position`, or `T::default()` when absent or out of range.
    pub fn value_or_default(&self, position: IVec2) -> T {
        self.value(position).cloned().unwrap_or_default()
    }
}
