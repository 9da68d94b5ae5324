//! World-space placement of a grid.

use bevy_math::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Placement of a grid in world space.
///
/// Cell `(0, 0)` has its lower corner at `origin`; every cell spans
/// `cell_size` world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridGeometry {
    /// World-space dimensions of one cell.
    pub cell_size: Vec2,
    /// World position of the lower corner of cell `(0, 0)`.
    pub origin: Vec2,
}

impl GridGeometry {
    /// Create a geometry from a cell size and origin.
    pub const fn new(cell_size: Vec2, origin: Vec2) -> Self {
        Self { cell_size, origin }
    }

    /// Whether world positions can be mapped to cells.
    pub fn is_degenerate(&self) -> bool {
        !(self.cell_size.x.is_finite()
            && self.cell_size.y.is_finite()
            && self.cell_size.x > 0.0
            && self.cell_size.y > 0.0)
    }

    /// Map a world position to the cell containing it.
    ///
    /// Rounds toward negative infinity, so positions left of or below the
    /// origin land on negative indices. A NaN or infinite position or origin
    /// is an error rather than a cell.
    pub fn world_to_grid(&self, world: Vec2) -> Result<IVec2, GridError> {
        if self.is_degenerate() {
            return Err(GridError::DegenerateCellSize {
                cell_size: self.cell_size,
            });
        }
        let local = (world - self.origin) / self.cell_size;
        if !local.is_finite() {
            return Err(GridError::NonFiniteWorldPosition {
                world,
                origin: self.origin,
            });
        }
        Ok(IVec2::new(local.x.floor() as i32, local.y.floor() as i32))
    }

    /// World position of a cell's lower corner.
    pub fn grid_to_world(&self, position: IVec2) -> Vec2 {
        self.origin + position.as_vec2() * self.cell_size
    }

    /// World position of a cell's center.
    pub fn cell_center(&self, position: IVec2) -> Vec2 {
        self.grid_to_world(position) + self.cell_size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_grid_floors() {
        let geom = GridGeometry::new(Vec2::splat(2.0), Vec2::ZERO);
        assert_eq!(geom.world_to_grid(Vec2::new(5.0, 5.0)), Ok(IVec2::new(2, 2)));
        assert_eq!(
            geom.world_to_grid(Vec2::new(-1.0, -1.0)),
            Ok(IVec2::new(-1, -1))
        );
        assert_eq!(geom.world_to_grid(Vec2::new(0.0, 1.99)), Ok(IVec2::ZERO));
    }

    #[test]
    fn test_world_to_grid_with_origin() {
        let geom = GridGeometry::new(Vec2::new(1.0, 0.5), Vec2::new(-3.0, 10.0));
        assert_eq!(
            geom.world_to_grid(Vec2::new(-2.5, 10.75)),
            Ok(IVec2::new(0, 1))
        );
        assert_eq!(
            geom.world_to_grid(Vec2::new(-3.5, 9.9)),
            Ok(IVec2::new(-1, -1))
        );
    }

    #[test]
    fn test_degenerate_cell_size() {
        let geom = GridGeometry::default();
        assert!(geom.is_degenerate());
        assert_eq!(
            geom.world_to_grid(Vec2::ONE),
            Err(GridError::DegenerateCellSize { cell_size: Vec2::ZERO })
        );

        let negative = GridGeometry::new(Vec2::new(1.0, -1.0), Vec2::ZERO);
        assert!(negative.is_degenerate());

        let nan = GridGeometry::new(Vec2::new(f32::NAN, 1.0), Vec2::ZERO);
        assert!(nan.is_degenerate());
    }

    #[test]
    fn test_non_finite_world_position() {
        let geom = GridGeometry::new(Vec2::ONE, Vec2::ZERO);
        assert!(matches!(
            geom.world_to_grid(Vec2::NAN),
            Err(GridError::NonFiniteWorldPosition { .. })
        ));
        assert!(geom.world_to_grid(Vec2::new(f32::INFINITY, 0.5)).is_err());

        let nan_origin = GridGeometry::new(Vec2::ONE, Vec2::new(f32::NAN, 0.0));
        assert!(matches!(
            nan_origin.world_to_grid(Vec2::new(2.5, 2.5)),
            Err(GridError::NonFiniteWorldPosition { .. })
        ));
    }

    #[test]
    fn test_cell_center() {
        let geom = GridGeometry::new(Vec2::ONE, Vec2::ZERO);
        assert_eq!(geom.cell_center(IVec2::ZERO), Vec2::new(0.5, 0.5));

        let geom = GridGeometry::new(Vec2::new(2.0, 4.0), Vec2::new(10.0, -10.0));
        assert_eq!(geom.grid_to_world(IVec2::new(1, 1)), Vec2::new(12.0, -6.0));
        assert_eq!(geom.cell_center(IVec2::new(1, 1)), Vec2::new(13.0, -4.0));
    }
}
