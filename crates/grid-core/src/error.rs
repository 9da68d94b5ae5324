//! Error types for grid access.

use bevy_math::{IVec2, UVec2, Vec2};
use thiserror::Error;

/// Errors reported by [`Grid`](crate::Grid) operations.
///
/// None of these leave the grid in a modified state: a failed write is
/// dropped and a failed read yields an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// A grid coordinate fell outside `[0, size)`.
    #[error("position {position} is out of range for grid of size {size}")]
    OutOfRange { position: IVec2, size: UVec2 },

    /// A bulk replacement array does not match the grid's fixed size.
    #[error("cell array of size {actual} does not match grid size {expected}")]
    SizeMismatch { expected: UVec2, actual: UVec2 },

    /// World-space conversion needs a positive, finite cell size.
    #[error("cell size {cell_size} cannot map world positions to cells")]
    DegenerateCellSize { cell_size: Vec2 },

    /// A world position, or the grid origin, is NaN or infinite.
    #[error("world position {world} is not finite relative to origin {origin}")]
    NonFiniteWorldPosition { world: Vec2, origin: Vec2 },
}
