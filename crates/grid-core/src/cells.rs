//! The dense 2D array behind a [`Grid`](crate::Grid).

use bevy_math::{IVec2, UVec2};

/// A fixed-size 2D array of optional values, indexed by `(x, y)`.
///
/// Storage is row-major. Every slot is either present (`Some`) or absent
/// (`None`); absence is distinct from any value of `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellArray<T> {
    size: UVec2,
    slots: Vec<Option<T>>,
}

impl<T> CellArray<T> {
    /// Create an array with every slot absent.
    pub fn new(size: UVec2) -> Self {
        let len = size.x as usize * size.y as usize;
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        Self { size, slots }
    }

    /// Create an array by calling `f` for each position.
    pub fn from_fn(size: UVec2, mut f: impl FnMut(IVec2) -> Option<T>) -> Self {
        let mut slots = Vec::with_capacity(size.x as usize * size.y as usize);
        for y in 0..size.y as i32 {
            for x in 0..size.x as i32 {
                slots.push(f(IVec2::new(x, y)));
            }
        }
        Self { size, slots }
    }

    /// Build an array from rows, `rows[y][x]`.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Option<T>>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let size = UVec2::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?);
        let slots = rows.into_iter().flatten().collect();
        Some(Self { size, slots })
    }

    /// Dimensions as `(width, height)`.
    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Whether `position` lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, position: IVec2) -> bool {
        self.index(position).is_some()
    }

    #[inline]
    fn index(&self, position: IVec2) -> Option<usize> {
        let x = u32::try_from(position.x).ok()?;
        let y = u32::try_from(position.y).ok()?;
        if x < self.size.x && y < self.size.y {
            Some(y as usize * self.size.x as usize + x as usize)
        } else {
            None
        }
    }

    /// The value at `position`, or `None` if absent or out of bounds.
    pub fn get(&self, position: IVec2) -> Option<&T> {
        self.index(position).and_then(|i| self.slots[i].as_ref())
    }

    /// Mutable access to the slot at `position`, `None` if out of bounds.
    pub fn slot_mut(&mut self, position: IVec2) -> Option<&mut Option<T>> {
        self.index(position).map(|i| &mut self.slots[i])
    }

    /// Number of present values.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Make every slot absent.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Row-major iterator over `(position, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Option<&T>)> + '_ {
        let width = self.size.x.max(1) as usize;
        self.slots.iter().enumerate().map(move |(i, slot)| {
            let position = IVec2::new((i % width) as i32, (i / width) as i32);
            (position, slot.as_ref())
        })
    }

    /// Row-major iterator over mutable slots.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (IVec2, &mut Option<T>)> + '_ {
        let width = self.size.x.max(1) as usize;
        self.slots.iter_mut().enumerate().map(move |(i, slot)| {
            let position = IVec2::new((i % width) as i32, (i / width) as i32);
            (position, slot)
        })
    }
}

impl<T: Clone> CellArray<T> {
    /// Create an array with every slot set to `value`.
    pub fn filled(size: UVec2, value: T) -> Self {
        let len = size.x as usize * size.y as usize;
        Self {
            size,
            slots: vec![Some(value); len],
        }
    }
}
