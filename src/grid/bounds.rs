//! Inclusive bounding grid over tile coordinates

use crate::grid::tiles::Tile;

/// Inclusive extent of a set of grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    /// Smallest x coordinate (inclusive)
    pub min_x: i32,
    /// Largest x coordinate (inclusive)
    pub max_x: i32,
    /// Smallest y coordinate (inclusive)
    pub min_y: i32,
    /// Largest y coordinate (inclusive)
    pub max_y: i32,
}

impl GridBounds {
    /// Bounds covering exactly one cell
    pub const fn from_cell(x: i32, y: i32) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Grow the bounds so they also cover `(x, y)`
    #[must_use]
    pub const fn include(self, x: i32, y: i32) -> Self {
        Self {
            min_x: if x < self.min_x { x } else { self.min_x },
            max_x: if x > self.max_x { x } else { self.max_x },
            min_y: if y < self.min_y { y } else { self.min_y },
            max_y: if y > self.max_y { y } else { self.max_y },
        }
    }

    /// Compute bounds over a sequence of coordinates in a single pass
    ///
    /// Returns `None` for an empty sequence, which has no extent
    pub fn from_coordinates<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut iter = coordinates.into_iter();
        let (x, y) = iter.next()?;
        Some(iter.fold(Self::from_cell(x, y), |bounds, (x, y)| bounds.include(x, y)))
    }

    /// Compute bounds over the cells of a tile collection
    pub fn from_tiles(tiles: &[Tile]) -> Option<Self> {
        Self::from_coordinates(tiles.iter().map(Tile::cell))
    }

    /// Number of grid columns, counting both edges
    pub const fn columns(&self) -> u64 {
        (self.max_x as i64 - self.min_x as i64 + 1) as u64
    }

    /// Number of grid rows, counting both edges
    pub const fn rows(&self) -> u64 {
        (self.max_y as i64 - self.min_y as i64 + 1) as u64
    }

    /// Check if a cell lies within the bounds
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Column and row of a cell relative to the top-left corner
    pub const fn cell_offset(&self, x: i32, y: i32) -> Option<(u64, u64)> {
        if self.contains(x, y) {
            Some((
                (x as i64 - self.min_x as i64) as u64,
                (y as i64 - self.min_y as i64) as u64,
            ))
        } else {
            None
        }
    }
}
