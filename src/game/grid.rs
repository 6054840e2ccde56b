//! Board geometry: coordinates and the wall-indexed grid.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate: |Δx| + |Δy|.
    #[must_use]
    #[inline]
    pub const fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) as u32 + self.y.abs_diff(other.y) as u32
    }

    /// Get adjacent coordinates (up, down, left, right) on a square board.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count.
    #[must_use]
    #[inline]
    pub fn adjacent(self, size: u16) -> ([Coord; 4], u8) {
        let mut result = [Coord::new(0, 0); 4];
        let mut count = 0u8;

        if self.y > 0 {
            result[count as usize] = Coord::new(self.x, self.y - 1); // up
            count += 1;
        }
        if self.y + 1 < size {
            result[count as usize] = Coord::new(self.x, self.y + 1); // down
            count += 1;
        }
        if self.x > 0 {
            result[count as usize] = Coord::new(self.x - 1, self.y); // left
            count += 1;
        }
        if self.x + 1 < size {
            result[count as usize] = Coord::new(self.x + 1, self.y); // right
            count += 1;
        }

        (result, count)
    }
}

/// A square battlefield with an indexed wall mask.
///
/// Wall membership is a direct lookup rather than a scan over the level's
/// wall list, so occupancy checks stay O(1) on large boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Side length of the board in cells.
    size: u16,
    /// Wall mask in row-major order.
    walls: Vec<bool>,
}

impl Grid {
    /// Create a new open grid (no walls) with the given side length.
    ///
    /// Returns `None` if the side length is zero.
    #[must_use]
    pub fn new(size: u16) -> Option<Self> {
        if size == 0 {
            return None;
        }

        let cells = usize::from(size) * usize::from(size);
        Some(Self {
            size,
            walls: vec![false; cells],
        })
    }

    /// Get the side length of the board.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Check if a coordinate is within the board bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Convert a coordinate to an index into the wall mask.
    #[must_use]
    pub(crate) fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.size) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Check if the cell at the given coordinate is a wall.
    ///
    /// Out-of-bounds coordinates are not walls; callers bounds-check before
    /// treating a cell as enterable.
    #[must_use]
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|idx| self.walls[idx])
    }

    /// Mark the cell at the given coordinate as a wall.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set_wall(&mut self, coord: Coord) -> bool {
        if let Some(idx) = self.index(coord) {
            self.walls[idx] = true;
            true
        } else {
            false
        }
    }

    /// Iterate over all coordinates of the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }
}
