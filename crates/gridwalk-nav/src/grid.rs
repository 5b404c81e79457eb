use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Static environment: bounds, obstacles and a single goal.
///
/// Immutable after construction, so one grid can be borrowed by a navigator and any number of
/// renderers at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    goal: Cell,
    blocked: Vec<bool>,
}

impl Grid {
    /// Build a grid.
    ///
    /// Obstacles outside the bounds are ignored; they could never be occupied anyway.
    pub fn new(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Cell>,
        goal: Cell,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::NonPositiveSize { width, height }.into());
        }

        let mut grid = Self {
            width,
            height,
            goal,
            blocked: vec![false; width as usize * height as usize],
        };

        if !grid.in_bounds(goal) {
            return Err(ConfigError::GoalOutOfBounds(goal).into());
        }

        for cell in obstacles {
            if let Some(idx) = grid.idx(cell) {
                grid.blocked[idx] = true;
            }
        }

        if grid.is_obstacle(goal) {
            return Err(ConfigError::GoalOnObstacle(goal).into());
        }

        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// True iff `cell` is inside the bounds and not an obstacle.
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.idx(cell).is_some_and(|idx| !self.blocked[idx])
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.idx(cell).is_some_and(|idx| self.blocked[idx])
    }

    /// Obstacles in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, blocked)| **blocked)
            .map(|(idx, _)| self.cell_from_idx(idx))
    }

    /// The four axis-aligned neighbors, unfiltered.
    ///
    /// Fixed order for determinism: +x, -x, +y, -y. Offsets wrap at the `i32` limits; a
    /// wrapped coordinate is always out of bounds, so `is_valid` rejects it.
    pub fn neighbors(&self, cell: Cell) -> [Cell; 4] {
        [
            Cell::new(cell.x.wrapping_add(1), cell.y),
            Cell::new(cell.x.wrapping_sub(1), cell.y),
            Cell::new(cell.x, cell.y.wrapping_add(1)),
            Cell::new(cell.x, cell.y.wrapping_sub(1)),
        ]
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    fn cell_from_idx(&self, idx: usize) -> Cell {
        let width = self.width as usize;
        // Both parts are bounded by width/height, which fit in i32.
        Cell::new((idx % width) as i32, (idx / width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_roundtrips_through_cell_from_idx() {
        let grid = Grid::new(4, 3, [], Cell::new(3, 2)).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let cell = Cell::new(x, y);
                let idx = grid.idx(cell).unwrap();
                assert_eq!(grid.cell_from_idx(idx), cell);
            }
        }
        assert_eq!(grid.idx(Cell::new(4, 0)), None);
        assert_eq!(grid.idx(Cell::new(0, -1)), None);
    }

    #[test]
    fn idx_of_last_cell_on_wide_grid_does_not_overflow_i32() {
        // 65536 * 32768 = 2^31 cells; i32 index math would overflow on the last row.
        let grid = Grid {
            width: 1 << 16,
            height: 1 << 15,
            goal: Cell::new(0, 0),
            blocked: Vec::new(),
        };
        let last = Cell::new((1 << 16) - 1, (1 << 15) - 1);
        let idx = grid.idx(last).unwrap();
        assert_eq!(idx, (1usize << 31) - 1);
        assert_eq!(grid.cell_from_idx(idx), last);
    }

    #[test]
    fn cell_display_and_distance() {
        assert_eq!(Cell::new(-1, 7).to_string(), "(-1, 7)");
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(4, 4)), 8);
        assert_eq!(Cell::new(3, -2).manhattan(Cell::new(-1, 1)), 7);
    }
}
