//! Bounded grid storage for the Life simulation

use crate::life::Cell;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error raised by the bounds-checked grid accessors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A rectangular field of cells indexed by `(column, row)`.
///
/// Dimensions are fixed at construction. Coordinates outside
/// `[0, width) x [0, height)` are never stored; the grid has hard edges,
/// not wraparound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from rows of cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", y, row.len(), width);
            }
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Assemble a grid from an already row-major cell buffer.
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `(x, y)`, or `OutOfBounds` if either coordinate is
    /// outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Overwrite the cell at `(x, y)`, with the same bounds contract as
    /// [`Grid::get`].
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Look up a cell by signed coordinates.
    ///
    /// Returns `None` off-grid, so neighbor scans treat the edge as absent
    /// rather than wrapping to the opposite side.
    pub fn cell_at(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return None;
        }
        Some(self.cells[self.index(x as usize, y as usize)])
    }

    /// Count live cells among the up to eight Moore neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }

                if self.is_alive_at(x as isize + dx, y as isize + dy) {
                    count += 1;
                }
            }
        }

        count
    }

    fn is_alive_at(&self, x: isize, y: isize) -> bool {
        self.cell_at(x, y).map_or(false, Cell::is_alive)
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.cells[self.index(x, y)]))
    }

    /// Get all living cell coordinates.
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Count total living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid has no living cells.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.cells[self.index(x, y)].is_alive() {
                    "⬛"
                } else {
                    "⬜"
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_alive(width: usize, height: usize) -> Grid {
        let rows = vec![vec![Cell::Alive; width]; height];
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![]).is_err());
        assert!(Grid::from_rows(vec![vec![]]).is_err());

        let ragged = vec![vec![Cell::Dead, Cell::Alive], vec![Cell::Dead]];
        assert!(Grid::from_rows(ragged).is_err());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 1, Cell::Alive).unwrap();

        assert_eq!(grid.get(2, 1).unwrap(), Cell::Alive);
        assert_eq!(grid.get(1, 2).unwrap(), Cell::Dead);
        assert_eq!(grid.living_cells(), vec![(2, 1)]);
    }

    #[test]
    fn test_out_of_bounds_accessors() {
        let mut grid = Grid::new(3, 2);

        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(3, 0, Cell::Alive).is_err());
        assert!(grid.set(0, 2, Cell::Alive).is_err());

        // A failed set leaves the grid untouched.
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cell_at_off_grid_is_absent() {
        let grid = all_alive(2, 2);

        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, -1), None);
        assert_eq!(grid.cell_at(2, 0), None);
        assert_eq!(grid.cell_at(0, 2), None);
        assert_eq!(grid.cell_at(1, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let grid = all_alive(3, 3);

        // Interior cells see all 8 neighbors, corners 3, edges 5.
        assert_eq!(grid.live_neighbors(1, 1), 8);
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(2, 2), 3);
        assert_eq!(grid.live_neighbors(1, 0), 5);
        assert_eq!(grid.live_neighbors(0, 1), 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Alive).unwrap();

        let snapshot = grid.clone();
        grid.set(1, 1, Cell::Dead).unwrap();
        grid.set(0, 0, Cell::Alive).unwrap();

        assert_eq!(snapshot.get(1, 1).unwrap(), Cell::Alive);
        assert_eq!(snapshot.get(0, 0).unwrap(), Cell::Dead);
    }
}
