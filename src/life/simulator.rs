//! Generation advancement over an owned grid

use super::{Grid, LifeRules};

/// Drives a grid forward one generation at a time.
///
/// The simulator owns the current grid. A step never errors: it iterates only
/// valid coordinates and queries neighbors through the grid's edge-aware
/// lookup. Renderers read the grid between steps and never see a partially
/// updated generation.
#[derive(Debug, Clone)]
pub struct Simulator {
    grid: Grid,
    generation: u64,
}

impl Simulator {
    /// Create a simulator over an externally seeded grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// Create a simulator over an all-dead grid of the given dimensions.
    pub fn from_dimensions(width: usize, height: usize) -> Self {
        Self::new(Grid::new(width, height))
    }

    /// Read-only view of the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the current grid, for seeding before or between
    /// steps.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of generations advanced so far. Starts at 0.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation.
    ///
    /// The successor grid is built in a separate buffer and committed in one
    /// assignment, so readers observe either the old or the new generation,
    /// never a mix.
    pub fn advance(&mut self) {
        self.grid = LifeRules::evolve(&self.grid);
        self.generation += 1;
    }

    /// Advance `n` generations.
    pub fn advance_many(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}
