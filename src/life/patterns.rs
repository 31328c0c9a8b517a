//! Built-in seed patterns

use super::{Cell, Grid, GridError};

/// A named set of live cells, positioned relative to the pattern's top-left
/// corner.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        Self { name, cells }
    }

    /// Columns spanned by the pattern.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1)
    }

    /// Rows spanned by the pattern.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1)
    }

    /// Stamp the pattern onto `grid` with its top-left corner at `(x, y)`.
    ///
    /// Fails with `OutOfBounds` if any cell of the pattern would land outside
    /// the grid, leaving already-placed cells in place.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), GridError> {
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive)?;
        }
        Ok(())
    }
}

/// Block, the simplest still life.
pub fn block() -> Pattern {
    Pattern::new("block", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Blinker, a period-2 oscillator.
pub fn blinker() -> Pattern {
    Pattern::new("blinker", vec![(0, 0), (1, 0), (2, 0)])
}

/// Toad, a period-2 oscillator.
pub fn toad() -> Pattern {
    Pattern::new("toad", vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)])
}

/// Beacon, a period-2 oscillator.
pub fn beacon() -> Pattern {
    Pattern::new(
        "beacon",
        vec![(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    )
}

/// Glider, the smallest spaceship. Moves diagonally with period 4.
pub fn glider() -> Pattern {
    Pattern::new("glider", vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// R-pentomino, a methuselah that stays active for over a thousand
/// generations on a large enough grid.
pub fn r_pentomino() -> Pattern {
    Pattern::new("r_pentomino", vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
}

/// All built-in patterns.
pub fn all() -> Vec<Pattern> {
    vec![
        block(),
        blinker(),
        toad(),
        beacon(),
        glider(),
        r_pentomino(),
    ]
}

/// Look up a built-in pattern by name, case-insensitively.
pub fn by_name(name: &str) -> Option<Pattern> {
    all()
        .into_iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_dimensions() {
        assert_eq!(block().width(), 2);
        assert_eq!(block().height(), 2);
        assert_eq!(blinker().width(), 3);
        assert_eq!(blinker().height(), 1);
        assert_eq!(glider().width(), 3);
        assert_eq!(glider().height(), 3);
    }

    #[test]
    fn test_place_on_grid() {
        let mut grid = Grid::new(6, 6);
        glider().place_on(&mut grid, 1, 2).unwrap();

        assert_eq!(grid.living_count(), 5);
        assert!(grid.get(2, 2).unwrap().is_alive());
        assert!(grid.get(3, 3).unwrap().is_alive());
        assert!(grid.get(1, 4).unwrap().is_alive());
    }

    #[test]
    fn test_place_outside_grid_fails() {
        let mut grid = Grid::new(3, 3);
        assert!(glider().place_on(&mut grid, 1, 1).is_err());
    }

    #[test]
    fn test_by_name_lookup() {
        assert_eq!(by_name("glider").map(|p| p.name), Some("glider"));
        assert_eq!(by_name("Blinker").map(|p| p.name), Some("blinker"));
        assert!(by_name("nonesuch").is_none());
    }

    #[test]
    fn test_all_patterns_are_distinctly_named() {
        let patterns = all();
        for pattern in &patterns {
            assert!(!pattern.cells.is_empty());
            assert_eq!(
                patterns.iter().filter(|p| p.name == pattern.name).count(),
                1
            );
        }
    }
}
