//! Display and output formatting utilities

use crate::life::Grid;

/// Render grids as text for the terminal.
///
/// Rendering is a read-only pass over a grid snapshot; it never mutates the
/// simulation.
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form.
    pub fn compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));

        for (x, _, cell) in grid.iter() {
            output.push(if cell.is_alive() { '█' } else { '·' });
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }

        output
    }

    /// Format a grid with numbered axes.
    pub fn with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (x, y, cell) in grid.iter() {
            if x == 0 {
                output.push_str(&format!("{:2} ", y));
            }
            output.push_str(if cell.is_alive() { "██" } else { "··" });
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }

        output
    }
}

/// Color output utilities.
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if the terminal supports it).
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message.
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message.
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message.
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message.
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::Cell;

    #[test]
    fn test_compact_formatting() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, Cell::Alive).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();

        let compact = GridFormatter::compact(&grid);
        assert_eq!(compact, "█··\n··█\n");
    }

    #[test]
    fn test_coordinate_formatting() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Alive).unwrap();

        let with_coords = GridFormatter::with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));
        assert!(with_coords.contains("··"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Either colored or plain, depending on the environment.
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
