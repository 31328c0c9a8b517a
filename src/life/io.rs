//! Text-format seed pattern loading and saving

use super::{Cell, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file.
/// Format: each line is a row, with '1' for alive cells and '0' for dead cells.
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_grid_from_str(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a grid from its text representation.
pub fn parse_grid_from_str(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut rows = Vec::with_capacity(lines.len());

    for (y, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                y,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(Cell::Dead),
                '1' => row.push(Cell::Alive),
                _ => anyhow::bail!(
                    "Invalid character '{}' at ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    x,
                    y
                ),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Save a grid to a text file.
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its text representation.
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));
    let mut last_row = 0;

    for (_, y, cell) in grid.iter() {
        if y != last_row {
            result.push('\n');
            last_row = y;
        }
        result.push(if cell.is_alive() { '1' } else { '0' });
    }
    result.push('\n');

    result
}

/// Write example seed files for the classic starter patterns.
pub fn write_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content).context("Failed to write glider.txt")?;

    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content).context("Failed to write block.txt")?;

    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}
