//! Conway's Game of Life simulator
//!
//! This library provides the simulation core for Conway's Game of Life:
//! a bounded grid of binary cells advanced one generation at a time under
//! the classic B3/S23 rule. Display, input handling, and frame pacing are
//! the caller's concern; the bundled binary is one such driving loop.

pub mod config;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use life::{Cell, Grid, GridError, Simulator};

use anyhow::{Context, Result};
use utils::RunReport;

/// Build a simulator seeded according to `settings`.
///
/// A pattern file defines the whole starting grid; a built-in pattern is
/// stamped onto an all-dead grid of the configured dimensions. With neither,
/// the grid starts empty.
pub fn seeded_simulator(settings: &Settings) -> Result<Simulator> {
    let grid = if let Some(path) = &settings.input.pattern_file {
        life::io::load_grid_from_file(path)?
    } else {
        let mut grid = Grid::new(settings.simulation.width, settings.simulation.height);

        if let Some(name) = &settings.input.pattern {
            let pattern = life::patterns::by_name(name)
                .with_context(|| format!("Unknown built-in pattern: {}", name))?;

            pattern
                .place_on(&mut grid, settings.input.origin_x, settings.input.origin_y)
                .with_context(|| {
                    format!(
                        "Pattern '{}' does not fit the {}x{} grid at ({}, {})",
                        name,
                        settings.simulation.width,
                        settings.simulation.height,
                        settings.input.origin_x,
                        settings.input.origin_y
                    )
                })?;
        }

        grid
    };

    Ok(Simulator::new(grid))
}

/// Run a full simulation for the configured number of generations and
/// summarize it.
pub fn run_simulation(settings: &Settings) -> Result<RunReport> {
    let mut simulator = seeded_simulator(settings)?;
    Ok(RunReport::from_run(
        &mut simulator,
        settings.simulation.generations,
        false,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_simulator_places_pattern() {
        let mut settings = Settings::default();
        settings.input.pattern = Some("block".to_string());

        let simulator = seeded_simulator(&settings).unwrap();
        assert_eq!(simulator.grid().living_count(), 4);
        assert_eq!(simulator.generation(), 0);
    }

    #[test]
    fn test_seeded_simulator_rejects_unknown_pattern() {
        let mut settings = Settings::default();
        settings.input.pattern = Some("nonesuch".to_string());

        assert!(seeded_simulator(&settings).is_err());
    }

    #[test]
    fn test_run_simulation_reports_oscillation() {
        let mut settings = Settings::default();
        settings.simulation.generations = 4;
        settings.input.pattern = Some("blinker".to_string());

        let report = run_simulation(&settings).unwrap();
        assert_eq!(report.generations, 4);
        assert_eq!(
            report.classification,
            utils::PatternClass::Oscillator { period: 2 }
        );
    }
}
