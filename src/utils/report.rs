//! Run summaries and seed behavior classification

use crate::life::{Grid, Simulator};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How a seed behaved over an observed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PatternClass {
    /// The population reached zero.
    Extinct { generation: u64 },
    /// The grid repeats every generation.
    StillLife,
    /// The grid returns to an earlier state with the given period.
    Oscillator { period: usize },
    /// No repeat was observed within the run.
    Unresolved,
}

impl fmt::Display for PatternClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternClass::Extinct { generation } => {
                write!(f, "extinct at generation {}", generation)
            }
            PatternClass::StillLife => write!(f, "still life"),
            PatternClass::Oscillator { period } => write!(f, "oscillator (period {})", period),
            PatternClass::Unresolved => write!(f, "no repeat observed"),
        }
    }
}

/// Summary of a finished simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub width: usize,
    pub height: usize,
    /// Generations actually advanced.
    pub generations: u64,
    pub initial_living: usize,
    pub final_living: usize,
    /// Live cell count per generation, starting at generation 0.
    pub population: Vec<usize>,
    pub classification: PatternClass,
    pub final_grid: Grid,
}

impl RunReport {
    /// Drive `simulator` for up to `generations` steps, recording the
    /// population history and classifying the seed's behavior.
    ///
    /// With `stop_on_cycle` set the run ends as soon as the grid empties or
    /// revisits an earlier state; otherwise the full count is executed and
    /// the first detected repeat is still reported.
    pub fn from_run(simulator: &mut Simulator, generations: usize, stop_on_cycle: bool) -> Self {
        let width = simulator.grid().width();
        let height = simulator.grid().height();
        let initial_living = simulator.grid().living_count();

        let mut population = vec![initial_living];
        let mut history = vec![simulator.grid().clone()];
        let mut classification = if initial_living == 0 {
            Some(PatternClass::Extinct { generation: 0 })
        } else {
            None
        };

        for _ in 0..generations {
            if stop_on_cycle && classification.is_some() {
                break;
            }

            simulator.advance();
            let grid = simulator.grid();
            population.push(grid.living_count());

            if classification.is_none() {
                if grid.is_empty() {
                    classification = Some(PatternClass::Extinct {
                        generation: simulator.generation(),
                    });
                } else if let Some(seen) = history.iter().rposition(|past| past == grid) {
                    // States before the first repeat are all distinct, so the
                    // closest match gives the true period.
                    let period = history.len() - seen;
                    classification = Some(if period == 1 {
                        PatternClass::StillLife
                    } else {
                        PatternClass::Oscillator { period }
                    });
                }
            }

            history.push(grid.clone());
        }

        Self {
            width,
            height,
            generations: simulator.generation(),
            initial_living,
            final_living: simulator.grid().living_count(),
            population,
            classification: classification.unwrap_or(PatternClass::Unresolved),
            final_grid: simulator.grid().clone(),
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run report")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;

        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid: {}x{}", self.width, self.height)?;
        writeln!(f, "Generations: {}", self.generations)?;
        writeln!(
            f,
            "Living cells: {} -> {}",
            self.initial_living, self.final_living
        )?;
        writeln!(f, "Population: {}", self.population.iter().join(", "))?;
        write!(f, "Behavior: {}", self.classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::{patterns, Grid};

    fn simulator_with(pattern: crate::life::patterns::Pattern, size: usize) -> Simulator {
        let mut grid = Grid::new(size, size);
        pattern.place_on(&mut grid, 1, 1).unwrap();
        Simulator::new(grid)
    }

    #[test]
    fn test_block_classified_as_still_life() {
        let mut simulator = simulator_with(patterns::block(), 5);
        let report = RunReport::from_run(&mut simulator, 10, true);

        assert_eq!(report.classification, PatternClass::StillLife);
        // Detection stops the run after a single step.
        assert_eq!(report.generations, 1);
        assert_eq!(report.final_living, 4);
    }

    #[test]
    fn test_blinker_classified_as_oscillator() {
        let mut simulator = simulator_with(patterns::blinker(), 5);
        let report = RunReport::from_run(&mut simulator, 10, true);

        assert_eq!(report.classification, PatternClass::Oscillator { period: 2 });
        assert_eq!(report.population, vec![3, 3, 3]);
    }

    #[test]
    fn test_lone_cell_classified_as_extinct() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, crate::life::Cell::Alive).unwrap();
        let mut simulator = Simulator::new(grid);

        let report = RunReport::from_run(&mut simulator, 10, true);

        assert_eq!(report.classification, PatternClass::Extinct { generation: 1 });
        assert_eq!(report.final_living, 0);
        assert!(report.final_grid.is_empty());
    }

    #[test]
    fn test_unresolved_within_short_horizon() {
        let mut simulator = simulator_with(patterns::r_pentomino(), 12);
        let report = RunReport::from_run(&mut simulator, 3, true);

        assert_eq!(report.classification, PatternClass::Unresolved);
        assert_eq!(report.generations, 3);
    }

    #[test]
    fn test_full_run_without_early_stop() {
        let mut simulator = simulator_with(patterns::blinker(), 5);
        let report = RunReport::from_run(&mut simulator, 6, false);

        // The oscillation is still reported, but all steps execute.
        assert_eq!(report.classification, PatternClass::Oscillator { period: 2 });
        assert_eq!(report.generations, 6);
        assert_eq!(report.population.len(), 7);
    }
}
