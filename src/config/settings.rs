//! Configuration settings for the simulation driver

use crate::life::patterns;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Generations to run. 0 shows the seed and stops.
    pub generations: usize,
}

/// Where the initial live cells come from.
///
/// Either a built-in pattern placed at an origin, or a seed file holding the
/// whole starting grid. With neither set the run starts from an empty grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub origin_x: usize,
    pub origin_y: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pause between rendered frames. Pacing belongs to the driving loop,
    /// not the simulation core.
    pub frame_delay_ms: u64,
    pub show_each_generation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Quiet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                width: 40,
                height: 40,
                generations: 50,
            },
            input: InputConfig {
                pattern: Some("glider".to_string()),
                pattern_file: None,
                origin_x: 1,
                origin_y: 1,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                frame_delay_ms: 333,
                show_each_generation: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file.
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<()> {
        if self.simulation.width == 0 || self.simulation.height == 0 {
            anyhow::bail!("Grid dimensions must be positive");
        }

        if self.input.pattern.is_some() && self.input.pattern_file.is_some() {
            anyhow::bail!("Set either a built-in pattern or a pattern file, not both");
        }

        if let Some(name) = &self.input.pattern {
            let pattern = patterns::by_name(name)
                .with_context(|| format!("Unknown built-in pattern: {}", name))?;

            if self.input.origin_x + pattern.width() > self.simulation.width
                || self.input.origin_y + pattern.height() > self.simulation.height
            {
                anyhow::bail!(
                    "Pattern '{}' at origin ({}, {}) does not fit a {}x{} grid",
                    name,
                    self.input.origin_x,
                    self.input.origin_y,
                    self.simulation.width,
                    self.simulation.height
                );
            }
        }

        if let Some(path) = &self.input.pattern_file {
            if !path.exists() {
                anyhow::bail!("Pattern file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides.
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.input.pattern = Some(pattern.clone());
            self.input.pattern_file = None;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
            self.input.pattern = None;
        }
        if let Some(frame_delay_ms) = cli_overrides.frame_delay_ms {
            self.output.frame_delay_ms = frame_delay_ms;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub frame_delay_ms: Option<u64>,
    pub format: Option<OutputFormat>,
}
