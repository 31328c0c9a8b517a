//! Main CLI application: a driving loop for the Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, OutputFormat, Settings},
    life::{write_example_patterns, Simulator},
    seeded_simulator,
    utils::{ColorOutput, GridFormatter, PatternClass, RunReport},
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Built-in seed pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Seed file defining the whole starting grid (overrides config)
        #[arg(long)]
        pattern_file: Option<PathBuf>,

        /// Pause between frames in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Create example configuration and seed pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Classify how a seed behaves over a bounded horizon
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Built-in seed pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Seed file defining the whole starting grid (overrides config)
        #[arg(long)]
        pattern_file: Option<PathBuf>,

        /// Maximum generations to observe
        #[arg(long, default_value_t = 64)]
        horizon: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            pattern,
            pattern_file,
            delay_ms,
            format,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                pattern,
                pattern_file,
                frame_delay_ms: delay_ms,
                format,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Analyze {
            config,
            pattern,
            pattern_file,
            horizon,
        } => analyze_command(config, pattern, pattern_file, horizon),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut simulator = seeded_simulator(&settings).context("Failed to seed the grid")?;

    match settings.output.format {
        OutputFormat::Text => {
            println!(
                "{}",
                ColorOutput::info(&format!(
                    "🔄 Running a {}x{} grid for {} generations",
                    simulator.grid().width(),
                    simulator.grid().height(),
                    settings.simulation.generations
                ))
            );

            render_frame(&simulator);

            for _ in 0..settings.simulation.generations {
                if settings.output.show_each_generation && settings.output.frame_delay_ms > 0 {
                    thread::sleep(Duration::from_millis(settings.output.frame_delay_ms));
                }

                simulator.advance();

                if settings.output.show_each_generation {
                    render_frame(&simulator);
                }
            }

            if !settings.output.show_each_generation && settings.simulation.generations > 0 {
                render_frame(&simulator);
            }

            println!(
                "{}",
                ColorOutput::success(&format!(
                    "✅ Done: {} generations, {} cells alive",
                    simulator.generation(),
                    simulator.grid().living_count()
                ))
            );
        }
        OutputFormat::Json => {
            let report =
                RunReport::from_run(&mut simulator, settings.simulation.generations, false);
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
            println!("{}", json);
        }
        OutputFormat::Quiet => {
            let report =
                RunReport::from_run(&mut simulator, settings.simulation.generations, false);
            println!("{}", report);
        }
    }

    Ok(())
}

fn render_frame(simulator: &Simulator) {
    println!(
        "Generation {} (living: {}):",
        simulator.generation(),
        simulator.grid().living_count()
    );
    println!("{}", GridFormatter::compact(simulator.grid()));
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    write_example_patterns(&patterns_dir).context("Failed to create example seed patterns")?;
    println!("Created example seed patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration in {}", config_path.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Try: cargo run -- analyze --pattern blinker");

    Ok(())
}

fn analyze_command(
    config_path: PathBuf,
    pattern: Option<String>,
    pattern_file: Option<PathBuf>,
    horizon: usize,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing seed behavior..."));

    let mut settings = load_settings(&config_path)?;
    let overrides = CliOverrides {
        pattern,
        pattern_file,
        ..Default::default()
    };
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut simulator = seeded_simulator(&settings).context("Failed to seed the grid")?;
    let grid = simulator.grid();

    println!("Seed ({}x{}):", grid.width(), grid.height());
    println!("{}", GridFormatter::with_coords(grid));
    println!("Living cells: {}", grid.living_count());
    println!(
        "Density: {:.1}%",
        (grid.living_count() as f64 / (grid.width() * grid.height()) as f64) * 100.0
    );

    let report = RunReport::from_run(&mut simulator, horizon, true);

    println!();
    println!("{}", report);

    match report.classification {
        PatternClass::Unresolved => println!(
            "{}",
            ColorOutput::warning(&format!(
                "❌ No repeat observed within {} generations",
                horizon
            ))
        ),
        _ => println!(
            "{}",
            ColorOutput::success(&format!("✅ Classified: {}", report.classification))
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_sim",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--pattern",
            "glider",
            "--format",
            "json",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_setup_skips_existing_config_without_force() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let config_path = temp_dir.path().join("config/default.yaml");
        std::fs::write(&config_path, "sentinel").unwrap();

        setup_command(temp_dir.path().to_path_buf(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "sentinel");
    }
}
