//! Main CLI application for the sparse Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_engine::{
    config::{CliOverrides, Settings},
    universe::{create_example_patterns, Universe, Viewport},
    utils::{ColorOutput, PopulationFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "life-engine")]
#[command(about = "Sparse Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a saved population
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Number of generations to advance (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Save the final population to this file (overrides config)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Print the population after every generation
        #[arg(long)]
        show_each: bool,
    },

    /// Show statistics for a saved population file
    Info {
        /// Population file path
        file: PathBuf,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            generations,
            save,
            show_each,
        } => run_command(config, pattern, generations, save, show_each),
        Commands::Info { file } => info_command(file),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    generations: Option<u64>,
    save: Option<PathBuf>,
    show_each: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        generations,
        pattern_file: pattern,
        save_file: save,
        show_each_generation: show_each,
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    let mut universe = Universe::new();
    let size = universe
        .load_from_file(&settings.input.pattern_file)
        .with_context(|| {
            format!(
                "Failed to load pattern from {}",
                settings.input.pattern_file.display()
            )
        })?;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Loaded {} cells at generation {} (viewport {})",
            universe.count(),
            universe.generation(),
            size
        ))
    );

    // Simulation loop
    let mut extinct = false;
    for _ in 0..settings.simulation.generations {
        let alive = universe.advance();

        if settings.simulation.show_each_generation {
            println!("\n{}", PopulationFormatter::format_summary(&universe));
            print!("{}", PopulationFormatter::format_universe(&universe));
        }

        if !alive {
            extinct = true;
            if settings.simulation.stop_on_extinction {
                break;
            }
        }
    }

    if !settings.simulation.show_each_generation {
        println!("\n{}", PopulationFormatter::format_summary(&universe));
        print!("{}", PopulationFormatter::format_universe(&universe));
    }

    if extinct {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Population went extinct by generation {}",
                universe.generation()
            ))
        );
    }

    // Save final state
    if let Some(ref save_file) = settings.output.save_file {
        let viewport: Viewport = settings
            .output
            .viewport
            .parse()
            .context("Invalid viewport setting")?;

        universe
            .save_to_file(save_file, viewport)
            .with_context(|| format!("Failed to save population to {}", save_file.display()))?;

        println!(
            "{}",
            ColorOutput::success(&format!("Population saved to {}", save_file.display()))
        );
    }

    Ok(())
}

fn info_command(file: PathBuf) -> Result<()> {
    let mut universe = Universe::new();
    let size = universe
        .load_from_file(&file)
        .with_context(|| format!("Failed to load population from {}", file.display()))?;

    println!("Population file: {}", file.display());
    println!("Viewport: {}", size);
    println!("{}", PopulationFormatter::format_summary(&universe));
    print!("{}", PopulationFormatter::format_universe(&universe));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/patterns");
    let output_dir = directory.join("output/populations");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example patterns
    create_example_patterns(&input_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your patterns to {}", input_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
