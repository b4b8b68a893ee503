//! Grounded CLI - landscape design canvas and plant catalog tools.
//!
//! Run `grounded viz` to open the design canvas, or query the plant catalog
//! with the same search and filters the canvas uses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::catalog::{CatalogQuery, OutputFormat};
use commands::config as config_cmd;
use config::Config;

/// Grounded CLI - Design gardens by dragging plants onto a canvas.
#[derive(Parser, Debug)]
#[command(
    name = "grounded",
    author,
    version,
    about = "Grounded: landscape design canvas and plant catalog",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the design canvas in a native window.
    Viz,

    /// List catalog plants matching a search and filter chips.
    Catalog {
        /// Case-insensitive substring of the common or scientific name.
        #[arg(short, long)]
        search: Option<String>,

        /// Sunlight requirement: full, partial or shade (repeatable).
        #[arg(long = "sun")]
        sun: Vec<String>,

        /// Water requirement: low, medium or high (repeatable).
        #[arg(long)]
        water: Vec<String>,

        /// Only pet-safe plants.
        #[arg(long)]
        pet_safe: bool,

        /// Only low-maintenance plants.
        #[arg(long)]
        low_maintenance: bool,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the growth projection scale for a year (1-20).
    Scale {
        /// Year on the growth slider (defaults to the configured year).
        #[arg(allow_negative_numbers = true)]
        year: Option<i64>,

        /// Print the scale for every year.
        #[arg(long, conflicts_with = "year")]
        all: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    match cli.command {
        // Config commands must keep working when the config file is broken.
        Commands::Config(command) => run_config(command),
        command => run(command, &Config::load()?),
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Viz => run_viz(config)?,

        Commands::Catalog {
            search,
            sun,
            water,
            pet_safe,
            low_maintenance,
            format,
        } => {
            let catalog = config.load_catalog()?;
            let query = CatalogQuery {
                search,
                sunlight: sun,
                water,
                pet_safe,
                low_maintenance,
            };
            commands::catalog::execute(&catalog, &query, format)?;
        }

        Commands::Scale { year, all } => {
            let year = match year {
                Some(year) => grounded_core::GrowthYear::new(year)?,
                None => config.growth_year,
            };
            commands::scale::execute(year, all)?;
        }

        Commands::Config(command) => run_config(command)?,
    }

    Ok(())
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => config_cmd::show(&Config::load()?),
        ConfigCommands::Get { key } => config_cmd::get(&Config::load()?, &key),
        ConfigCommands::Set { key, value } => {
            // Edit the stored file only; env overrides stay out of it.
            let mut stored = Config::load_file()?;
            config_cmd::set(&mut stored, &key, &value)
        }
        ConfigCommands::Reset => config_cmd::reset(),
        ConfigCommands::Path => {
            if let Some(path) = Config::config_file_path() {
                println!("{}", path.display());
            } else {
                println!("(no config file path available)");
            }
            Ok(())
        }
    }
}

#[cfg(feature = "native-viz")]
fn run_viz(config: &Config) -> Result<()> {
    commands::viz::execute(config)
}

#[cfg(not(feature = "native-viz"))]
fn run_viz(_config: &Config) -> Result<()> {
    anyhow::bail!("The design canvas is not built in. Rebuild with `--features native-viz`.")
}
