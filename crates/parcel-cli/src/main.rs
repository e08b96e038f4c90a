//! # parcel CLI entry point
//!
//! Parses command-line arguments, resolves configuration, initialises
//! logging and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parcel_cli::config::{Settings, COST_TABLE_ENV};
use parcel_cli::quote::{run_quote, QuoteArgs};
use parcel_cli::table::{run_table, TableArgs};
use parcel_cli::tiers::{run_tiers, TiersArgs};

/// Parcel Rate Stack CLI.
///
/// Prices packages by size and weight against a five-tier cost table.
#[derive(Parser, Debug)]
#[command(name = "parcel", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the cost table file.
    #[arg(long, global = true, env = COST_TABLE_ENV)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a package given its length, width, height (mm) and weight (g).
    Quote(QuoteArgs),

    /// Load and print the configured cost table.
    Table(TableArgs),

    /// Print the size, weight and girth limits of every tier with its price.
    Tiers(TiersArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("parcel CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let settings = match Settings::resolve(cli.table.as_deref(), cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Quote(args) => run_quote(&args, &settings),
        Commands::Table(args) => run_table(&args, &settings),
        Commands::Tiers(args) => run_tiers(&args, &settings),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
