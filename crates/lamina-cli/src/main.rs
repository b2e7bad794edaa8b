//! Lamina CLI - Overlay Selection Front End
//!
//! A tool for inspecting overlay registries and resolving selection text
//! against them.

use clap::{Parser, Subcommand};
use lamina_pipeline::DirectoryRegistry;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// Lamina - text-driven overlay selection for model/encoder pairs
#[derive(Parser)]
#[command(name = "lamina")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Additional overlay search path (repeatable)
    #[arg(short, long = "path")]
    paths: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available overlays
    List,

    /// Resolve a selection file against the registry
    Resolve {
        /// Selection text file
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Extract overlay tags from prompt text
    Extract {
        /// Prompt text file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON spec list
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut registry = DirectoryRegistry::new();
    for path in cli.paths {
        registry.add_search_path(path);
    }

    match cli.command {
        Commands::List => commands::list::run(&registry),
        Commands::Resolve { input, format } => commands::resolve::run(&registry, &input, format)?,
        Commands::Extract { input } => commands::extract::run(&registry, &input)?,
    }

    Ok(())
}
