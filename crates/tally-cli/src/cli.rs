//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Spending insights for your expense tracker
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Surface spending insights from an expense snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Insight threshold config (TOML)
    ///
    /// Defaults to ~/.local/share/tally/config/insights.toml when present,
    /// otherwise the built-in thresholds.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a data snapshot and show insights
    Insights {
        /// Snapshot JSON file ({expenses, categories, budget})
        #[arg(short, long)]
        file: PathBuf,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Show every insight instead of only the top one
        #[arg(short, long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect the insight threshold configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML (default)
    Show,
    /// Print the user override path
    Path,
}
