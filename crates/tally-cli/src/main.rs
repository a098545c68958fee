//! Tally CLI - Spending insights from an expense snapshot
//!
//! Usage:
//!   tally insights --file data.json          Show the top insight
//!   tally insights --file data.json --all    Show every insight, ranked
//!   tally config show                        Print effective thresholds

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Insights {
            file,
            date,
            all,
            json,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            let date = commands::resolve_date(date.as_deref())?;
            commands::cmd_insights(&file, &config, date, all, json)
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(cli.config.as_deref()),
            Some(ConfigAction::Path) => commands::cmd_config_path(),
        },
    }
}
