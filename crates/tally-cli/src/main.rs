//! Tally CLI - Personal finance insights
//!
//! Usage:
//!   tally insights --file snapshot.json --year 2024   Compute insights
//!   tally currencies                                  List currencies
//!   tally format 123456.5 --currency INR              Format an amount
//!   tally serve --port 3000                           Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use tally_core::Settings;

#[tokio::main]
async fn main() -> Result<()> {
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

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Commands::Insights {
            file,
            year,
            today,
            currency,
            json,
        } => commands::cmd_insights(
            &settings,
            file.as_deref(),
            year,
            today.as_deref(),
            currency.as_deref(),
            json,
        ),
        Commands::Currencies => commands::cmd_currencies(&settings),
        Commands::Format {
            amount,
            currency,
            compact,
        } => commands::cmd_format(&settings, amount, currency.as_deref(), compact),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(&settings, host.as_deref(), port, no_auth).await,
    }
}
