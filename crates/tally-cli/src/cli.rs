//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Turn your yearly numbers into actionable insights
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance insights from analytics snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the platform config dir, then built-in defaults)
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
    /// Compute insights for an analytics snapshot
    Insights {
        /// Snapshot JSON file ("-" or omitted reads stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Selected year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Override today's date (YYYY-MM-DD) for month-over-month checks
        #[arg(long)]
        today: Option<String>,

        /// Currency code for amounts (overrides settings)
        #[arg(short, long)]
        currency: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported currencies
    Currencies,

    /// Format an amount in a currency
    Format {
        /// Amount to format
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Currency code (overrides settings)
        #[arg(short, long)]
        currency: Option<String>,

        /// Use compact units (K, L, Cr / K, M, B)
        #[arg(long)]
        compact: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on (defaults to settings)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to settings)
        #[arg(long)]
        host: Option<String>,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires an API key from TALLY_API_KEYS.
        #[arg(long)]
        no_auth: bool,
    },
}
