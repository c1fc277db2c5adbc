//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `currencies` - Currency listing and amount formatting
//! - `insights` - Insight computation and report rendering
//! - `serve` - Web server command

pub mod currencies;
pub mod insights;
pub mod serve;

// Re-export command functions for main.rs
pub use currencies::*;
pub use insights::*;
pub use serve::*;

use anyhow::{Context, Result};
use tally_core::{CurrencyFormatter, Settings};

/// Formatter for an explicit currency code, falling back to settings
pub fn resolve_formatter(settings: &Settings, code: Option<&str>) -> Result<CurrencyFormatter> {
    let code = code.unwrap_or(&settings.currency);
    CurrencyFormatter::for_code(code)
        .with_context(|| format!("Unsupported currency '{}' (see `tally currencies`)", code))
}
