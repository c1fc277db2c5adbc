//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tool:
//! - Analytics snapshot model (yearly totals, monthly and multi-year series)
//! - Insight engine producing warnings, celebrations and tips
//! - Locale-aware currency formatting
//! - Settings loading

pub mod config;
pub mod currency;
pub mod error;
pub mod insights;
pub mod models;

/// Fixture builders for unit tests
#[cfg(test)]
pub mod test_utils;

pub use config::{ServerSettings, Settings};
pub use currency::{Currency, CurrencyFormatter};
pub use error::{Error, Result};
pub use insights::{
    compute_insights, CurrencyFormat, Finding, FindingKind, InsightEngine, InsightReport,
    InsightStats, InsightType, Severity,
};
pub use models::{
    AnalyticsSnapshot, CategoryTotal, Month, MonthlySummary, YearSummary, YearTotal,
};
