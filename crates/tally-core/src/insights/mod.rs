//! Insight Engine - Financial Insights from an Analytics Snapshot
//!
//! The Insight Engine turns a pre-aggregated analytics snapshot (yearly
//! totals, a monthly series, ranked expense categories and a multi-year
//! series) into warnings, celebrations and tips plus a few summary stats.
//! It performs no I/O: the snapshot, the currency formatter and "today" are
//! all supplied by the caller.
//!
//! ## Analyzers
//!
//! Run in this order, each contributing zero or more findings:
//!
//! - **Overspend** - expense above income for the year
//! - **Savings Rate** - exactly one tier from excellent to none
//! - **Category Concentration** - dominant and discretionary categories
//! - **Month over Month** - spending spikes and reductions
//! - **Overspending Months** - months with negative savings
//! - **Best Month** - the best savings month
//! - **Year over Year** - savings and expense vs the previous year
//!
//! When no warning and no tip was produced, a generic "Keep Tracking!" tip
//! is appended.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let report = engine.compute(Some(&snapshot), &formatter, 2024, today);
//! ```

pub mod best_month;
pub mod category_concentration;
pub mod engine;
pub mod month_over_month;
pub mod overspend;
pub mod overspending_months;
pub mod rules;
pub mod savings_rate;
pub mod types;
pub mod year_over_year;

pub use best_month::BestMonthInsight;
pub use category_concentration::CategoryConcentrationInsight;
pub use engine::{compute_insights, AnalysisContext, CurrencyFormat, Insight, InsightEngine};
pub use month_over_month::MonthOverMonthInsight;
pub use overspend::OverspendInsight;
pub use overspending_months::OverspendingMonthsInsight;
pub use savings_rate::SavingsRateInsight;
pub use types::{
    Finding, FindingKind, Icon, InsightReport, InsightStats, InsightType, Severity,
};
pub use year_over_year::YearOverYearInsight;
