//! Year-over-Year Insight
//!
//! Compares the selected year with the year before it. Both years must be
//! present in the multi-year series; they are looked up by value.
//!
//! The savings threshold is a plain 10% of last year's savings. When last
//! year's savings were negative the threshold is negative too; no sign
//! correction is applied.

use super::engine::{AnalysisContext, Insight};
use super::rules::{format_percent, percent_of, YOY_EXPENSE_THRESHOLD, YOY_SAVINGS_THRESHOLD};
use super::types::{Finding, Icon, InsightType, Severity};

/// Insight that compares savings and expense with the previous year
pub struct YearOverYearInsight;

impl YearOverYearInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YearOverYearInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for YearOverYearInsight {
    fn id(&self) -> InsightType {
        InsightType::YearOverYear
    }

    fn name(&self) -> &'static str {
        "Year over Year"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let snapshot = ctx.snapshot;
        if snapshot.yearly.len() < 2 {
            return vec![];
        }

        let Some(prev_year) = ctx.year.checked_sub(1) else {
            return vec![];
        };
        let (Some(current), Some(previous)) = (snapshot.year(ctx.year), snapshot.year(prev_year))
        else {
            return vec![];
        };

        let mut findings = Vec::new();
        let savings_change = current.savings - previous.savings;
        let expense_change = current.expense - previous.expense;
        let savings_threshold = previous.savings * YOY_SAVINGS_THRESHOLD;

        if savings_change > 0.0 && savings_change > savings_threshold {
            findings.push(
                Finding::new(
                    InsightType::YearOverYear,
                    "year_over_year:improved",
                    Severity::Excellent,
                    Icon::ShieldCheck,
                    "Improved from Last Year!",
                    format!(
                        "Your savings increased by {} compared to {}.",
                        ctx.format_currency(savings_change),
                        prev_year
                    ),
                )
                .with_highlight("Keep up the momentum!"),
            );
        } else if savings_change < 0.0 && savings_change.abs() > savings_threshold {
            findings.push(
                Finding::new(
                    InsightType::YearOverYear,
                    "year_over_year:dropped",
                    Severity::Warning,
                    Icon::TrendingDown,
                    "Savings Dropped from Last Year",
                    format!(
                        "Your savings decreased by {} compared to {}.",
                        ctx.format_currency(savings_change.abs()),
                        prev_year
                    ),
                )
                .with_action("Analyze what changed and adjust your spending."),
            );
        }

        if expense_change > previous.expense * YOY_EXPENSE_THRESHOLD {
            findings.push(
                Finding::new(
                    InsightType::YearOverYear,
                    "year_over_year:expense_rising",
                    Severity::Warning,
                    Icon::ExclamationCircle,
                    "Expenses Rising vs Last Year",
                    format!(
                        "You're spending {} more than {}. That's a {} increase.",
                        ctx.format_currency(expense_change),
                        prev_year,
                        format_percent(percent_of(expense_change, previous.expense), 0)
                    ),
                )
                .with_action("Make sure this increase is justified (inflation, life changes, etc.)"),
            );
        }

        findings
    }
}
