//! Month-over-Month Insight
//!
//! Compares the current calendar month's expense with the previous month's.
//! "Current" comes from the context clock, so the result depends on `today`.

use super::engine::{AnalysisContext, Insight};
use super::rules::{first_match, format_percent, percent_of, MonthlyChange, MONTHLY_CHANGE_RULES};
use super::types::{Finding, Icon, InsightType, Severity};

/// Insight that flags spending spikes and drops between consecutive months
pub struct MonthOverMonthInsight;

impl MonthOverMonthInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MonthOverMonthInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for MonthOverMonthInsight {
    fn id(&self) -> InsightType {
        InsightType::MonthOverMonth
    }

    fn name(&self) -> &'static str {
        "Month over Month"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let (Some(current), Some(previous)) =
            (ctx.current_month_entry(), ctx.previous_month_entry())
        else {
            return vec![];
        };

        let change = current.expense - previous.expense;
        let change_percent = percent_of(change, previous.expense);

        let finding = match first_match(&MONTHLY_CHANGE_RULES, change_percent) {
            Some(MonthlyChange::Spike) => Finding::new(
                InsightType::MonthOverMonth,
                "month_over_month:spike",
                Severity::Warning,
                Icon::TrendingUp,
                "Spending Spike Detected!",
                format!(
                    "This month's expenses are {} higher than last month ({} more).",
                    format_percent(change_percent, 0),
                    ctx.format_currency(change)
                ),
            )
            .with_action("Review recent transactions to identify the cause."),
            Some(MonthlyChange::Reduction) => Finding::new(
                InsightType::MonthOverMonth,
                "month_over_month:reduction",
                Severity::Good,
                Icon::TrendingDown,
                "Great Spending Reduction!",
                format!(
                    "You spent {} less this month compared to last month!",
                    format_percent(change_percent.abs(), 0)
                ),
            )
            .with_highlight(format!("{} saved", ctx.format_currency(change.abs()))),
            None => return vec![],
        };

        vec![finding]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalyticsSnapshot, MonthlySummary};
    use crate::test_utils::{date, month, usd};
    use chrono::NaiveDate;

    fn run(monthly: Vec<MonthlySummary>, today: NaiveDate) -> Vec<Finding> {
        let snapshot = AnalyticsSnapshot {
            monthly,
            ..Default::default()
        };
        let ctx = AnalysisContext::new(&snapshot, &usd, 2024, today);
        MonthOverMonthInsight::new().analyze(&ctx)
    }

    #[test]
    fn test_spending_spike() {
        let findings = run(
            vec![month("Apr", 5000.0, 1000.0), month("May", 5000.0, 1500.0)],
            date(2024, 5, 20),
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].key, "month_over_month:spike");
        assert_eq!(
            findings[0].message,
            "This month's expenses are 50% higher than last month ($500.00 more)."
        );
    }

    #[test]
    fn test_spending_reduction() {
        let findings = run(
            vec![month("Apr", 5000.0, 2000.0), month("May", 5000.0, 1000.0)],
            date(2024, 5, 20),
        );

        assert_eq!(findings[0].key, "month_over_month:reduction");
        assert_eq!(findings[0].kind, crate::insights::FindingKind::Celebration);
        assert_eq!(findings[0].highlight.as_deref(), Some("$1000.00 saved"));
    }

    #[test]
    fn test_moderate_change_is_silent() {
        let findings = run(
            vec![month("Apr", 5000.0, 1000.0), month("May", 5000.0, 1200.0)],
            date(2024, 5, 20),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_previous_month() {
        let findings = run(vec![month("May", 5000.0, 9000.0)], date(2024, 5, 20));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_zero_previous_expense_is_no_change() {
        let findings = run(
            vec![month("Apr", 5000.0, 0.0), month("May", 5000.0, 3000.0)],
            date(2024, 5, 20),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_january_never_compares_with_december() {
        let findings = run(
            vec![month("Jan", 5000.0, 4000.0), month("Dec", 5000.0, 100.0)],
            date(2025, 1, 5),
        );
        assert!(findings.is_empty());
    }
}
