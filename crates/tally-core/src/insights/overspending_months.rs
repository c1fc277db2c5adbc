//! Overspending Months Insight
//!
//! Counts months in which savings went negative.

use super::engine::{AnalysisContext, Insight};
use super::rules::{first_match, month_names, OverspendFrequency, OVERSPEND_MONTH_RULES};
use super::types::{Finding, Icon, InsightType, Severity};

/// Insight that lists months spent beyond income
pub struct OverspendingMonthsInsight;

impl OverspendingMonthsInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverspendingMonthsInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for OverspendingMonthsInsight {
    fn id(&self) -> InsightType {
        InsightType::OverspendingMonths
    }

    fn name(&self) -> &'static str {
        "Overspending Months"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let negative: Vec<_> = ctx
            .snapshot
            .monthly
            .iter()
            .filter(|m| m.savings < 0.0)
            .collect();
        let count = negative.len();

        let finding = match first_match(&OVERSPEND_MONTH_RULES, count as f64) {
            Some(OverspendFrequency::Frequent) => Finding::new(
                InsightType::OverspendingMonths,
                "overspending_months:frequent",
                Severity::Critical,
                Icon::Fire,
                "Frequent Overspending!",
                format!(
                    "You overspent in {} months this year: {}.",
                    count,
                    month_names(&negative)
                ),
            )
            .with_action("Set up a monthly budget and stick to it."),
            Some(OverspendFrequency::Occasional) => Finding::new(
                InsightType::OverspendingMonths,
                "overspending_months:occasional",
                Severity::Info,
                Icon::LightBulb,
                "Some Overspending Months",
                format!(
                    "You overspent in {} month(s): {}.",
                    count,
                    month_names(&negative)
                ),
            )
            .with_action("Plan ahead for high-expense months."),
            None => return vec![],
        };

        vec![finding]
    }
}
