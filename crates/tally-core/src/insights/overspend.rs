//! Overspend Insight
//!
//! Flags a year in which total expense exceeded total income.

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, Icon, InsightType, Severity};

/// Insight that flags spending above income
pub struct OverspendInsight;

impl OverspendInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverspendInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for OverspendInsight {
    fn id(&self) -> InsightType {
        InsightType::Overspend
    }

    fn name(&self) -> &'static str {
        "Overspend"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let total = &ctx.snapshot.year_total;
        if total.expense <= total.income {
            return vec![];
        }

        vec![Finding::new(
            InsightType::Overspend,
            "overspend",
            Severity::Critical,
            Icon::WarningTriangle,
            "Spending Exceeds Income!",
            format!(
                "You've spent {} more than you earned this year. This is unsustainable.",
                ctx.format_currency(total.expense - total.income)
            ),
        )
        .with_action("Review your biggest spending categories and cut unnecessary expenses.")]
    }
}
