//! Best Month Insight
//!
//! Celebrates the month with the highest savings, when that month actually
//! saved money. The engine also reuses [`best_and_worst_month`] for stats.

use crate::models::MonthlySummary;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, Icon, InsightType, Severity};

/// Highest- and lowest-savings months. Ties go to the earliest entry.
pub fn best_and_worst_month(
    monthly: &[MonthlySummary],
) -> Option<(&MonthlySummary, &MonthlySummary)> {
    let first = monthly.first()?;
    let mut best = first;
    let mut worst = first;

    for entry in &monthly[1..] {
        if entry.savings > best.savings {
            best = entry;
        }
        if entry.savings < worst.savings {
            worst = entry;
        }
    }

    Some((best, worst))
}

/// Insight that highlights the best savings month
pub struct BestMonthInsight;

impl BestMonthInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BestMonthInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for BestMonthInsight {
    fn id(&self) -> InsightType {
        InsightType::BestMonth
    }

    fn name(&self) -> &'static str {
        "Best Month"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let Some((best, _)) = best_and_worst_month(&ctx.snapshot.monthly) else {
            return vec![];
        };

        if best.savings <= 0.0 {
            return vec![];
        }

        vec![Finding::new(
            InsightType::BestMonth,
            "best_month",
            Severity::Highlight,
            Icon::Trophy,
            format!("Best Month: {}", best.month),
            format!(
                "You saved {} in {} - your best month this year!",
                ctx.format_currency(best.savings),
                best.month
            ),
        )
        .with_highlight("Try to replicate this success")]
    }
}
