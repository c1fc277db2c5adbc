//! Category Concentration Insight
//!
//! Looks at how much of the year's expense goes to the top categories:
//! - The #1 category taking over 40% (warning) or over 25% (tip)
//! - Discretionary categories (dining, shopping, ...) ranked in the top 3
//!   that take over 15% each get a "no-spend week" suggestion

use super::engine::{AnalysisContext, Insight};
use super::rules::{
    first_match, format_percent, is_watched_category, percent_of, CategoryShare,
    CATEGORY_SHARE_RULES, WATCH_RANK_LIMIT, WATCH_SHARE_THRESHOLD,
};
use super::types::{Finding, Icon, InsightType, Severity};

/// Insight that flags spending concentrated in a few categories
pub struct CategoryConcentrationInsight;

impl CategoryConcentrationInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CategoryConcentrationInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for CategoryConcentrationInsight {
    fn id(&self) -> InsightType {
        InsightType::CategoryConcentration
    }

    fn name(&self) -> &'static str {
        "Category Concentration"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let categories = &ctx.snapshot.top_categories;
        let Some(top) = categories.first() else {
            return vec![];
        };

        let mut findings = Vec::new();
        let expense = ctx.snapshot.year_total.expense;
        let top_percent = percent_of(top.total, expense);

        match first_match(&CATEGORY_SHARE_RULES, top_percent) {
            Some(CategoryShare::Dominant) => findings.push(
                Finding::new(
                    InsightType::CategoryConcentration,
                    "category:dominant",
                    Severity::Warning,
                    Icon::ExclamationCircle,
                    format!("\"{}\" Dominates Spending", top.id),
                    format!(
                        "{} of all expenses go to {}. That's {} this year!",
                        format_percent(top_percent, 1),
                        top.id,
                        ctx.format_currency(top.total)
                    ),
                )
                .with_action("Consider if all these expenses are necessary or if you can reduce them."),
            ),
            Some(CategoryShare::Highest) => findings.push(
                Finding::new(
                    InsightType::CategoryConcentration,
                    "category:highest",
                    Severity::Info,
                    Icon::LightBulb,
                    format!("Highest Spending: {}", top.id),
                    format!(
                        "{} of expenses ({}) - this is your biggest spending area.",
                        format_percent(top_percent, 1),
                        ctx.format_currency(top.total)
                    ),
                )
                .with_action("Review if there are ways to optimize this category."),
            ),
            None => {}
        }

        for category in categories.iter().take(WATCH_RANK_LIMIT) {
            if !is_watched_category(&category.id) {
                continue;
            }

            let share = percent_of(category.total, expense);
            if share <= WATCH_SHARE_THRESHOLD {
                continue;
            }

            findings.push(
                Finding::new(
                    InsightType::CategoryConcentration,
                    format!("category:watch:{}", category.id),
                    Severity::Suggestion,
                    Icon::Bolt,
                    format!("Watch \"{}\" Spending", category.id),
                    format!(
                        "You've spent {} ({}) on {}. This category often has hidden savings potential.",
                        ctx.format_currency(category.total),
                        format_percent(share, 1),
                        category.id
                    ),
                )
                .with_action(format!(
                    "Try a \"no-spend week\" challenge for {}.",
                    category.id
                )),
            );
        }

        tracing::debug!(
            top = %top.id,
            top_percent,
            findings = findings.len(),
            "Category concentration analyzed"
        );

        findings
    }
}
