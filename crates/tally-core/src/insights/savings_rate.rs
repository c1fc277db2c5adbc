//! Savings Rate Insight
//!
//! Places the year's savings rate into exactly one tier:
//! - 30%+ excellent, 20%+ good (celebrations)
//! - 10%+ room for improvement (tip)
//! - above 0% low, 0% or less none (warnings)

use super::engine::{savings_rate, AnalysisContext, Insight};
use super::rules::{
    first_match, format_percent, SavingsTier, SAVINGS_RATE_RULES, SAVINGS_TARGET_RATE,
};
use super::types::{Finding, Icon, InsightType, Severity};

/// Insight that grades the savings rate
pub struct SavingsRateInsight;

impl SavingsRateInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsRateInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for SavingsRateInsight {
    fn id(&self) -> InsightType {
        InsightType::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let total = &ctx.snapshot.year_total;
        let rate = savings_rate(total);
        let rate_str = format_percent(rate, 1);

        let Some(tier) = first_match(&SAVINGS_RATE_RULES, rate) else {
            return vec![];
        };

        let finding = match tier {
            SavingsTier::Excellent => Finding::new(
                InsightType::SavingsRate,
                "savings_rate:excellent",
                Severity::Excellent,
                Icon::Trophy,
                "Outstanding Savings Rate!",
                format!(
                    "Amazing! You're saving {} of your income. This puts you in the top tier of savers.",
                    rate_str
                ),
            )
            .with_highlight(format!(
                "{} saved this year",
                ctx.format_currency(total.savings)
            )),
            SavingsTier::Good => Finding::new(
                InsightType::SavingsRate,
                "savings_rate:good",
                Severity::Good,
                Icon::ThumbsUp,
                "Good Savings Habit!",
                format!(
                    "You're saving {} of your income. That's solid financial discipline!",
                    rate_str
                ),
            )
            .with_highlight(format!("{} saved", ctx.format_currency(total.savings))),
            SavingsTier::Improvement => {
                let shortfall = total.income * SAVINGS_TARGET_RATE - total.savings;
                Finding::new(
                    InsightType::SavingsRate,
                    "savings_rate:improvement",
                    Severity::Improvement,
                    Icon::LightBulb,
                    "Room for Improvement",
                    format!(
                        "Your savings rate is {}. Aim for at least 20% for better financial security.",
                        rate_str
                    ),
                )
                .with_action(format!(
                    "Try to save an extra {} per year.",
                    ctx.format_currency(shortfall)
                ))
            }
            SavingsTier::Low => Finding::new(
                InsightType::SavingsRate,
                "savings_rate:low",
                Severity::Warning,
                Icon::ExclamationCircle,
                "Low Savings Rate",
                format!(
                    "You're only saving {} of income. This leaves you vulnerable to emergencies.",
                    rate_str
                ),
            )
            .with_action(
                "Start with small cuts - cancel unused subscriptions, cook at home more often.",
            ),
            SavingsTier::None => Finding::new(
                InsightType::SavingsRate,
                "savings_rate:none",
                Severity::Critical,
                Icon::Fire,
                "No Savings This Year!",
                "You're not saving any money. In fact, you're spending more than you earn.",
            )
            .with_action("Create a budget immediately and track every expense."),
        };

        vec![finding]
    }
}
