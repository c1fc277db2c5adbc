//! Insight Engine - orchestrates analyzers over one analytics snapshot

use chrono::{Datelike, NaiveDate};

use crate::models::{AnalyticsSnapshot, Month, MonthlySummary, YearTotal};

use super::best_month::best_and_worst_month;
use super::rules::percent_of;
use super::types::{Finding, Icon, InsightReport, InsightStats, InsightType, Severity};
use super::{
    BestMonthInsight, CategoryConcentrationInsight, MonthOverMonthInsight,
    OverspendInsight, OverspendingMonthsInsight, SavingsRateInsight, YearOverYearInsight,
};

/// Formats currency amounts for insight messages.
///
/// The engine never formats money itself; callers inject a formatter. Any
/// `Fn(f64) -> String` closure can be used directly.
pub trait CurrencyFormat {
    fn format(&self, amount: f64) -> String;
}

impl<F> CurrencyFormat for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, amount: f64) -> String {
        self(amount)
    }
}

/// Context provided to insight analyzers
pub struct AnalysisContext<'a> {
    /// Snapshot being analyzed
    pub snapshot: &'a AnalyticsSnapshot,
    /// Injected currency formatter
    pub formatter: &'a dyn CurrencyFormat,
    /// Selected year (drives year-over-year lookups)
    pub year: i32,
    /// "Now" for month-over-month lookups
    pub today: NaiveDate,
}

impl<'a> AnalysisContext<'a> {
    /// Create a new analysis context with an explicit clock
    pub fn new(
        snapshot: &'a AnalyticsSnapshot,
        formatter: &'a dyn CurrencyFormat,
        year: i32,
        today: NaiveDate,
    ) -> Self {
        Self {
            snapshot,
            formatter,
            year,
            today,
        }
    }

    pub fn format_currency(&self, amount: f64) -> String {
        self.formatter.format(amount)
    }

    pub fn current_month(&self) -> Option<Month> {
        Month::from_number(self.today.month())
    }

    /// Monthly entry for the current calendar month
    pub fn current_month_entry(&self) -> Option<&'a MonthlySummary> {
        self.month_entry(self.current_month()?)
    }

    /// Monthly entry for the previous calendar month (never wraps into December)
    pub fn previous_month_entry(&self) -> Option<&'a MonthlySummary> {
        self.month_entry(self.current_month()?.previous()?)
    }

    fn month_entry(&self, month: Month) -> Option<&'a MonthlySummary> {
        self.snapshot
            .monthly
            .iter()
            .find(|m| m.calendar_month() == Some(month))
    }
}

/// Trait for insight analyzers
pub trait Insight: Send + Sync {
    /// Unique identifier for this insight type
    fn id(&self) -> InsightType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze the snapshot and produce findings
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding>;
}

/// The main insight engine that orchestrates analysis
pub struct InsightEngine {
    insights: Vec<Box<dyn Insight>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new insight engine with built-in insight types.
    ///
    /// Registration order is emission order within each report bucket.
    pub fn new() -> Self {
        let mut engine = Self { insights: vec![] };

        engine.register(Box::new(OverspendInsight::new()));
        engine.register(Box::new(SavingsRateInsight::new()));
        engine.register(Box::new(CategoryConcentrationInsight::new()));
        engine.register(Box::new(MonthOverMonthInsight::new()));
        engine.register(Box::new(OverspendingMonthsInsight::new()));
        engine.register(Box::new(BestMonthInsight::new()));
        engine.register(Box::new(YearOverYearInsight::new()));

        engine
    }

    /// Register an insight analyzer (runs after those already registered)
    pub fn register(&mut self, insight: Box<dyn Insight>) {
        self.insights.push(insight);
    }

    /// Get list of registered insight types
    pub fn insight_types(&self) -> Vec<InsightType> {
        self.insights.iter().map(|i| i.id()).collect()
    }

    /// Compute a report; an absent snapshot yields the empty report
    pub fn compute(
        &self,
        snapshot: Option<&AnalyticsSnapshot>,
        formatter: &dyn CurrencyFormat,
        year: i32,
        today: NaiveDate,
    ) -> InsightReport {
        let Some(snapshot) = snapshot else {
            return InsightReport::empty();
        };

        let ctx = AnalysisContext::new(snapshot, formatter, year, today);
        self.analyze(&ctx)
    }

    /// Run every analyzer over the context and assemble the report
    pub fn analyze(&self, ctx: &AnalysisContext<'_>) -> InsightReport {
        let mut report = InsightReport {
            stats: basic_stats(&ctx.snapshot.year_total),
            ..InsightReport::empty()
        };

        if let Some((best, worst)) = best_and_worst_month(&ctx.snapshot.monthly) {
            report.stats.best_month = Some(best.clone());
            report.stats.worst_month = Some(worst.clone());
        }

        for insight in &self.insights {
            let findings = insight.analyze(ctx);
            tracing::debug!(
                insight = insight.id().as_str(),
                name = insight.name(),
                count = findings.len(),
                "Insight analysis complete"
            );
            for finding in findings {
                report.push(finding);
            }
        }

        // Celebrations alone do not silence the report
        if report.warnings.is_empty() && report.tips.is_empty() {
            report.push(keep_tracking());
        }

        tracing::debug!(
            year = ctx.year,
            warnings = report.warnings.len(),
            celebrations = report.celebrations.len(),
            tips = report.tips.len(),
            "Insight report computed"
        );

        report
    }
}

/// Compute a report with the built-in analyzers
pub fn compute_insights(
    snapshot: Option<&AnalyticsSnapshot>,
    formatter: &dyn CurrencyFormat,
    year: i32,
    today: NaiveDate,
) -> InsightReport {
    InsightEngine::new().compute(snapshot, formatter, year, today)
}

/// Savings as a percentage of income (0 when there is no income)
pub fn savings_rate(total: &YearTotal) -> f64 {
    percent_of(total.savings, total.income)
}

fn basic_stats(total: &YearTotal) -> InsightStats {
    let per_month = |amount: f64| if amount != 0.0 { amount / 12.0 } else { 0.0 };

    InsightStats {
        avg_monthly_income: Some(per_month(total.income)),
        avg_monthly_expense: Some(per_month(total.expense)),
        savings_rate: Some(savings_rate(total)),
        best_month: None,
        worst_month: None,
    }
}

fn keep_tracking() -> Finding {
    Finding::new(
        InsightType::General,
        "general:keep_tracking",
        Severity::Info,
        Icon::LightBulb,
        "Keep Tracking!",
        "Consistent tracking is the first step to financial awareness.",
    )
    .with_action("Log all your transactions to get better insights.")
}
