//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::MonthlySummary;

/// Analyzers that can contribute findings to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Yearly expense exceeds yearly income
    Overspend,
    /// Savings-rate tiering
    SavingsRate,
    /// Share of spending taken by the top categories
    CategoryConcentration,
    /// Current month vs previous month expense
    MonthOverMonth,
    /// Months with negative savings
    OverspendingMonths,
    /// Best savings month of the year
    BestMonth,
    /// Selected year vs the year before
    YearOverYear,
    /// Fallback encouragement when nothing else needs attention
    General,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Overspend => "overspend",
            InsightType::SavingsRate => "savings_rate",
            InsightType::CategoryConcentration => "category_concentration",
            InsightType::MonthOverMonth => "month_over_month",
            InsightType::OverspendingMonths => "overspending_months",
            InsightType::BestMonth => "best_month",
            InsightType::YearOverYear => "year_over_year",
            InsightType::General => "general",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overspend" => Ok(InsightType::Overspend),
            "savings_rate" => Ok(InsightType::SavingsRate),
            "category_concentration" => Ok(InsightType::CategoryConcentration),
            "month_over_month" => Ok(InsightType::MonthOverMonth),
            "overspending_months" => Ok(InsightType::OverspendingMonths),
            "best_month" => Ok(InsightType::BestMonth),
            "year_over_year" => Ok(InsightType::YearOverYear),
            "general" => Ok(InsightType::General),
            _ => Err(format!("Unknown insight type: {}", s)),
        }
    }
}

/// Which report bucket a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    Warning,
    Celebration,
    Tip,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Warning => "warning",
            FindingKind::Celebration => "celebration",
            FindingKind::Tip => "tip",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity subtype of a finding. Each severity belongs to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Warning: needs immediate attention
    Critical,
    /// Warning: worth attention
    Warning,
    /// Celebration: top-tier result
    Excellent,
    /// Celebration: solid result
    Good,
    /// Celebration: a standout fact
    Highlight,
    /// Tip: close to a better tier
    Improvement,
    /// Tip: informational
    Info,
    /// Tip: concrete challenge to try
    Suggestion,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Excellent => "excellent",
            Severity::Good => "good",
            Severity::Highlight => "highlight",
            Severity::Improvement => "improvement",
            Severity::Info => "info",
            Severity::Suggestion => "suggestion",
        }
    }

    /// Bucket this severity is reported under
    pub fn kind(&self) -> FindingKind {
        match self {
            Severity::Critical | Severity::Warning => FindingKind::Warning,
            Severity::Excellent | Severity::Good | Severity::Highlight => {
                FindingKind::Celebration
            }
            Severity::Improvement | Severity::Info | Severity::Suggestion => FindingKind::Tip,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Severity::Critical),
            "warning" => Ok(Severity::Warning),
            "excellent" => Ok(Severity::Excellent),
            "good" => Ok(Severity::Good),
            "highlight" => Ok(Severity::Highlight),
            "improvement" => Ok(Severity::Improvement),
            "info" => Ok(Severity::Info),
            "suggestion" => Ok(Severity::Suggestion),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Symbolic icon reference, resolved to artwork by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    WarningTriangle,
    ExclamationCircle,
    Fire,
    Trophy,
    ThumbsUp,
    ShieldCheck,
    TrendingUp,
    TrendingDown,
    LightBulb,
    Bolt,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::WarningTriangle => "warning_triangle",
            Icon::ExclamationCircle => "exclamation_circle",
            Icon::Fire => "fire",
            Icon::Trophy => "trophy",
            Icon::ThumbsUp => "thumbs_up",
            Icon::ShieldCheck => "shield_check",
            Icon::TrendingUp => "trending_up",
            Icon::TrendingDown => "trending_down",
            Icon::LightBulb => "light_bulb",
            Icon::Bolt => "bolt",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single generated insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Bucket (warning, celebration, tip)
    #[serde(rename = "category")]
    pub kind: FindingKind,
    /// Severity subtype within the bucket
    pub severity: Severity,
    /// Analyzer that produced this finding
    pub insight_type: InsightType,
    /// Stable rule key (e.g., "savings_rate:excellent")
    pub key: String,
    /// Symbolic icon for the presentation layer
    #[serde(rename = "iconRef")]
    pub icon: Icon,
    /// Short title (e.g., "Low Savings Rate")
    pub title: String,
    /// Message with formatted amounts/percentages embedded
    pub message: String,
    /// Recommended remediation (warnings and tips)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action: Option<String>,
    /// Short reinforcing fact (celebrations)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub highlight: Option<String>,
}

impl Finding {
    /// Create a new finding; the bucket follows from the severity
    pub fn new(
        insight_type: InsightType,
        key: impl Into<String>,
        severity: Severity,
        icon: Icon,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: severity.kind(),
            severity,
            insight_type,
            key: key.into(),
            icon,
            title: title.into(),
            message: message.into(),
            action: None,
            highlight: None,
        }
    }

    /// Add a recommended action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Add a highlight line
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }
}

/// Scalar statistics derived alongside the findings.
///
/// All fields are absent on the empty report, so it serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_monthly_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_monthly_expense: Option<f64>,
    /// Savings rate as a percentage (not a fraction)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_month: Option<MonthlySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_month: Option<MonthlySummary>,
}

/// Full output of one engine run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub warnings: Vec<Finding>,
    pub celebrations: Vec<Finding>,
    pub tips: Vec<Finding>,
    pub stats: InsightStats,
}

impl InsightReport {
    /// Report for an absent snapshot: no findings and no stats
    pub fn empty() -> Self {
        Self::default()
    }

    /// Route a finding to its bucket
    pub fn push(&mut self, finding: Finding) {
        match finding.kind {
            FindingKind::Warning => self.warnings.push(finding),
            FindingKind::Celebration => self.celebrations.push(finding),
            FindingKind::Tip => self.tips.push(finding),
        }
    }

    /// Total number of findings across all buckets
    pub fn len(&self) -> usize {
        self.warnings.len() + self.celebrations.len() + self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate warnings, then celebrations, then tips
    pub fn all(&self) -> impl Iterator<Item = &Finding> {
        self.warnings
            .iter()
            .chain(self.celebrations.iter())
            .chain(self.tips.iter())
    }

    /// Find a finding by its rule key
    pub fn find(&self, key: &str) -> Option<&Finding> {
        self.all().find(|f| f.key == key)
    }
}
