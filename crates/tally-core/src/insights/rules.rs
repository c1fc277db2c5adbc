//! Threshold tables and numeric helpers shared by the analyzers
//!
//! Every tiered decision is an ordered table of [`ThresholdRule`]s evaluated
//! top to bottom; the first rule whose bound matches wins. Boundary values
//! therefore belong to whichever tier is listed first.

use crate::models::MonthlySummary;

/// Comparison applied to the rule's input value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value >= x
    AtLeast(f64),
    /// value > x
    Above(f64),
    /// value < x
    Below(f64),
    /// value <= x
    AtMost(f64),
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Bound::AtLeast(x) => value >= x,
            Bound::Above(x) => value > x,
            Bound::Below(x) => value < x,
            Bound::AtMost(x) => value <= x,
        }
    }
}

/// One row of a first-match-wins table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule<T> {
    pub bound: Bound,
    pub outcome: T,
}

/// Outcome of the first rule matching `value`, if any
pub fn first_match<T: Copy>(rules: &[ThresholdRule<T>], value: f64) -> Option<T> {
    rules
        .iter()
        .find(|rule| rule.bound.matches(value))
        .map(|rule| rule.outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsTier {
    Excellent,
    Good,
    Improvement,
    Low,
    None,
}

/// Savings rate (percent) tiers
pub const SAVINGS_RATE_RULES: [ThresholdRule<SavingsTier>; 5] = [
    ThresholdRule {
        bound: Bound::AtLeast(30.0),
        outcome: SavingsTier::Excellent,
    },
    ThresholdRule {
        bound: Bound::AtLeast(20.0),
        outcome: SavingsTier::Good,
    },
    ThresholdRule {
        bound: Bound::AtLeast(10.0),
        outcome: SavingsTier::Improvement,
    },
    ThresholdRule {
        bound: Bound::Above(0.0),
        outcome: SavingsTier::Low,
    },
    ThresholdRule {
        bound: Bound::AtMost(0.0),
        outcome: SavingsTier::None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryShare {
    Dominant,
    Highest,
}

/// Top category share of total expense (percent)
pub const CATEGORY_SHARE_RULES: [ThresholdRule<CategoryShare>; 2] = [
    ThresholdRule {
        bound: Bound::Above(40.0),
        outcome: CategoryShare::Dominant,
    },
    ThresholdRule {
        bound: Bound::Above(25.0),
        outcome: CategoryShare::Highest,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyChange {
    Spike,
    Reduction,
}

/// Current vs previous month expense change (percent)
pub const MONTHLY_CHANGE_RULES: [ThresholdRule<MonthlyChange>; 2] = [
    ThresholdRule {
        bound: Bound::Above(30.0),
        outcome: MonthlyChange::Spike,
    },
    ThresholdRule {
        bound: Bound::Below(-20.0),
        outcome: MonthlyChange::Reduction,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverspendFrequency {
    Frequent,
    Occasional,
}

/// Number of months with negative savings
pub const OVERSPEND_MONTH_RULES: [ThresholdRule<OverspendFrequency>; 2] = [
    ThresholdRule {
        bound: Bound::Above(3.0),
        outcome: OverspendFrequency::Frequent,
    },
    ThresholdRule {
        bound: Bound::Above(0.0),
        outcome: OverspendFrequency::Occasional,
    },
];

/// Categories that often hide discretionary spending (case-insensitive substrings)
pub const WATCH_LIST: [&str; 6] = [
    "Entertainment",
    "Shopping",
    "Dining",
    "Food",
    "Subscriptions",
    "Online Shopping",
];

/// Minimum share of expense (percent) for a watch-list category to be flagged
pub const WATCH_SHARE_THRESHOLD: f64 = 15.0;

/// Only the top N ranked categories are checked against the watch list
pub const WATCH_RANK_LIMIT: usize = 3;

/// Savings rate target used by the improvement tip (fraction of income)
pub const SAVINGS_TARGET_RATE: f64 = 0.2;

/// Year-over-year savings change must exceed this fraction of last year's savings
pub const YOY_SAVINGS_THRESHOLD: f64 = 0.1;

/// Year-over-year expense growth must exceed this fraction of last year's expense
pub const YOY_EXPENSE_THRESHOLD: f64 = 0.2;

/// `part / whole * 100`, or `0` when `whole` is zero or the result is not finite
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let pct = part / whole * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// Round to `decimals` places with ties going away from zero (`12.25` -> `12.3`)
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Fixed-precision percentage for messages (e.g. `12.3%`)
pub fn format_percent(value: f64, decimals: usize) -> String {
    // Normalizes -0.0 as well as NaN/inf
    let value = round_half_away(value, decimals);
    let value = if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    };
    format!("{:.*}%", decimals, value)
}

/// Whether a category name contains any watch-list entry
pub fn is_watched_category(name: &str) -> bool {
    let name = name.to_lowercase();
    WATCH_LIST
        .iter()
        .any(|w| name.contains(&w.to_lowercase()))
}

/// Month names joined for display ("Jan, Mar")
pub fn month_names(months: &[&MonthlySummary]) -> String {
    months
        .iter()
        .map(|m| m.month.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
