//! Analytics snapshot types consumed by the insight engine
//!
//! A snapshot is produced by the analytics aggregator (outside this crate) and
//! arrives as camelCase JSON. Every field is optional on the wire: missing
//! numbers read as `0` and missing series read as empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Point-in-time analytics for one selected year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSnapshot {
    /// Aggregate totals for the selected year
    pub year_total: YearTotal,
    /// Monthly series, Jan..Dec (may be sparse)
    pub monthly: Vec<MonthlySummary>,
    /// Expense categories ranked by total, largest first
    pub top_categories: Vec<CategoryTotal>,
    /// One entry per calendar year in history (unordered)
    pub yearly: Vec<YearSummary>,
}

impl AnalyticsSnapshot {
    /// Parse a snapshot from JSON. The literal `null` yields `None`.
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        Ok(serde_json::from_str::<Option<Self>>(json)?)
    }

    /// Look up a year in the multi-year series by value
    pub fn year(&self, year: i32) -> Option<&YearSummary> {
        self.yearly.iter().find(|y| y.year == year)
    }
}

/// Totals for the selected year.
///
/// `savings` is expected to equal `income - expense`; it is taken as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YearTotal {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    pub investment: f64,
}

/// One month of the monthly series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlySummary {
    /// Short month name ("Jan".."Dec")
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
}

impl MonthlySummary {
    /// Calendar month for this entry, if the name is recognized
    pub fn calendar_month(&self) -> Option<Month> {
        self.month.parse().ok()
    }
}

/// Expense total for a single category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryTotal {
    /// Category name
    #[serde(alias = "_id")]
    pub id: String,
    pub total: f64,
    pub count: i64,
    pub avg_amount: f64,
}

/// Totals for one calendar year
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YearSummary {
    pub year: i32,
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
}

/// Calendar month keyed by the short names used in the monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// 1-based month number (Jan = 1)
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Month for a 1-based number; `None` outside 1..=12
    pub fn from_number(number: u32) -> Option<Month> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
    }

    /// The month before this one within the same year (`None` for January)
    pub fn previous(&self) -> Option<Month> {
        Self::from_number(self.number() - 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}
