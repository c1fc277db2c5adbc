//! Fixture builders shared by unit tests

use chrono::NaiveDate;

use crate::models::{CategoryTotal, MonthlySummary, YearSummary, YearTotal};

/// Plain formatter used in assertions ("$1234.50")
pub fn usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Monthly entry with savings derived from income and expense
pub fn month(name: &str, income: f64, expense: f64) -> MonthlySummary {
    MonthlySummary {
        month: name.to_string(),
        income,
        expense,
        savings: income - expense,
    }
}

pub fn category(id: &str, total: f64) -> CategoryTotal {
    CategoryTotal {
        id: id.to_string(),
        total,
        count: 1,
        avg_amount: total,
    }
}

pub fn year_summary(year: i32, income: f64, expense: f64, savings: f64) -> YearSummary {
    YearSummary {
        year,
        income,
        expense,
        savings,
    }
}

/// Year totals with savings derived from income and expense
pub fn totals(income: f64, expense: f64) -> YearTotal {
    YearTotal {
        income,
        expense,
        savings: income - expense,
        investment: 0.0,
    }
}
