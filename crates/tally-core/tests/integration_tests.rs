//! Integration tests for tally-core
//!
//! These tests run the full snapshot JSON → engine → report workflow.

use chrono::NaiveDate;
use tally_core::{
    compute_insights, AnalyticsSnapshot, CurrencyFormatter, FindingKind, InsightEngine,
    InsightReport, Severity,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn usd() -> CurrencyFormatter {
    CurrencyFormatter::for_code("USD").unwrap()
}

fn snapshot(json: &str) -> AnalyticsSnapshot {
    AnalyticsSnapshot::from_json(json)
        .expect("snapshot should parse")
        .expect("snapshot should not be null")
}

/// A year with a mixed monthly series, ranked categories and history
fn full_year_json() -> &'static str {
    r#"{
        "yearTotal": {"income": 120000, "expense": 90000, "savings": 30000, "investment": 5000},
        "monthly": [
            {"month": "Jan", "income": 10000, "expense": 7000, "savings": 3000},
            {"month": "Feb", "income": 10000, "expense": 11000, "savings": -1000},
            {"month": "Mar", "income": 10000, "expense": 6000, "savings": 4000},
            {"month": "Apr", "income": 10000, "expense": 9000, "savings": 1000}
        ],
        "topCategories": [
            {"_id": "Rent", "total": 30000, "count": 12, "avgAmount": 2500},
            {"_id": "Dining Out", "total": 18000, "count": 80, "avgAmount": 225},
            {"_id": "Groceries", "total": 12000, "count": 60, "avgAmount": 200}
        ],
        "yearly": [
            {"year": 2023, "income": 100000, "expense": 85000, "savings": 15000},
            {"year": 2024, "income": 120000, "expense": 90000, "savings": 30000}
        ]
    }"#
}

// =============================================================================
// Null and zero safety
// =============================================================================

#[test]
fn test_null_snapshot_yields_empty_report() {
    let parsed = AnalyticsSnapshot::from_json("null").unwrap();
    assert!(parsed.is_none());

    let report = compute_insights(parsed.as_ref(), &usd(), 2024, date(2024, 4, 15));
    assert_eq!(report, InsightReport::empty());
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({"warnings": [], "celebrations": [], "tips": [], "stats": {}})
    );
}

#[test]
fn test_zero_income_never_leaks_nan() {
    let snap = snapshot(
        r#"{
            "yearTotal": {"income": 0, "expense": 0, "savings": 0},
            "monthly": [
                {"month": "Mar", "income": 0, "expense": 0, "savings": 0},
                {"month": "Apr", "income": 0, "expense": 500, "savings": -500}
            ],
            "topCategories": [{"_id": "Shopping", "total": 0, "count": 0, "avgAmount": 0}],
            "yearly": [
                {"year": 2023, "income": 0, "expense": 0, "savings": 0},
                {"year": 2024, "income": 0, "expense": 500, "savings": -500}
            ]
        }"#,
    );

    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));

    assert_eq!(report.stats.savings_rate, Some(0.0));
    assert_eq!(report.stats.avg_monthly_income, Some(0.0));
    for finding in report.all() {
        let text = format!(
            "{} {} {} {}",
            finding.title,
            finding.message,
            finding.action.as_deref().unwrap_or(""),
            finding.highlight.as_deref().unwrap_or("")
        );
        let words: Vec<&str> = text
            .split(|c: char| !c.is_ascii_alphabetic())
            .collect();
        assert!(!words.contains(&"NaN"), "NaN in {:?}", finding.key);
        assert!(!words.contains(&"inf"), "inf in {:?}", finding.key);
    }
}

// =============================================================================
// Savings rate tiers
// =============================================================================

fn savings_findings(income: f64, savings: f64) -> Vec<String> {
    let snap = snapshot(&format!(
        r#"{{"yearTotal": {{"income": {}, "expense": {}, "savings": {}}}}}"#,
        income,
        income - savings,
        savings
    ));
    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));
    report
        .all()
        .filter(|f| f.key.starts_with("savings_rate:"))
        .map(|f| f.key.clone())
        .collect()
}

#[test]
fn test_thirty_percent_is_excellent_only() {
    assert_eq!(
        savings_findings(100000.0, 30000.0),
        vec!["savings_rate:excellent"]
    );
}

#[test]
fn test_twenty_percent_boundary_is_good() {
    assert_eq!(savings_findings(100000.0, 20000.0), vec!["savings_rate:good"]);
}

#[test]
fn test_celebration_alone_still_gets_fallback_tip() {
    let snap = snapshot(r#"{"yearTotal": {"income": 50000, "expense": 25000, "savings": 25000}}"#);
    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));

    assert!(report.warnings.is_empty());
    assert_eq!(report.celebrations.len(), 1);
    assert_eq!(report.celebrations[0].key, "savings_rate:excellent");
    assert_eq!(report.tips.len(), 1);
    assert_eq!(report.tips[0].title, "Keep Tracking!");
}

// =============================================================================
// Individual rules end to end
// =============================================================================

#[test]
fn test_overspend_cites_formatted_gap() {
    let snap = snapshot(r#"{"yearTotal": {"income": 10000, "expense": 15000, "savings": -5000}}"#);
    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));

    let overspend = report.find("overspend").expect("overspend warning");
    assert_eq!(overspend.kind, FindingKind::Warning);
    assert_eq!(overspend.severity, Severity::Critical);
    assert!(overspend.message.contains("$5,000"));
}

#[test]
fn test_rent_dominance_warning() {
    let snap = snapshot(
        r#"{
            "yearTotal": {"income": 20000, "expense": 10000, "savings": 10000},
            "topCategories": [{"_id": "Rent", "total": 5000, "count": 1, "avgAmount": 5000}]
        }"#,
    );
    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));

    let dominant = report.find("category:dominant").expect("dominance warning");
    assert_eq!(dominant.title, "\"Rent\" Dominates Spending");
    assert!(report.warnings.iter().any(|w| w.key == "category:dominant"));
}

#[test]
fn test_year_over_year_improvement_without_expense_warning() {
    let snap = snapshot(
        r#"{
            "yearTotal": {"income": 7500, "expense": 5500, "savings": 2000},
            "yearly": [
                {"year": 2023, "income": 6000, "expense": 5000, "savings": 1000},
                {"year": 2024, "income": 7500, "expense": 5500, "savings": 2000}
            ]
        }"#,
    );
    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));

    let improved = report
        .find("year_over_year:improved")
        .expect("year-over-year celebration");
    assert_eq!(improved.severity, Severity::Excellent);
    assert!(improved.message.contains("$1,000"));
    assert!(report.find("year_over_year:expense_rising").is_none());
}

// =============================================================================
// Whole report
// =============================================================================

#[test]
fn test_full_year_report() {
    let snap = snapshot(full_year_json());
    let report = compute_insights(Some(&snap), &usd(), 2024, date(2024, 4, 15));

    // Savings 25%, Rent 33% of expense, Apr vs Mar +50%, one negative month
    assert!(report.find("savings_rate:good").is_some());
    assert!(report.find("category:highest").is_some());
    assert!(report.find("category:watch:Dining Out").is_some());
    assert!(report.find("month_over_month:spike").is_some());
    assert!(report.find("overspending_months:occasional").is_some());
    assert!(report.find("year_over_year:improved").is_some());
    assert!(report.find("general:keep_tracking").is_none());

    let best = report.find("best_month").expect("best month");
    assert_eq!(best.title, "Best Month: Mar");
    assert_eq!(report.stats.best_month.as_ref().unwrap().month, "Mar");
    assert_eq!(report.stats.worst_month.as_ref().unwrap().month, "Feb");
    assert_eq!(report.stats.avg_monthly_income, Some(10000.0));
}

#[test]
fn test_indian_currency_in_messages() {
    let snap = snapshot(r#"{"yearTotal": {"income": 100000, "expense": 250000, "savings": -150000}}"#);
    let inr = CurrencyFormatter::default();
    let report = compute_insights(Some(&snap), &inr, 2024, date(2024, 4, 15));

    assert!(report
        .find("overspend")
        .unwrap()
        .message
        .contains("₹1,50,000"));
}

#[test]
fn test_report_is_deterministic() {
    let snap = snapshot(full_year_json());
    let engine = InsightEngine::new();
    let formatter = usd();

    let first = engine.compute(Some(&snap), &formatter, 2024, date(2024, 4, 15));
    let second = engine.compute(Some(&snap), &formatter, 2024, date(2024, 4, 15));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
