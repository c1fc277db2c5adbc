//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use clap::Parser;
use tally_core::{CurrencyFormatter, InsightEngine, InsightReport, Settings};
use tempfile::NamedTempFile;

use crate::cli::{Cli, Commands};
use crate::commands;

fn snapshot_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn usd_settings() -> Settings {
    Settings {
        currency: "USD".to_string(),
        ..Default::default()
    }
}

// ========== Argument Parsing ==========

#[test]
fn test_parse_insights_args() {
    let cli = Cli::parse_from([
        "tally",
        "insights",
        "--file",
        "snap.json",
        "--year",
        "2024",
        "--today",
        "2024-04-15",
        "--json",
    ]);

    match cli.command {
        Commands::Insights {
            file,
            year,
            today,
            currency,
            json,
        } => {
            assert_eq!(file.unwrap().to_str(), Some("snap.json"));
            assert_eq!(year, Some(2024));
            assert_eq!(today.as_deref(), Some("2024-04-15"));
            assert!(currency.is_none());
            assert!(json);
        }
        _ => panic!("expected insights command"),
    }
}

#[test]
fn test_parse_negative_amount() {
    let cli = Cli::parse_from(["tally", "format", "-5000", "--currency", "USD"]);
    match cli.command {
        Commands::Format { amount, .. } => assert_eq!(amount, -5000.0),
        _ => panic!("expected format command"),
    }
}

#[test]
fn test_global_flags() {
    let cli = Cli::parse_from(["tally", "currencies", "--verbose", "--config", "t.toml"]);
    assert!(cli.verbose);
    assert_eq!(cli.config.unwrap().to_str(), Some("t.toml"));
}

// ========== Insights Command ==========

#[test]
fn test_read_snapshot_file() {
    let file = snapshot_file(r#"{"yearTotal": {"income": 1000, "expense": 400, "savings": 600}}"#);
    let snapshot = commands::read_snapshot(Some(file.path())).unwrap().unwrap();
    assert_eq!(snapshot.year_total.savings, 600.0);
}

#[test]
fn test_read_null_snapshot() {
    let file = snapshot_file("null");
    assert!(commands::read_snapshot(Some(file.path())).unwrap().is_none());
}

#[test]
fn test_read_invalid_snapshot() {
    let file = snapshot_file("{\"yearTotal\": ");
    assert!(commands::read_snapshot(Some(file.path())).is_err());
}

#[test]
fn test_resolve_today() {
    let today = commands::resolve_today(Some("2024-02-29")).unwrap();
    assert_eq!(today.to_string(), "2024-02-29");
    assert!(commands::resolve_today(Some("2024/02/29")).is_err());
    assert!(commands::resolve_today(None).is_ok());
}

#[test]
fn test_cmd_insights_runs() {
    let file = snapshot_file(r#"{"yearTotal": {"income": 10000, "expense": 15000, "savings": -5000}}"#);
    let result = commands::cmd_insights(
        &usd_settings(),
        Some(file.path()),
        Some(2024),
        Some("2024-04-15"),
        None,
        true,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_insights_rejects_unknown_currency() {
    let file = snapshot_file("null");
    let result = commands::cmd_insights(
        &usd_settings(),
        Some(file.path()),
        Some(2024),
        None,
        Some("XYZ"),
        false,
    );
    assert!(result.is_err());
}

#[test]
fn test_render_report_sections() {
    let file = snapshot_file(
        r#"{
            "yearTotal": {"income": 10000, "expense": 15000, "savings": -5000},
            "monthly": [{"month": "Jan", "income": 1000, "expense": 1500, "savings": -500}]
        }"#,
    );
    let snapshot = commands::read_snapshot(Some(file.path())).unwrap();
    let formatter = CurrencyFormatter::for_code("USD").unwrap();
    let today = commands::resolve_today(Some("2024-04-15")).unwrap();
    let report = InsightEngine::new().compute(snapshot.as_ref(), &formatter, 2024, today);

    let text = commands::render_report(&report, &formatter, 2024);
    assert!(text.contains("📊 Insights for 2024"));
    assert!(text.contains("Savings rate:        -50.0%"));
    assert!(text.contains("Worst month:         Jan (-$500)"));
    assert!(text.contains("⚠️  Warnings"));
    assert!(text.contains("Spending Exceeds Income!"));
    assert!(text.contains("→ Review your biggest spending categories"));
}

#[test]
fn test_render_savings_rate_rounds_ties_up() {
    let file = snapshot_file(r#"{"yearTotal": {"income": 400, "expense": 351, "savings": 49}}"#);
    let snapshot = commands::read_snapshot(Some(file.path())).unwrap();
    let formatter = CurrencyFormatter::for_code("USD").unwrap();
    let today = commands::resolve_today(Some("2024-04-15")).unwrap();
    let report = InsightEngine::new().compute(snapshot.as_ref(), &formatter, 2024, today);

    let text = commands::render_report(&report, &formatter, 2024);
    assert!(text.contains("Savings rate:        12.3%"));
}

#[test]
fn test_render_empty_report() {
    let formatter = CurrencyFormatter::default();
    let text = commands::render_report(&InsightReport::empty(), &formatter, 2024);
    assert!(text.contains("No analytics data available."));
    assert!(!text.contains("Warnings"));
}

// ========== Currency Commands ==========

#[test]
fn test_render_currencies_marks_default() {
    let text = commands::render_currencies("usd");
    let usd_line = text.lines().find(|l| l.contains("USD")).unwrap();
    let inr_line = text.lines().find(|l| l.contains("INR")).unwrap();
    assert!(usd_line.contains('*'));
    assert!(!inr_line.contains('*'));
}

#[test]
fn test_format_amount() {
    let settings = Settings::default();
    assert_eq!(
        commands::format_amount(&settings, 123456.5, None, false).unwrap(),
        "₹1,23,456.5"
    );
    assert_eq!(
        commands::format_amount(&settings, 250000.0, None, true).unwrap(),
        "₹2.5L"
    );
    assert_eq!(
        commands::format_amount(&settings, -5000.0, Some("usd"), false).unwrap(),
        "-$5,000"
    );
    assert!(commands::format_amount(&settings, 1.0, Some("XYZ"), false).is_err());
}

#[test]
fn test_unknown_configured_currency_only_fails_where_used() {
    let settings = Settings {
        currency: "XYZ".to_string(),
        ..Default::default()
    };

    assert_eq!(
        commands::format_amount(&settings, 1500.0, Some("usd"), false).unwrap(),
        "$1,500"
    );
    assert!(commands::format_amount(&settings, 1500.0, None, false).is_err());
    assert!(commands::render_currencies(&settings.currency).contains("INR"));

    let file = snapshot_file("null");
    let result = commands::cmd_insights(
        &settings,
        Some(file.path()),
        Some(2024),
        Some("2024-04-15"),
        Some("USD"),
        true,
    );
    assert!(result.is_ok());

    assert!(commands::server_config(&settings, true, vec![]).is_err());
}

// ========== Serve Command ==========

#[test]
fn test_server_config_requires_keys() {
    let settings = Settings::default();
    assert!(commands::server_config(&settings, false, vec![]).is_err());

    let config = commands::server_config(&settings, false, vec!["k".to_string()]).unwrap();
    assert!(config.require_auth);
    assert_eq!(config.default_currency.code, "INR");
}

#[test]
fn test_server_config_no_auth() {
    let config = commands::server_config(&usd_settings(), true, vec![]).unwrap();
    assert!(!config.require_auth);
    assert_eq!(config.default_currency.code, "USD");
}
