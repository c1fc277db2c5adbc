//! Insight command implementations

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use tally_core::insights::rules::format_percent;
use tally_core::{
    AnalyticsSnapshot, CurrencyFormatter, Finding, InsightEngine, InsightReport, Settings,
};

use super::resolve_formatter;

/// Read a snapshot from a file, or stdin for `-`/`None`
pub fn read_snapshot(file: Option<&Path>) -> Result<Option<AnalyticsSnapshot>> {
    let json = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read snapshot from stdin")?;
            buf
        }
    };

    AnalyticsSnapshot::from_json(&json).context("Failed to parse snapshot JSON")
}

/// Parse `--today`, defaulting to the local date
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn cmd_insights(
    settings: &Settings,
    file: Option<&Path>,
    year: Option<i32>,
    today: Option<&str>,
    currency: Option<&str>,
    json: bool,
) -> Result<()> {
    let formatter = resolve_formatter(settings, currency)?;
    let today = resolve_today(today)?;
    let year = year.unwrap_or_else(|| today.year());
    let snapshot = read_snapshot(file)?;

    let report = InsightEngine::new().compute(snapshot.as_ref(), &formatter, year, today);
    tracing::debug!(year, findings = report.len(), "Insights computed");

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        print!("{}", render_report(&report, &formatter, year));
    }

    Ok(())
}

/// Human-readable report: stats block, then warnings, celebrations and tips
pub fn render_report(report: &InsightReport, formatter: &CurrencyFormatter, year: i32) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("📊 Insights for {}\n", year));
    out.push_str("   ─────────────────────────────────────────────────────────────\n");

    let stats = &report.stats;
    if let Some(rate) = stats.savings_rate {
        out.push_str(&format!("   Savings rate:        {}\n", format_percent(rate, 1)));
    }
    if let Some(income) = stats.avg_monthly_income {
        out.push_str(&format!(
            "   Avg monthly income:  {}\n",
            formatter.format(income)
        ));
    }
    if let Some(expense) = stats.avg_monthly_expense {
        out.push_str(&format!(
            "   Avg monthly expense: {}\n",
            formatter.format(expense)
        ));
    }
    if let Some(best) = &stats.best_month {
        out.push_str(&format!(
            "   Best month:          {} ({})\n",
            best.month,
            formatter.format(best.savings)
        ));
    }
    if let Some(worst) = &stats.worst_month {
        out.push_str(&format!(
            "   Worst month:         {} ({})\n",
            worst.month,
            formatter.format(worst.savings)
        ));
    }

    if report.is_empty() {
        out.push_str("   No analytics data available.\n");
        return out;
    }

    render_section(&mut out, "⚠️  Warnings", &report.warnings);
    render_section(&mut out, "🎉 Celebrations", &report.celebrations);
    render_section(&mut out, "💡 Tips", &report.tips);
    out
}

fn render_section(out: &mut String, heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }

    out.push('\n');
    out.push_str(&format!("{} ({})\n", heading, findings.len()));
    for finding in findings {
        out.push_str(&format!("   • {}\n", finding.title));
        out.push_str(&format!("     {}\n", finding.message));
        if let Some(action) = &finding.action {
            out.push_str(&format!("     → {}\n", action));
        }
        if let Some(highlight) = &finding.highlight {
            out.push_str(&format!("     ★ {}\n", highlight));
        }
    }
}
