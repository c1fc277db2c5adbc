//! Currency command implementations

use anyhow::Result;
use tally_core::{Currency, Settings};

use super::resolve_formatter;

/// Currency table, marking the configured default
pub fn render_currencies(default_code: &str) -> String {
    let mut out = String::new();
    out.push_str("💱 Currencies\n");
    out.push_str(&format!(
        "   {:1} {:5} │ {:6} │ {:20} │ {}\n",
        "", "Code", "Symbol", "Name", "Locale"
    ));
    out.push_str("   ────────┼────────┼──────────────────────┼────────\n");

    for currency in Currency::all() {
        let marker = if currency.code.eq_ignore_ascii_case(default_code) {
            "*"
        } else {
            ""
        };
        out.push_str(&format!(
            "   {:1} {:5} │ {:6} │ {:20} │ {}\n",
            marker, currency.code, currency.symbol, currency.name, currency.locale
        ));
    }
    out
}

pub fn cmd_currencies(settings: &Settings) -> Result<()> {
    println!();
    print!("{}", render_currencies(&settings.currency));
    println!();
    println!("   * default (set `currency` in tally.toml or TALLY_CURRENCY)");
    Ok(())
}

/// Format one amount, optionally with compact units
pub fn format_amount(
    settings: &Settings,
    amount: f64,
    currency: Option<&str>,
    compact: bool,
) -> Result<String> {
    let formatter = resolve_formatter(settings, currency)?;
    Ok(if compact {
        formatter.format_compact(amount)
    } else {
        formatter.format(amount)
    })
}

pub fn cmd_format(
    settings: &Settings,
    amount: f64,
    currency: Option<&str>,
    compact: bool,
) -> Result<()> {
    println!("{}", format_amount(settings, amount, currency, compact)?);
    Ok(())
}
