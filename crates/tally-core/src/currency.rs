//! Currency formatting
//!
//! Provides the formatter injected into the insight engine. Amounts are
//! rendered with 0 to 2 fraction digits, the currency symbol and
//! locale-appropriate digit grouping (lakh/crore grouping for `en-IN`).

use serde::Serialize;

use crate::error::{Error, Result};
use crate::insights::rules::round_half_away;
use crate::insights::CurrencyFormat;

/// A supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub locale: &'static str,
}

const CURRENCIES: [Currency; 7] = [
    Currency {
        code: "INR",
        symbol: "₹",
        name: "Indian Rupee",
        locale: "en-IN",
    },
    Currency {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        locale: "en-US",
    },
    Currency {
        code: "EUR",
        symbol: "€",
        name: "Euro",
        locale: "de-DE",
    },
    Currency {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
        locale: "en-GB",
    },
    Currency {
        code: "JPY",
        symbol: "￥",
        name: "Japanese Yen",
        locale: "ja-JP",
    },
    Currency {
        code: "AUD",
        symbol: "A$",
        name: "Australian Dollar",
        locale: "en-AU",
    },
    Currency {
        code: "CAD",
        symbol: "CA$",
        name: "Canadian Dollar",
        locale: "en-CA",
    },
];

impl Currency {
    /// All built-in currencies
    pub fn all() -> &'static [Currency] {
        &CURRENCIES
    }

    /// Look up a currency by ISO code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Currency> {
        let code = code.trim();
        CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
    }
}

impl Default for Currency {
    fn default() -> Self {
        CURRENCIES[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

/// Number layout for a locale
#[derive(Debug, Clone, Copy)]
struct LocaleStyle {
    grouping: Grouping,
    group_separator: char,
    decimal_separator: char,
    symbol_after: bool,
}

impl LocaleStyle {
    fn for_locale(locale: &str) -> Self {
        match locale {
            "en-IN" => Self {
                grouping: Grouping::Indian,
                group_separator: ',',
                decimal_separator: '.',
                symbol_after: false,
            },
            "de-DE" => Self {
                grouping: Grouping::Thousands,
                group_separator: '.',
                decimal_separator: ',',
                symbol_after: true,
            },
            _ => Self {
                grouping: Grouping::Thousands,
                group_separator: ',',
                decimal_separator: '.',
                symbol_after: false,
            },
        }
    }
}

/// Locale-aware formatter for one currency
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    currency: Currency,
    style: LocaleStyle,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl CurrencyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            style: LocaleStyle::for_locale(currency.locale),
        }
    }

    /// Formatter for an ISO currency code
    pub fn for_code(code: &str) -> Result<Self> {
        Ok(Self::new(Currency::from_code(code)?))
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Full amount, e.g. `₹1,23,456.5` or `-$5,000`
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return self.with_symbol("", "0");
        }

        let rounded = format!("{:.2}", round_half_away(amount.abs(), 2));
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut number = self.group(int_part);
        if !frac_part.is_empty() {
            number.push(self.style.decimal_separator);
            number.push_str(frac_part);
        }

        let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
        self.with_symbol(sign, &number)
    }

    /// Abbreviated amount for large values, e.g. `₹12.5L` or `$3.2M`
    pub fn format_compact(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return self.format(amount);
        }

        let abs = amount.abs();
        let sign = if amount < 0.0 { "-" } else { "" };
        let symbol = self.currency.symbol;

        let scaled = if self.currency.code == "INR" {
            if abs >= 10_000_000.0 {
                Some(format!("{:.2}Cr", round_half_away(abs / 10_000_000.0, 2)))
            } else if abs >= 100_000.0 {
                Some(format!("{:.1}L", round_half_away(abs / 100_000.0, 1)))
            } else if abs >= 1_000.0 {
                Some(format!("{:.1}K", round_half_away(abs / 1_000.0, 1)))
            } else {
                None
            }
        } else if abs >= 1_000_000_000.0 {
            Some(format!("{:.2}B", round_half_away(abs / 1_000_000_000.0, 2)))
        } else if abs >= 1_000_000.0 {
            Some(format!("{:.1}M", round_half_away(abs / 1_000_000.0, 1)))
        } else if abs >= 1_000.0 {
            Some(format!("{:.1}K", round_half_away(abs / 1_000.0, 1)))
        } else {
            None
        };

        match scaled {
            Some(value) => format!("{}{}{}", sign, symbol, value),
            None => self.format(amount),
        }
    }

    fn with_symbol(&self, sign: &str, number: &str) -> String {
        if self.style.symbol_after {
            format!("{}{} {}", sign, number, self.currency.symbol)
        } else {
            format!("{}{}{}", sign, self.currency.symbol, number)
        }
    }

    fn group(&self, digits: &str) -> String {
        let sep = self.style.group_separator;
        let len = digits.len();
        if len <= 3 {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(len - 3);
        let head_groups: Vec<&str> = match self.style.grouping {
            Grouping::Thousands => chunk_from_right(head, 3),
            Grouping::Indian => chunk_from_right(head, 2),
        };

        let mut out = head_groups.join(sep.to_string().as_str());
        out.push(sep);
        out.push_str(tail);
        out
    }
}

impl CurrencyFormat for CurrencyFormatter {
    fn format(&self, amount: f64) -> String {
        CurrencyFormatter::format(self, amount)
    }
}

/// Split an ASCII digit string into chunks of `size`, aligned to the right
fn chunk_from_right(digits: &str, size: usize) -> Vec<&str> {
    let first = digits.len() % size;
    let mut chunks = Vec::new();
    if first > 0 {
        chunks.push(&digits[..first]);
    }
    let mut idx = first;
    while idx < digits.len() {
        chunks.push(&digits[idx..idx + size]);
        idx += size;
    }
    chunks
}
