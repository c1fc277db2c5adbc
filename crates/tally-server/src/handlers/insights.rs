//! Insight handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use crate::{AppError, AppState};
use tally_core::{AnalyticsSnapshot, CurrencyFormatter, InsightReport};

/// Query parameters for computing insights
#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    /// Selected year (defaults to the year of `today`)
    pub year: Option<i32>,
    /// Clock override, YYYY-MM-DD (defaults to the server's local date)
    pub today: Option<String>,
    /// ISO currency code (defaults to the configured currency)
    pub currency: Option<String>,
}

/// POST /api/insights - Compute insights for a posted analytics snapshot
///
/// The body is the snapshot JSON. `null` or an empty body yields the empty
/// report.
pub async fn compute_insights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InsightQuery>,
    body: Bytes,
) -> Result<Json<InsightReport>, AppError> {
    let formatter = match params.currency.as_deref() {
        Some(code) => {
            CurrencyFormatter::for_code(code).map_err(|e| AppError::bad_request(&e.to_string()))?
        }
        None => CurrencyFormatter::new(state.config.default_currency),
    };

    let today = match params.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request("Invalid 'today' date (use YYYY-MM-DD)"))?,
        None => Local::now().date_naive(),
    };
    let year = params.year.unwrap_or_else(|| today.year());

    let text = std::str::from_utf8(&body)
        .map_err(|_| AppError::bad_request("Request body must be UTF-8 JSON"))?;
    let snapshot = if text.trim().is_empty() {
        None
    } else {
        AnalyticsSnapshot::from_json(text)
            .map_err(|e| AppError::bad_request(&format!("Invalid snapshot: {}", e)))?
    };

    let report = state
        .engine
        .compute(snapshot.as_ref(), &formatter, year, today);

    tracing::info!(
        year,
        currency = formatter.currency().code,
        findings = report.len(),
        "Computed insights"
    );

    Ok(Json(report))
}
