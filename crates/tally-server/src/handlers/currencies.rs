//! Currency handlers

use axum::Json;

use tally_core::Currency;

/// GET /api/currencies - Built-in display currencies
pub async fn list_currencies() -> Json<&'static [Currency]> {
    Json(Currency::all())
}
