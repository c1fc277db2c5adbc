//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

pub type Result<T> = std::result::Result<T, Error>;
