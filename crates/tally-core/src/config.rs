//! Settings loading
//!
//! Resolution order:
//! 1. An explicit path (`--config`)
//! 2. `tally/tally.toml` under the platform config directory
//! 3. The embedded default (`config/tally.toml`)
//!
//! `TALLY_CURRENCY` in the environment overrides the configured currency.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::currency::Currency;
use crate::error::{Error, Result};

/// Embedded default settings (compiled into binary)
const DEFAULT_SETTINGS: &str = include_str!("../../../config/tally.toml");

/// Environment variable that overrides the display currency
pub const CURRENCY_ENV: &str = "TALLY_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ISO code of the display currency
    pub currency: String,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Extra CORS origins beyond localhost
    pub allowed_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Currency::default().code.to_string(),
            server: ServerSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
        }
    }
}

/// Default settings override path
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tally").join("tally.toml"))
}

impl Settings {
    /// Load settings (explicit path, then user override, then embedded default)
    /// and apply environment overrides.
    ///
    /// The currency code is not checked here; `currency()` validates it where
    /// it is used, so a bad code only fails the commands that need it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = Self::load_file(path)?;
        settings.apply_currency_override(std::env::var(CURRENCY_ENV).ok().as_deref());
        Ok(settings)
    }

    /// Load settings without consulting the environment
    pub fn load_file(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            debug!("Loaded settings from {}", path.display());
            return Self::parse(&content);
        }

        if let Some(default_path) = default_settings_path() {
            if default_path.exists() {
                let content = fs::read_to_string(&default_path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", default_path.display(), e))
                })?;
                debug!("Loaded settings from {}", default_path.display());
                return Self::parse(&content);
            }
        }

        Self::parse(DEFAULT_SETTINGS)
    }

    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid settings: {}", e)))
    }

    /// Replace the currency when an override is present and non-empty
    pub fn apply_currency_override(&mut self, value: Option<&str>) {
        if let Some(code) = value.map(str::trim).filter(|c| !c.is_empty()) {
            debug!("Currency overridden to {}", code);
            self.currency = code.to_uppercase();
        }
    }

    /// The configured currency, validated against the built-in table
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
    }
}
