//! Server command implementation

use anyhow::{bail, Result};
use tally_core::Settings;

/// Environment variable holding comma-separated API keys
pub const API_KEYS_ENV: &str = "TALLY_API_KEYS";

/// Build the server configuration from settings and the environment
pub fn server_config(
    settings: &Settings,
    no_auth: bool,
    api_keys: Vec<String>,
) -> Result<tally_server::ServerConfig> {
    if !no_auth && api_keys.is_empty() {
        bail!(
            "No API keys configured. Set {} or pass --no-auth for local development",
            API_KEYS_ENV
        );
    }

    Ok(tally_server::ServerConfig {
        require_auth: !no_auth,
        api_keys,
        allowed_origins: settings.server.allowed_origins.clone(),
        default_currency: settings.currency()?,
    })
}

pub async fn cmd_serve(
    settings: &Settings,
    host: Option<&str>,
    port: Option<u16>,
    no_auth: bool,
) -> Result<()> {
    let host = host.unwrap_or(&settings.server.host);
    let port = port.unwrap_or(settings.server.port);

    let api_keys =
        tally_server::parse_api_keys(&std::env::var(API_KEYS_ENV).unwrap_or_default());
    let config = server_config(settings, no_auth, api_keys)?;

    println!("🚀 Starting Tally web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Currency: {}", config.default_currency.code);
    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else {
        println!(
            "   🔑 API keys: {} configured ({})",
            config.api_keys.len(),
            API_KEYS_ENV
        );
    }
    if !config.allowed_origins.is_empty() {
        println!("   🌐 CORS origins: {}", config.allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    tally_server::serve_with_config(host, port, config).await?;

    Ok(())
}
