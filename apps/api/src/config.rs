use anyhow::{Context, Result};

/// Environment variables checked for the generative API credential,
/// in priority order. First non-empty value wins.
pub const API_KEY_VARS: [&str; 3] = ["MATCHFIT_API_KEY", "GEMINI_API_KEY", "API_KEY"];

/// Application configuration loaded from environment variables.
///
/// The generative API credential is intentionally NOT part of this struct:
/// it is resolved per scan via [`resolve_api_key`], so the service boots
/// without a key and only the scan path fails when one is absent.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Public base URL used when composing share messages.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_url: std::env::var("PUBLIC_URL")
                .unwrap_or_else(|_| format!("http://localhost:{port}")),
        })
    }
}

/// Resolves the generative API credential from the environment at call time.
/// Returns `None` when no candidate variable holds a non-empty value.
pub fn resolve_api_key() -> Option<String> {
    resolve_api_key_from(|key| std::env::var(key).ok())
}

fn resolve_api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
}
