use std::time::Duration;

use anyhow::{Context, Result};

/// Bounds for the upstream AI timeout, in seconds.
const CHAT_TIMEOUT_RANGE: (u64, u64) = (10, 30);

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Used only when the `gemini_api_key` setting is absent.
    pub gemini_api_key: Option<String>,
    pub chat_timeout: Duration,
    /// Source of truth for the experience estimate and the fallback translation.
    pub canonical_locale: String,
    /// Locale served when no site locales are configured.
    pub default_locale: String,
    /// Empty means permissive CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let chat_timeout_secs = std::env::var("CHAT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u64>()
            .context("CHAT_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            chat_timeout: clamp_chat_timeout(chat_timeout_secs),
            canonical_locale: optional_env("CANONICAL_LOCALE").unwrap_or_else(|| "en".to_string()),
            default_locale: optional_env("DEFAULT_LOCALE").unwrap_or_else(|| "en".to_string()),
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/portfolio_test".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            gemini_api_key: None,
            chat_timeout: Duration::from_secs(20),
            canonical_locale: "en".to_string(),
            default_locale: "en".to_string(),
            cors_allowed_origins: vec![],
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clamp_chat_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.clamp(CHAT_TIMEOUT_RANGE.0, CHAT_TIMEOUT_RANGE.1))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
