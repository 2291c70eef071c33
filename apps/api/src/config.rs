use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no .env at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for generated document directories.
    pub generated_dir: PathBuf,
    /// Directory holding per-framework question sets and document templates.
    pub templates_dir: PathBuf,
    /// Optional logo image embedded in the document header.
    pub logo_path: Option<PathBuf>,
    /// Hard cap on a single HTML-to-PDF render.
    pub render_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generated_dir: env_or("GENERATED_DIR", "static/generated").into(),
            templates_dir: env_or("TEMPLATES_DIR", "templates").into(),
            logo_path: std::env::var("LOGO_PATH").ok().map(PathBuf::from),
            render_timeout_secs: env_or("RENDER_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("RENDER_TIMEOUT_SECS must be a number of seconds")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_returns_default_when_unset() {
        assert_eq!(env_or("DEFINITELY_NOT_SET_XYZ", "fallback"), "fallback");
    }
}
