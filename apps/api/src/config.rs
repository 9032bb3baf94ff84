use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every knob has a default; the service needs no environment to run.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the LanguageTool-compatible grammar service.
    pub languagetool_url: String,
    pub grammar_enabled: bool,
    /// Upper bound on custom sections per resume.
    pub max_custom_sections: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            languagetool_url: env_or("LANGUAGETOOL_URL", "https://api.languagetool.org"),
            grammar_enabled: env_or("GRAMMAR_ENABLED", "true")
                .parse::<bool>()
                .context("GRAMMAR_ENABLED must be true or false")?,
            max_custom_sections: env_or("MAX_CUSTOM_SECTIONS", "5")
                .parse::<usize>()
                .context("MAX_CUSTOM_SECTIONS must be a non-negative integer")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
