use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 30;
/// Matches the simulated analysis latency of the original UI.
const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; the defaults suit local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Wall-clock bound on a single extraction call.
    pub extraction_timeout: Duration,
    /// Artificial delay before a match report is produced. Zero disables it.
    pub analysis_delay: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            extraction_timeout: Duration::from_secs(env_or(
                "EXTRACTION_TIMEOUT_SECS",
                DEFAULT_EXTRACTION_TIMEOUT_SECS,
            )?),
            analysis_delay: Duration::from_millis(env_or(
                "ANALYSIS_DELAY_MS",
                DEFAULT_ANALYSIS_DELAY_MS,
            )?),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            extraction_timeout: Duration::from_secs(DEFAULT_EXTRACTION_TIMEOUT_SECS),
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("Environment variable '{key}' is not a valid number")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.extraction_timeout, Duration::from_secs(30));
        assert_eq!(config.analysis_delay, Duration::from_millis(2000));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }
}
