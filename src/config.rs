//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export SEED_PATH="./seed/characters.json"
//! export LOG_FORMAT="json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BODY_LIMIT_BYTES` - Max request body read by the sanitizer (default: 65536)
//! - `SEED_PATH` - JSON file with an array of characters loaded at startup
//! - `RATE_LIMIT_PER_SECOND` - Requests per second replenished per client IP (default: 2)
//! - `RATE_LIMIT_BURST` - Burst size per client IP (default: 100)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::state::DEFAULT_BODY_LIMIT;

const MIN_BODY_LIMIT: usize = 1024;
const MAX_BODY_LIMIT: usize = 16 * 1024 * 1024;
const MAX_RATE_LIMIT_PER_SECOND: u64 = 1_000_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum request body, in bytes, read by the input sanitizer.
    pub body_limit_bytes: usize,
    /// Optional JSON file preloaded into the repository.
    pub seed_path: Option<PathBuf>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let body_limit_bytes = env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT);

        let seed_path = env::var("SEED_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        Self {
            listen_addr,
            log_level,
            log_format,
            body_limit_bytes,
            seed_path,
            rate_limit_per_second,
            rate_limit_burst,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `body_limit_bytes` is outside 1 KiB..=16 MiB
    /// - either rate limit value is zero
    /// - `rate_limit_per_second` is above 1,000,000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(MIN_BODY_LIMIT..=MAX_BODY_LIMIT).contains(&self.body_limit_bytes) {
            anyhow::bail!(
                "BODY_LIMIT_BYTES must be between {} and {}, got {}",
                MIN_BODY_LIMIT,
                MAX_BODY_LIMIT,
                self.body_limit_bytes
            );
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }
        if self.rate_limit_per_second > MAX_RATE_LIMIT_PER_SECOND {
            anyhow::bail!(
                "RATE_LIMIT_PER_SECOND must be at most {}, got {}",
                MAX_RATE_LIMIT_PER_SECOND,
                self.rate_limit_per_second
            );
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Body limit: {} bytes", self.body_limit_bytes);

        match &self.seed_path {
            Some(path) => tracing::info!("  Seed file: {}", path.display()),
            None => tracing::info!("  Seed file: none"),
        }

        tracing::info!(
            "  Rate limit: {}/s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
