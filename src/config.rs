//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SWAPI_BASE_URL="https://swapi.dev"
//! export CACHE_TIMEOUT_IN_SECS="3600"
//! export DATABASE_URL="sqlite://catalog.db"
//! ```
//!
//! ## Optional Variables
//!
//! - `SWAPI_BASE_URL` - Upstream API root (default: `https://swapi.dev`)
//! - `CACHE_TIMEOUT_IN_SECS` - Response cache TTL, accepted but not enforced (default: 3600)
//! - `DATABASE_URL` - SQLite database (default: `sqlite://catalog.db`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

const DEFAULT_UPSTREAM_BASE_URL: &str = "https://swapi.dev";
const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API root without trailing slash (`SWAPI_BASE_URL`).
    pub upstream_base_url: String,
    /// TTL handed to the response cache (`CACHE_TIMEOUT_IN_SECS`).
    /// Entries never expire regardless of this value.
    pub cache_ttl_seconds: u64,
    pub database_url: String,
    pub db_max_connections: u32,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CACHE_TIMEOUT_IN_SECS` or `DB_MAX_CONNECTIONS`
    /// is set but not a number.
    pub fn from_env() -> Result<Self> {
        let upstream_base_url = env::var("SWAPI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let cache_ttl_seconds = match env::var("CACHE_TIMEOUT_IN_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CACHE_TIMEOUT_IN_SECS must be a number, got '{}'", v))?,
            Err(_) => 3600,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a number, got '{}'", v))?,
            Err(_) => 5,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            upstream_base_url,
            cache_ttl_seconds,
            database_url,
            db_max_connections,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `upstream_base_url` is not an absolute `http`/`https` URL
    /// - `database_url` is not a SQLite URL
    /// - `db_max_connections` is 0
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    pub fn validate(&self) -> Result<()> {
        let upstream = Url::parse(&self.upstream_base_url).with_context(|| {
            format!(
                "SWAPI_BASE_URL must be an absolute URL, got '{}'",
                self.upstream_base_url
            )
        })?;
        if upstream.scheme() != "http" && upstream.scheme() != "https" {
            anyhow::bail!(
                "SWAPI_BASE_URL must use http or https, got '{}'",
                self.upstream_base_url
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

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

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_base_url);
        tracing::info!(
            "  Cache TTL: {}s (not enforced)",
            self.cache_ttl_seconds
        );
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
