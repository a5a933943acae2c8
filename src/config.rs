//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Command-line flags supply fallbacks; a set environment variable always wins.
//!
//! ## Variables
//!
//! - `APP_HOST` - Bind host (default: `0.0.0.0`, or `--host`)
//! - `APP_PORT` - Bind port (default: `8000`, or `--port`)
//! - `APP_DEBUG` - `true` enables debug logging (default: `false`, or `--debug`)
//! - `BASE_URL` - Public origin used in QR codes (default: `http://localhost:<port>`)
//! - `RUST_LOG` - Log filter, overrides the level chosen by `APP_DEBUG`
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_ID_LENGTH` - Identifier length, 6-16 (default: 7)
//! - `SHORT_ID_STRATEGY` - `random` or `sequential` (default: `random`)
//! - `MAX_INSERT_ATTEMPTS` - Collision retries per insert, 1-64 (default: 8)
//! - `LINK_TTL_SECONDS` - Expire links after this many seconds (default: never)
//! - `PURGE_INTERVAL_SECONDS` - Expired link sweep interval (default: 60)

use anyhow::{Context, Result};
use std::env;

use crate::domain::generator::{
    DEFAULT_CODE_LENGTH, GeneratorStrategy, MAX_CODE_LENGTH, MIN_CODE_LENGTH,
};
use crate::infrastructure::memory_store::DEFAULT_MAX_ATTEMPTS;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const MAX_INSERT_ATTEMPTS_LIMIT: usize = 64;
/// 100 years.
const MAX_LINK_TTL_SECONDS: u64 = 100 * 365 * 24 * 60 * 60;

/// Values given on the command line, used when the matching variable is unset.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    pub debug: bool,
    pub log_format: String,
    pub short_id_length: usize,
    pub short_id_strategy: GeneratorStrategy,
    pub max_insert_attempts: usize,
    /// Lifetime of new links. `None` keeps links for the whole process.
    pub link_ttl_seconds: Option<u64>,
    pub purge_interval_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// `launch` and then to built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_env(launch: &LaunchOptions) -> Result<Self> {
        let host = env::var("APP_HOST")
            .ok()
            .or_else(|| launch.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("APP_PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("APP_PORT must be a port number, got '{v}'"))?,
            Err(_) => launch.port.unwrap_or(DEFAULT_PORT),
        };

        let debug = env::var("APP_DEBUG")
            .map(|v| parse_flag(&v))
            .unwrap_or(launch.debug);

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let short_id_length = parse_var("SHORT_ID_LENGTH")?.unwrap_or(DEFAULT_CODE_LENGTH);

        let short_id_strategy = match env::var("SHORT_ID_STRATEGY") {
            Ok(v) => v
                .parse::<GeneratorStrategy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid SHORT_ID_STRATEGY")?,
            Err(_) => GeneratorStrategy::Random,
        };

        let max_insert_attempts =
            parse_var("MAX_INSERT_ATTEMPTS")?.unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let link_ttl_seconds = parse_var("LINK_TTL_SECONDS")?;

        let purge_interval_seconds = parse_var("PURGE_INTERVAL_SECONDS")?.unwrap_or(60);

        Ok(Self {
            host,
            port,
            base_url,
            debug,
            log_format,
            short_id_length,
            short_id_strategy,
            max_insert_attempts,
            link_ttl_seconds,
            purge_interval_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `host` is empty
    /// - `log_format` is not `text` or `json`
    /// - `base_url` is not an HTTP(S) origin
    /// - `short_id_length` or `max_insert_attempts` is out of range
    /// - `link_ttl_seconds` is zero or longer than 100 years
    /// - `purge_interval_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("APP_HOST must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.short_id_length) {
            anyhow::bail!(
                "SHORT_ID_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.short_id_length
            );
        }

        if self.max_insert_attempts == 0 || self.max_insert_attempts > MAX_INSERT_ATTEMPTS_LIMIT {
            anyhow::bail!(
                "MAX_INSERT_ATTEMPTS must be between 1 and {}, got {}",
                MAX_INSERT_ATTEMPTS_LIMIT,
                self.max_insert_attempts
            );
        }

        if let Some(ttl) = self.link_ttl_seconds
            && !(1..=MAX_LINK_TTL_SECONDS).contains(&ttl)
        {
            anyhow::bail!(
                "LINK_TTL_SECONDS must be between 1 and {}, got {}",
                MAX_LINK_TTL_SECONDS,
                ttl
            );
        }

        if self.purge_interval_seconds == 0 {
            anyhow::bail!("PURGE_INTERVAL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Address the listener binds to, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default log level when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Debug: {}", self.debug);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Short IDs: {:?}, length {}, {} attempts",
            self.short_id_strategy,
            self.short_id_length,
            self.max_insert_attempts
        );
        match self.link_ttl_seconds {
            Some(ttl) => tracing::info!("  Link TTL: {}s", ttl),
            None => tracing::info!("  Link TTL: disabled"),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Parses an optional variable, failing only if it is set but malformed.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => v
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {name}: '{v}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(launch: &LaunchOptions) -> Result<Config> {
    let config = Config::from_env(launch)?;
    config.validate()?;
    Ok(config)
}
