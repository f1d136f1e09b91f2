//! Application configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Every key has a default, so an empty environment yields a
//! working development setup.

use std::net::SocketAddr;
use std::time::Duration;

use chrono_tz::Tz;

/// Timezone used when `TIMEZONE` is unset or not a valid IANA name.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Top-level application configuration.
///
/// Loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// Human-readable application name, reported by the root endpoint.
    pub app_name: String,

    /// Deployment environment label (`development`, `production`, ...).
    pub environment: String,

    /// Timezone used to stamp `created_at` / `updated_at`.
    pub timezone: Tz,

    /// CORS allow-list. A single `*` entry means any origin.
    pub allowed_origins: Vec<String>,

    /// Upper bound on request handling time.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()?;

        let app_name = env_or("APP_NAME", "Boilerplate Rust");
        let environment = env_or("ENVIRONMENT", "development");
        let timezone = resolve_timezone(&env_or("TIMEZONE", DEFAULT_TIMEZONE.name()));
        let allowed_origins = parse_origins(&env_or("ALLOWED_ORIGINS", "*"));
        let request_timeout = Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECS", 30));

        Ok(Self {
            listen_addr,
            app_name,
            environment,
            timezone,
            allowed_origins,
            request_timeout,
        })
    }

    /// Returns `true` if any origin may call the API.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            app_name: "Boilerplate Rust".to_string(),
            environment: "development".to_string(),
            timezone: DEFAULT_TIMEZONE,
            allowed_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Logging settings.
///
/// Loaded separately from [`AppConfig`] so the subscriber can be installed
/// before anything else logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub json: bool,
}

impl LogConfig {
    /// Reads `LOG_LEVEL` (default `info`) and `LOG_FORMAT` (`text` or
    /// `json`, default `text`), loading a `.env` file first if present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            level: env_or("LOG_LEVEL", "info"),
            json: env_or("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
        }
    }
}

/// Parses an IANA timezone name, falling back to [`DEFAULT_TIMEZONE`].
///
/// An invalid name is logged and never fails startup.
#[must_use]
pub fn resolve_timezone(name: &str) -> Tz {
    match name.trim().parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(
                timezone = name,
                fallback = DEFAULT_TIMEZONE.name(),
                "unknown timezone, using fallback"
            );
            DEFAULT_TIMEZONE
        }
    }
}

/// Splits a comma-separated origin list, dropping blank entries.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

/// Reads an environment variable, returning `default` when unset.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
