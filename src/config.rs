//! Service configuration from environment variables

use crate::error::ConfigError;
use crate::source::{Category, ProviderTable};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 9876;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 1000;

/// Configuration for the number window service
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host to bind the HTTP listener to
    pub bind_addr: String,

    /// HTTP listening port
    pub port: u16,

    /// Maximum number of values held in the window
    pub window_size: NonZeroUsize,

    /// Upper bound on a single provider call
    pub fetch_timeout: Duration,

    /// Provider endpoint per category
    pub providers: ProviderTable,

    /// Raw `RUST_LOG` filter, if set
    pub rust_log: Option<String>,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `PORT` (default: 9876)
    /// - `BIND_ADDR` (default: 0.0.0.0)
    /// - `WINDOW_SIZE` (default: 10, must be positive)
    /// - `FETCH_TIMEOUT_MS` (default: 1000, must be positive)
    /// - `NUMBERS_PRIME_URL`, `NUMBERS_FIBONACCI_URL`, `NUMBERS_EVEN_URL`,
    ///   `NUMBERS_RANDOM_URL` (default: public providers)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);

        let bind_addr = lookup("BIND_ADDR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let window_size = parse_or_default(&lookup, "WINDOW_SIZE", DEFAULT_WINDOW_SIZE);
        let window_size =
            NonZeroUsize::new(window_size).ok_or_else(|| ConfigError::InvalidValue {
                key: "WINDOW_SIZE",
                value: window_size.to_string(),
                reason: "window capacity must be positive",
            })?;

        let timeout_ms = parse_or_default(&lookup, "FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "FETCH_TIMEOUT_MS",
                value: timeout_ms.to_string(),
                reason: "timeout must be positive",
            });
        }

        let mut providers = ProviderTable::default();
        for category in Category::all() {
            if let Some(url) = lookup(category.url_env_key()).filter(|s| !s.trim().is_empty()) {
                providers.set(category, url.trim().to_string());
            }
        }

        Ok(Self {
            bind_addr,
            port,
            window_size,
            fetch_timeout: Duration::from_millis(timeout_ms),
            providers,
            rust_log: lookup("RUST_LOG"),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.bind_addr.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} '{}', defaulting to {}", key, raw, default);
            default
        }),
        None => default,
    }
}
