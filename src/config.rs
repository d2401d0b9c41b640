//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in milliseconds for entries stored without explicit TTL
    pub cache_default_ttl_ms: u64,
    /// Maximum number of entries the cache can hold
    pub cache_max_size: usize,
    /// Background sweep interval in milliseconds
    pub cache_sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Root URL of the upstream REST API
    pub upstream_base_url: String,
    /// Bearer token sent to the upstream, if any
    pub upstream_token: Option<String>,
    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_MS` - Default entry TTL in ms (default: 300000)
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep frequency in ms (default: 60000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Upstream REST root (default: https://api.github.com)
    /// - `UPSTREAM_TOKEN` - Bearer token for the upstream (default: unset)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_default_ttl_ms: parse_var("CACHE_DEFAULT_TTL_MS")
                .unwrap_or(defaults.cache_default_ttl_ms),
            cache_max_size: parse_var("CACHE_MAX_SIZE").unwrap_or(defaults.cache_max_size),
            cache_sweep_interval_ms: parse_var("CACHE_SWEEP_INTERVAL_MS")
                .unwrap_or(defaults.cache_sweep_interval_ms),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            upstream_token: env::var("UPSTREAM_TOKEN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout_secs),
        }
    }

    pub fn cache_default_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_default_ttl_ms)
    }

    pub fn cache_sweep_interval(&self) -> Duration {
        Duration::from_millis(self.cache_sweep_interval_ms)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_default_ttl_ms: 300_000,
            cache_max_size: 100,
            cache_sweep_interval_ms: 60_000,
            server_port: 3000,
            upstream_base_url: "https://api.github.com".to_string(),
            upstream_token: None,
            upstream_timeout_secs: 30,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
