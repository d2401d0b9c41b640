//! Upstream HTTP client
//!
//! reqwest-based [`Fetch`] implementation for a JSON REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use tracing::{debug, warn};

use super::Fetch;
use crate::config::Config;
use crate::error::{ProxyError, Result};

const USER_AGENT: &str = concat!("review_cache/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the upstream REST API.
///
/// Holds one pooled `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
    token: Option<String>,
}

impl UpstreamClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Creates a client from the `upstream_*` settings of `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.upstream_base_url.clone(),
            config.upstream_token.clone(),
            config.upstream_timeout(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request path relative to the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Fetch for UpstreamClient {
    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        debug!(%url, "upstream request");

        let mut request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "upstream request failed");
            ProxyError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            warn!(%url, status = status.as_u16(), "upstream returned error status");
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProxyError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UpstreamClient {
        UpstreamClient::new(base, None, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client("https://example.test/api/").base_url(), "https://example.test/api");
    }

    #[test]
    fn test_url_for_joins_paths() {
        let client = client("https://example.test/api");
        assert_eq!(
            client.url_for("/repos/acme/app/pulls/7"),
            "https://example.test/api/repos/acme/app/pulls/7"
        );
        assert_eq!(
            client.url_for("reviews?page=2"),
            "https://example.test/api/reviews?page=2"
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            upstream_base_url: "http://localhost:9999/".to_string(),
            ..Config::default()
        };
        let client = UpstreamClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }
}
