//! API Handlers
//!
//! HTTP request handlers for each proxy server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{CacheStats, TtlCache};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{CleanupResponse, DeleteResponse, HealthResponse, ProxyResponse};
use crate::upstream::{fingerprint, CachedFetcher, Fetch, UpstreamClient};

/// Application state shared across all handlers.
///
/// The cache is owned here and shared by `Arc`; the read-through fetcher
/// holds a second reference to the same cache.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<TtlCache<Value>>,
    pub proxy: Arc<CachedFetcher<Arc<dyn Fetch>>>,
}

impl AppState {
    /// Creates a new AppState around an existing cache and upstream.
    pub fn new(cache: Arc<TtlCache<Value>>, upstream: Arc<dyn Fetch>) -> Self {
        let proxy = Arc::new(CachedFetcher::new(Arc::clone(&cache), upstream));
        Self { cache, proxy }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must be called inside a tokio runtime for the cache sweep to run.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(TtlCache::from_config(config));
        let upstream = UpstreamClient::from_config(config)?;
        Ok(Self::new(cache, Arc::new(upstream)))
    }
}

/// Namespace for cache keys created by the proxy endpoint
const PROXY_KEY_PREFIX: &str = "proxy";

/// Handler for GET /proxy/*path
///
/// Serves the upstream document at `path` (query string included), from
/// cache when a fresh copy exists.
///
/// Works on the raw request URI: the path stays percent-encoded, so
/// `reviews%3Fpage=2` is never turned into a query string, and the cache key
/// is the exact upstream target.
pub async fn proxy_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<ProxyResponse>> {
    let path = uri
        .path()
        .strip_prefix("/proxy")
        .unwrap_or_default()
        .trim_start_matches('/');
    if path.is_empty() {
        return Err(ProxyError::InvalidRequest(
            "Upstream path cannot be empty".to_string(),
        ));
    }

    let target = match uri.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", path, query),
        _ => path.to_string(),
    };
    let key = fingerprint(&[PROXY_KEY_PREFIX, &target]);

    let fetched = state.proxy.fetch(&key, &target).await?;
    Ok(Json(ProxyResponse::new(key, fetched)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Handler for POST /cache/cleanup
///
/// Runs a sweep immediately, in addition to the periodic one.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<CleanupResponse> {
    let removed = state.cache.cleanup();
    if removed > 0 {
        info!(removed, "manual cleanup removed stale entries");
    }
    Json(CleanupResponse::new(removed, state.cache.len()))
}

/// Handler for DELETE /cache
///
/// Drops every entry and resets statistics.
pub async fn clear_handler(State(state): State<AppState>) -> Json<DeleteResponse> {
    state.cache.clear();
    info!("cache cleared");
    Json(DeleteResponse::cleared())
}

/// Handler for DELETE /cache/entries/*key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if state.cache.delete(&key) {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(ProxyError::NotFound(key))
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
