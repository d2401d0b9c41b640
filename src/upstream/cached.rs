//! Read-through caching in front of a [`Fetch`] implementation.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::Fetch;
use crate::cache::TtlCache;
use crate::error::Result;

/// A value returned by [`CachedFetcher::fetch`], tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub data: Value,
    /// True when served from cache without a remote call
    pub cached: bool,
}

/// Consults the cache before every remote call and stores successful
/// results. Failures are returned as-is and never cached.
pub struct CachedFetcher<F> {
    cache: Arc<TtlCache<Value>>,
    inner: F,
}

impl<F: Fetch> CachedFetcher<F> {
    pub fn new(cache: Arc<TtlCache<Value>>, inner: F) -> Self {
        Self { cache, inner }
    }

    pub fn cache(&self) -> &Arc<TtlCache<Value>> {
        &self.cache
    }

    /// Returns the cached value for `key`, or fetches `path` and caches it
    /// under `key`.
    pub async fn fetch(&self, key: &str, path: &str) -> Result<Fetched> {
        if let Some(data) = self.cache.get(key) {
            debug!(key, "cache hit");
            return Ok(Fetched { data, cached: true });
        }

        debug!(key, path, "cache miss, fetching upstream");
        let data = self.inner.fetch(path).await?;
        self.cache.set(key, data.clone(), None);

        Ok(Fetched {
            data,
            cached: false,
        })
    }
}
