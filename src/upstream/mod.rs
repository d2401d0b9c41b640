//! Upstream Module
//!
//! Access to the remote code-review / source-hosting REST API, and the
//! read-through wrapper that puts the cache in front of it.

mod cached;
mod client;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use cached::{CachedFetcher, Fetched};
pub use client::UpstreamClient;

/// Anything that can resolve a request path to a JSON document.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Value>;
}

#[async_trait]
impl<F: Fetch + ?Sized> Fetch for Arc<F> {
    async fn fetch(&self, path: &str) -> Result<Value> {
        (**self).fetch(path).await
    }
}

/// Builds an opaque cache key from caller identifiers.
///
/// Parts are joined with `:` verbatim. Empty parts are skipped so
/// `["pulls", "", "7"]` and `["pulls", "7"]` share a key. Only the last part
/// may itself contain `:`; a colon in an earlier part makes keys ambiguous.
pub fn fingerprint(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(":")
}
