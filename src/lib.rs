//! Review Cache - A caching proxy for code-review REST APIs
//!
//! Puts a bounded TTL cache with hit/miss statistics in front of an upstream
//! JSON API to avoid redundant remote calls.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use cache::{CacheStats, TtlCache};
pub use config::Config;
pub use error::ProxyError;
pub use upstream::{fingerprint, CachedFetcher, Fetch, UpstreamClient};
