//! Response models for the proxy server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. Cache statistics are served directly
//! as [`CacheStats`](crate::cache::CacheStats).

pub mod responses;

// Re-export commonly used types
pub use responses::{CleanupResponse, DeleteResponse, HealthResponse, ProxyResponse};
