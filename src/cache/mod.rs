//! Cache Module
//!
//! Bounded in-memory caching with per-entry TTL, insertion-order (FIFO)
//! capacity eviction and hit/miss statistics.

mod entry;
mod order;
mod stats;
mod store;
mod ttl_cache;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::{CacheStats, HitCounter};
pub use store::CacheStore;
pub use ttl_cache::TtlCache;

// == Public Constants ==
/// Lifetime applied to entries stored without an explicit TTL
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);

/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Period of the background sweep
pub const SWEEP_INTERVAL: Duration = Duration::from_millis(60_000);
