//! Cache Statistics Module
//!
//! Hit/miss counters and the statistics snapshot reported by the cache.

use serde::Serialize;

// == Hit Counter ==
/// Cumulative hit/miss counters since construction or the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitCounter {
    pub hits: u64,
    pub misses: u64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total number of counted lookups.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or None when no lookup has been counted.
    pub fn hit_rate(&self) -> Option<f64> {
        match self.lookups() {
            0 => None,
            total => Some(self.hits as f64 / total as f64),
        }
    }
}

// == Cache Stats ==
/// Point-in-time statistics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,
    /// Capacity bound
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    /// Absent until at least one lookup has been counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_rate: Option<f64>,
}

impl CacheStats {
    pub fn new(size: usize, max_size: usize, counter: HitCounter) -> Self {
        Self {
            size,
            max_size,
            hits: counter.hits,
            misses: counter.misses,
            hit_rate: counter.hit_rate(),
        }
    }
}
