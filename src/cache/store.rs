//! Cache Store Module
//!
//! Synchronous cache engine combining HashMap storage with insertion-order
//! tracking, TTL expiration and hit/miss accounting. Owns no timer; the
//! [`TtlCache`](super::TtlCache) handle wraps it with locking and the sweep.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, HitCounter, InsertionOrder};

// == Cache Store ==
/// Bounded key-value storage with per-entry TTL and FIFO capacity eviction.
#[derive(Debug)]
pub struct CacheStore<T> {
    entries: HashMap<String, CacheEntry<T>>,
    order: InsertionOrder,
    counter: HitCounter,
    max_size: usize,
    default_ttl: Duration,
    destroyed: bool,
}

impl<T: Clone> CacheStore<T> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `default_ttl` - Lifetime applied when `set` is called without a TTL
    /// * `max_size` - Maximum number of entries held at once
    pub fn new(default_ttl: Duration, max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counter: HitCounter::new(),
            max_size,
            default_ttl,
            destroyed: false,
        }
    }

    // == Set ==
    /// Stores a value under `key`.
    ///
    /// `ttl` of `None` or zero falls back to the default TTL. Inserting a new
    /// key into a full store first evicts the entry with the oldest `set`.
    ///
    /// Overwriting a present key never evicts; it refreshes the insertion
    /// time and moves the key to the newest position. Eviction order is
    /// therefore the order of each key's most recent `set`, not the order in
    /// which keys were first inserted: after `set(a)`, `set(b)`, `set(a)` the
    /// next eviction removes `b`.
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        if self.destroyed || self.max_size == 0 {
            return;
        }

        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_size {
            if let Some(evicted) = self.order.pop_oldest() {
                self.entries.remove(&evicted);
                debug!(key = %evicted, "evicted oldest entry at capacity");
            }
        }

        let ttl = ttl.filter(|t| !t.is_zero()).unwrap_or(self.default_ttl);
        self.order.record_insert(&key);
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Retrieves a fresh value by key.
    ///
    /// Missing and stale keys count as misses; stale entries are removed.
    pub fn get(&mut self, key: &str) -> Option<T> {
        if self.destroyed {
            return None;
        }

        let Some(entry) = self.entries.get(key) else {
            self.counter.record_miss();
            return None;
        };

        if entry.is_stale_at(Instant::now()) {
            self.remove_entry(key);
            self.counter.record_miss();
            debug!(key, "dropped stale entry on read");
            return None;
        }

        let value = entry.data.clone();
        self.counter.record_hit();
        Some(value)
    }

    // == Has ==
    /// Same as `get(key).is_some()`, including the statistics update.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Contains ==
    /// Checks for a fresh entry without touching statistics or removing
    /// anything.
    pub fn contains(&self, key: &str) -> bool {
        !self.destroyed
            && self
                .entries
                .get(key)
                .is_some_and(|entry| !entry.is_stale_at(Instant::now()))
    }

    // == Delete ==
    /// Removes an entry. Returns whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == Clear ==
    /// Drops every entry and resets hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.counter.reset();
    }

    // == Cleanup ==
    /// Removes every stale entry. Returns the number removed.
    pub fn cleanup(&mut self) -> usize {
        if self.destroyed {
            return 0;
        }

        let now = Instant::now();
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_stale_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &stale {
            self.remove_entry(key);
        }
        stale.len()
    }

    // == Destroy ==
    /// Empties the store, resets statistics and turns every later operation
    /// into a no-op. Calling it again has no further effect.
    pub fn destroy(&mut self) {
        self.clear();
        self.destroyed = true;
    }

    // == Stats ==
    /// Snapshot of size, capacity and hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats::new(self.entries.len(), self.max_size, self.counter)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    fn remove_entry(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }
}
