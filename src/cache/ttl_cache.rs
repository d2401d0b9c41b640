//! TTL Cache Handle
//!
//! Thread-safe owning handle around [`CacheStore`] that also owns the
//! background sweep.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, DEFAULT_MAX_SIZE, DEFAULT_TTL, SWEEP_INTERVAL};
use crate::config::Config;
use crate::tasks::spawn_sweep_task;

/// Bounded key-value cache with per-entry TTL, FIFO capacity eviction,
/// hit/miss statistics and a periodic background sweep.
///
/// The cache has two states. It is Active from construction until
/// [`destroy`](Self::destroy) is called, after which it is Destroyed: empty,
/// without a sweep, and ignoring every further operation. A fresh instance
/// must be constructed to resume caching.
///
/// All operations take a single internal lock, never block on I/O and never
/// fail.
///
/// # Example
/// ```ignore
/// let cache: TtlCache<String> = TtlCache::new(Duration::from_secs(300), 100);
/// cache.set("reviews:42", "payload".to_string(), None);
/// assert_eq!(cache.get("reviews:42").as_deref(), Some("payload"));
/// cache.destroy();
/// ```
#[derive(Debug)]
pub struct TtlCache<T> {
    store: Arc<Mutex<CacheStore<T>>>,
    sweep: Mutex<Option<JoinHandle<()>>>,
}

impl<T> TtlCache<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a cache that sweeps stale entries every [`SWEEP_INTERVAL`].
    pub fn new(default_ttl: Duration, max_size: usize) -> Self {
        Self::with_sweep_interval(default_ttl, max_size, SWEEP_INTERVAL)
    }

    /// Creates a cache with a custom sweep period.
    ///
    /// The sweep is only scheduled when called inside a tokio runtime and
    /// `sweep_interval` is non-zero. Otherwise the owner is expected to call
    /// [`cleanup`](Self::cleanup) itself; reads never return stale entries
    /// either way.
    pub fn with_sweep_interval(
        default_ttl: Duration,
        max_size: usize,
        sweep_interval: Duration,
    ) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(default_ttl, max_size)));

        let sweep = if sweep_interval.is_zero() {
            debug!("cache sweep disabled");
            None
        } else if Handle::try_current().is_ok() {
            Some(spawn_sweep_task(Arc::downgrade(&store), sweep_interval))
        } else {
            warn!("no tokio runtime available, cache sweep not scheduled");
            None
        };

        Self {
            store,
            sweep: Mutex::new(sweep),
        }
    }

    /// Creates a cache from the `cache_*` settings of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_sweep_interval(
            config.cache_default_ttl(),
            config.cache_max_size,
            config.cache_sweep_interval(),
        )
    }

    /// Stores `value` under `key`. See [`CacheStore::set`].
    pub fn set(&self, key: impl Into<String>, value: T, ttl: Option<Duration>) {
        self.store.lock().set(key, value, ttl);
    }

    /// Returns a clone of the fresh value under `key`, counting a hit or miss.
    pub fn get(&self, key: &str) -> Option<T> {
        self.store.lock().get(key)
    }

    /// `get(key).is_some()`. Counts a hit or miss exactly like `get`.
    pub fn has(&self, key: &str) -> bool {
        self.store.lock().has(key)
    }

    /// Checks for a fresh entry without affecting statistics.
    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    /// Removes `key`. Returns whether an entry was present.
    pub fn delete(&self, key: &str) -> bool {
        self.store.lock().delete(key)
    }

    /// Drops all entries and resets statistics.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    /// Removes stale entries now. Returns how many were removed.
    pub fn cleanup(&self) -> usize {
        self.store.lock().cleanup()
    }

    /// Stops the sweep, empties the cache and resets statistics.
    ///
    /// Safe to call more than once. Once it returns the sweep never touches
    /// the cache again: a tick already in flight either finished before the
    /// store lock was taken here or observes the destroyed state and exits.
    pub fn destroy(&self) {
        if let Some(handle) = self.sweep.lock().take() {
            handle.abort();
        }
        self.store.lock().destroy();
        debug!("cache destroyed");
    }

    /// Snapshot of size, capacity and hit/miss counters. `hit_rate` is
    /// absent until the first lookup.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.store.lock().is_destroyed()
    }

    /// Number of stored entries, stale ones not yet swept included.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Capacity fixed at construction.
    pub fn max_size(&self) -> usize {
        self.store.lock().max_size()
    }

    /// TTL applied when `set` is given none.
    pub fn default_ttl(&self) -> Duration {
        self.store.lock().default_ttl()
    }

    /// Whether a background sweep is currently scheduled.
    pub fn is_sweeping(&self) -> bool {
        self.sweep
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Default for TtlCache<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_MAX_SIZE)
    }
}

impl<T> Drop for TtlCache<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweep.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_without_runtime_no_sweep() {
        let cache: TtlCache<String> = TtlCache::new(ms(1000), 5);

        assert!(!cache.is_sweeping());

        cache.set("a", "x".to_string(), None);
        assert_eq!(cache.get("a"), Some("x".to_string()));
    }

    #[test]
    fn test_defaults() {
        let cache: TtlCache<u32> = TtlCache::default();

        assert_eq!(cache.default_ttl(), DEFAULT_TTL);
        assert_eq!(cache.max_size(), DEFAULT_MAX_SIZE);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_runtime_schedules_sweep() {
        let cache: TtlCache<u32> = TtlCache::new(ms(1000), 5);
        assert!(cache.is_sweeping());
        cache.destroy();
        assert!(!cache.is_sweeping());
    }

    #[tokio::test]
    async fn test_zero_interval_disables_sweep() {
        let cache: TtlCache<u32> = TtlCache::with_sweep_interval(ms(1000), 5, Duration::ZERO);
        assert!(!cache.is_sweeping());
    }

    #[tokio::test]
    async fn test_background_sweep_removes_stale_entries() {
        let cache: TtlCache<&str> = TtlCache::with_sweep_interval(ms(300_000), 10, ms(40));

        cache.set("short", "1", Some(ms(20)));
        cache.set("long", "2", None);

        tokio::time::sleep(ms(200)).await;

        assert_eq!(cache.len(), 1);
        assert!(cache.contains("long"));
        assert_eq!(cache.stats().misses, 0);
    }

    #[tokio::test]
    async fn test_destroy_stops_sweep_and_resets() {
        let cache: TtlCache<&str> = TtlCache::with_sweep_interval(ms(300_000), 10, ms(20));
        cache.set("a", "x", None);
        cache.get("a");
        cache.get("b");

        cache.destroy();
        cache.destroy();

        assert!(cache.is_destroyed());
        assert!(!cache.is_sweeping());

        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate, None);

        cache.set("c", "y", None);
        assert_eq!(cache.get("c"), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_shared_across_tasks() {
        let cache: Arc<TtlCache<usize>> = Arc::new(TtlCache::new(ms(300_000), 50));

        let mut handles = Vec::new();
        for worker in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                for i in 0..20 {
                    let key = format!("{}-{}", worker, i);
                    cache.set(key.clone(), i, None);
                    cache.get(&key);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stats = cache.stats();
        assert!(stats.size <= 50);
        assert_eq!(stats.hits + stats.misses, 160);
    }
}
