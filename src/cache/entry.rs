//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value together with its insertion time and lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value, opaque to the cache
    pub data: T,
    /// Insertion time on the monotonic clock
    pub inserted_at: Instant,
    /// Lifetime of the entry
    pub ttl: Duration,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry inserted now.
    pub fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived its TTL as of `now`.
    ///
    /// Boundary condition: an entry is stale only once its age is strictly
    /// greater than its TTL. An entry whose age equals its TTL is still fresh.
    pub fn is_stale_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) > self.ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("payload", Duration::from_secs(60));

        assert_eq!(entry.data, "payload");
        assert_eq!(entry.ttl, Duration::from_secs(60));
        assert!(!entry.is_stale_at(Instant::now()));
    }

    #[test]
    fn test_entry_becomes_stale() {
        let entry = CacheEntry::new(1u32, Duration::from_millis(50));

        assert!(!entry.is_stale_at(Instant::now()));

        sleep(Duration::from_millis(80));

        assert!(entry.is_stale_at(Instant::now()));
    }

    #[test]
    fn test_stale_boundary_is_strict() {
        let now = Instant::now();
        let entry = CacheEntry {
            data: (),
            inserted_at: now,
            ttl: Duration::from_millis(100),
        };

        assert!(!entry.is_stale_at(now + Duration::from_millis(100)));
        assert!(entry.is_stale_at(now + Duration::from_millis(101)));
    }

    #[test]
    fn test_zero_ttl_is_stale_after_any_elapsed_time() {
        let now = Instant::now();
        let entry = CacheEntry {
            data: (),
            inserted_at: now,
            ttl: Duration::ZERO,
        };

        assert!(!entry.is_stale_at(now));
        assert!(entry.is_stale_at(now + Duration::from_nanos(1)));
    }

    #[test]
    fn test_clock_before_insertion_is_fresh() {
        let entry = CacheEntry::new((), Duration::ZERO);
        let earlier = entry.inserted_at - Duration::from_millis(5);

        assert!(!entry.is_stale_at(earlier));
    }
}
