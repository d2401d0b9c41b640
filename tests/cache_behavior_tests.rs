//! Integration Tests for the TTL cache
//!
//! Exercises the public `TtlCache` handle the way request handlers use it.

use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use review_cache::{fingerprint, CacheStats, TtlCache};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_end_to_end_scenario() {
    let cache: TtlCache<&str> = TtlCache::new(ms(1000), 5);

    cache.set("a", "x", None);
    assert_eq!(cache.get("a"), Some("x"));
    assert_eq!(cache.stats().hits, 1);

    sleep(ms(1100));

    assert_eq!(cache.get("a"), None);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(
        cache.stats(),
        CacheStats {
            size: 0,
            max_size: 5,
            hits: 1,
            misses: 1,
            hit_rate: Some(0.5),
        }
    );
}

#[test]
fn test_eviction_order_over_capacity() {
    let max_size = 4;
    let cache: TtlCache<usize> = TtlCache::new(Duration::from_secs(300), max_size);

    for i in 1..=max_size + 1 {
        cache.set(format!("k{}", i), i, None);
        assert!(cache.len() <= max_size);
    }

    assert!(!cache.contains("k1"));
    for i in 2..=max_size + 1 {
        assert!(cache.contains(&format!("k{}", i)), "k{} should be present", i);
    }
}

#[test]
fn test_hit_miss_accounting() {
    let cache: TtlCache<u8> = TtlCache::new(Duration::from_secs(300), 10);
    cache.set("present", 1, None);

    cache.get("present");
    cache.get("present");
    cache.get("absent-1");
    cache.get("absent-2");
    cache.get("absent-3");

    let stats = cache.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hit_rate, Some(0.4));
}

#[test]
fn test_has_is_a_counted_lookup() {
    let cache: TtlCache<u8> = TtlCache::new(Duration::from_secs(300), 10);
    cache.set("present", 1, None);

    assert!(cache.has("present"));
    assert!(!cache.has("absent"));
    assert!(cache.contains("present"));

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_cleanup_removes_only_stale_entries() {
    let cache: TtlCache<u8> = TtlCache::new(Duration::from_secs(300), 10);
    cache.set("ttl-100", 1, Some(ms(100)));
    cache.set("ttl-200", 2, Some(ms(200)));
    cache.set("ttl-1000", 3, Some(ms(1000)));

    sleep(ms(150));

    assert_eq!(cache.cleanup(), 1);
    assert!(!cache.contains("ttl-100"));
    assert!(cache.contains("ttl-200"));
    assert!(cache.contains("ttl-1000"));
}

#[test]
fn test_destroy_twice_leaves_empty_reset_cache() {
    let cache: TtlCache<u8> = TtlCache::new(Duration::from_secs(300), 10);
    cache.set("a", 1, None);
    cache.get("a");
    cache.get("b");

    cache.destroy();
    cache.destroy();

    let stats = cache.stats();
    assert!(cache.is_destroyed());
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.hit_rate, None);
}

#[test]
fn test_fingerprint_keys_round_trip_through_cache() {
    let cache: TtlCache<String> = TtlCache::new(Duration::from_secs(300), 10);
    let key = fingerprint(&["reviews", "42", "comments"]);

    assert_eq!(cache.get(&key), None);
    cache.set(key.clone(), "three comments".to_string(), None);

    assert_eq!(cache.get(&key).as_deref(), Some("three comments"));
}

#[tokio::test]
async fn test_background_sweep_runs_without_reads() {
    let cache: Arc<TtlCache<u8>> = Arc::new(TtlCache::with_sweep_interval(
        Duration::from_secs(300),
        10,
        ms(30),
    ));
    cache.set("short", 1, Some(ms(20)));
    cache.set("long", 2, None);

    tokio::time::sleep(ms(150)).await;

    assert_eq!(cache.len(), 1);
    let stats = cache.stats();
    assert_eq!(stats.hits + stats.misses, 0);

    cache.destroy();
    assert!(!cache.is_sweeping());
}

#[tokio::test]
async fn test_destroy_stops_background_sweep() {
    let cache: TtlCache<u8> = TtlCache::with_sweep_interval(Duration::from_secs(300), 10, ms(20));
    assert!(cache.is_sweeping());

    cache.destroy();
    tokio::time::sleep(ms(60)).await;

    assert!(!cache.is_sweeping());
    cache.set("after", 1, None);
    assert!(cache.is_empty());
}
