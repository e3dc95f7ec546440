//! Correctness Tests for the LRU Cache
//!
//! These tests validate eviction order, recency updates and statistics
//! accounting using small caches and deterministic access patterns. Each test
//! checks explicitly which key was evicted after an insert.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Explicit checks on `statistics()` after each scenario

use tinylru::config::LruCacheConfig;
use tinylru::{CacheError, CacheMetrics, LruCache};

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig::new(cap).unwrap();
    LruCache::init(config, None)
}

/// Keys from most to least recently used.
fn recency<V>(cache: &LruCache<&'static str, V>) -> Vec<&'static str> {
    cache.keys().copied().collect()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_zero_capacity_is_rejected() {
    let err = LruCache::<String, f64>::new(0).unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });
    assert!(err.to_string().contains("capacity"));

    assert!(LruCacheConfig::new(0).is_err());
}

#[test]
fn test_new_cache_is_empty() {
    let cache: LruCache<u32, u32> = make_lru(3);
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.capacity().get(), 3);

    let stats = cache.statistics();
    assert_eq!(stats.lookups_total, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses(), 0);
    assert_eq!(stats.evictions, 0);
}

// ============================================================================
// CAPACITY AND EVICTION ORDER
// ============================================================================

#[test]
fn test_capacity_bound_holds() {
    let mut cache = make_lru(5);
    for i in 0..100 {
        cache.insert(i, i);
        assert!(cache.len() <= 5);
        if i >= 5 {
            assert_eq!(cache.len(), 5);
        }
    }
    assert_eq!(cache.statistics().evictions, 95);
}

#[test]
fn test_eviction_removes_first_inserted() {
    let mut cache = make_lru(3);
    cache.insert("k1", 1);
    cache.insert("k2", 2);
    cache.insert("k3", 3);
    cache.insert("k4", 4);

    assert!(cache.find(&"k1").is_none(), "k1 should be evicted");
    assert!(cache.contains(&"k2"));
    assert!(cache.contains(&"k3"));
    assert!(cache.contains(&"k4"));
}

#[test]
fn test_find_protects_from_eviction() {
    let mut cache = make_lru(3);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("c", 3);

    // "a" becomes most recently used
    assert_eq!(cache.find(&"a"), Some(&mut 1));
    assert_eq!(recency(&cache), ["a", "c", "b"]);

    cache.insert("d", 4);
    assert!(!cache.contains(&"b"), "b should be evicted");

    cache.insert("e", 5);
    assert!(!cache.contains(&"c"), "c should be evicted");

    // Only now, with every other original key gone, is "a" the victim
    assert_eq!(recency(&cache), ["e", "d", "a"]);
    cache.insert("f", 6);
    assert!(!cache.contains(&"a"), "a should be evicted last");
}

#[test]
fn test_update_in_place() {
    let mut cache = make_lru(3);
    cache.insert("k", 1);
    cache.insert("other", 2);
    let len = cache.len();

    cache.insert("k", 10);
    assert_eq!(cache.len(), len);
    assert_eq!(cache.find(&"k"), Some(&mut 10));
    assert_eq!(cache.statistics().evictions, 0);
}

#[test]
fn test_update_when_full_does_not_evict() {
    let mut cache = make_lru(2);
    cache.insert("a", 1);
    cache.insert("b", 2);
    cache.insert("a", 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.statistics().evictions, 0);
    assert_eq!(recency(&cache), ["a", "b"]);

    // "b" is now least recently used
    cache.insert("c", 4);
    assert!(!cache.contains(&"b"));
    assert_eq!(cache.peek(&"a"), Some(&3));
}

#[test]
fn test_find_returns_mutable_reference() {
    let mut cache = make_lru(2);
    cache.insert("counter".to_string(), 0u32);

    for _ in 0..5 {
        if let Some(count) = cache.find("counter") {
            *count += 1;
        }
    }
    assert_eq!(cache.peek("counter"), Some(&5));
}

#[test]
fn test_miss_is_idempotent() {
    let mut cache = make_lru(3);
    cache.insert("a", 1);
    cache.insert("b", 2);
    let order = recency(&cache);

    for _ in 0..10 {
        assert!(cache.find(&"missing").is_none());
    }

    assert_eq!(cache.len(), 2);
    assert_eq!(recency(&cache), order);
    assert_eq!(cache.peek(&"a"), Some(&1));
    assert_eq!(cache.peek(&"b"), Some(&2));
}

// ============================================================================
// STATISTICS
// ============================================================================

#[test]
fn test_lookups_count_finds_and_inserts() {
    let mut cache = make_lru(3);
    let mut finds = 0u64;
    let mut inserts = 0u64;
    let mut expected_evictions = 0u64;

    for i in 0u32..60 {
        let key = (i * 13) % 7;
        if i % 4 == 0 {
            cache.find(&key);
            finds += 1;
        } else {
            if !cache.contains(&key) && cache.len() == cache.capacity().get() {
                expected_evictions += 1;
            }
            cache.insert(key, i);
            inserts += 1;
        }
    }

    let stats = cache.statistics();
    assert_eq!(stats.lookups_total, finds + inserts);
    assert_eq!(stats.evictions, expected_evictions);
    assert_eq!(stats.hits + stats.misses(), stats.lookups_total);
}

#[test]
fn test_insert_of_existing_key_counts_as_hit() {
    let mut cache = make_lru(2);
    cache.insert("a", 1);
    cache.insert("a", 2);
    cache.insert("a", 3);

    let stats = cache.statistics();
    assert_eq!(stats.lookups_total, 3);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses(), 1);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_reference_scenario() {
    let mut cache = LruCache::new(4).unwrap();

    cache.insert("pi", 3.14);
    cache.insert("e", 2.17);
    cache.insert("gold", 1.61);
    cache.insert("sq2", 1.14);
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.statistics().evictions, 0);

    cache.insert("zero", 0.0);
    assert_eq!(cache.len(), 4);
    assert!(!cache.contains("pi"));

    assert_eq!(cache.find("e"), Some(&mut 2.17));
    assert_eq!(cache.keys().next(), Some(&"e"));

    cache.insert("one", 1.0);
    assert_eq!(cache.len(), 4);
    assert!(!cache.contains("gold"));
    assert_eq!(recency(&cache), ["one", "e", "zero", "sq2"]);

    // Six inserts and one find, each counted as a lookup
    let stats = cache.statistics();
    assert_eq!(stats.lookups_total, 7);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses(), 6);
    assert_eq!(stats.evictions, 2);

    for _ in 0..30 {
        assert_eq!(cache.find("one"), Some(&mut 1.0));
    }

    let stats = cache.statistics();
    assert_eq!(stats.lookups_total, 37);
    assert_eq!(stats.hits, 31);
    assert_eq!(stats.misses(), 6);
    assert_eq!(stats.evictions, 2);
}

#[test]
fn test_metrics_report() {
    let mut cache = make_lru(2);
    cache.insert(1, "one");
    cache.insert(2, "two");
    cache.find(&1);
    cache.find(&3);

    let metrics = cache.metrics();
    assert_eq!(metrics["lookups_total"], 4.0);
    assert_eq!(metrics["hits"], 1.0);
    assert_eq!(metrics["misses"], 3.0);
    assert_eq!(metrics["hit_rate"], 0.25);
    assert_eq!(metrics["miss_rate"], 0.75);
    assert_eq!(metrics["len"], 2.0);
    assert_eq!(metrics["capacity"], 2.0);
    assert_eq!(cache.algorithm_name(), "LRU");
}

// ============================================================================
// KEY AND VALUE TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct ComplexValue {
    val: i32,
    description: String,
}

#[test]
fn test_complex_values() {
    let mut cache = make_lru(2);
    let fruit = |val: i32, description: &str| ComplexValue {
        val,
        description: description.to_string(),
    };

    cache.insert("apple".to_string(), fruit(1, "First fruit"));
    cache.insert("banana".to_string(), fruit(2, "Second fruit"));
    cache.insert("cherry".to_string(), fruit(3, "Third fruit"));

    assert!(cache.find("apple").is_none());
    assert_eq!(cache.find("banana").map(|v| v.val), Some(2));
    assert_eq!(
        cache.peek("cherry").map(|v| v.description.as_str()),
        Some("Third fruit")
    );
}

#[test]
fn test_ordered_keys_with_custom_hasher() {
    use std::collections::hash_map::RandomState;

    let mut cache: LruCache<(u8, u8), u16, RandomState> =
        LruCache::with_hasher(2, RandomState::new()).unwrap();
    cache.insert((0, 1), 1);
    cache.insert((1, 0), 2);
    cache.insert((1, 1), 3);

    assert!(!cache.contains(&(0, 1)));
    assert_eq!(cache.find(&(1, 1)), Some(&mut 3));
    assert_eq!(cache.iter().count(), 2);
}
