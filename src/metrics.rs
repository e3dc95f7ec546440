//! Cache Statistics
//!
//! Counters recorded by the cache on every lookup and eviction, a cheap
//! point-in-time [`CacheStatistics`] snapshot, and the [`CacheMetrics`]
//! reporting trait.
//!
//! # Accounting
//!
//! - `lookups_total` counts every `find`, hit or miss. `insert` performs one
//!   internal lookup for its own key, so it counts too.
//! - `hits` counts lookups that located the key, including the internal
//!   lookup of an `insert` that updates an existing key.
//! - `evictions` counts entries dropped because an insert overflowed capacity.
//! - `misses` is never stored; it is `lookups_total - hits`.
//!
//! Counters are never reset. Recreate the cache to start from zero.
//!
//! # Why BTreeMap for reporting?
//!
//! [`CacheMetrics::metrics`] returns a `BTreeMap` so keys always come out in
//! the same order, which keeps log lines and test expectations stable.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Live counters owned by a cache.
///
/// Only the owning cache mutates these; callers see them through
/// [`CacheStatistics`] snapshots.
#[derive(Debug, Default, Clone)]
pub(crate) struct CoreCacheMetrics {
    lookups_total: u64,
    hits: u64,
    evictions: u64,
}

impl CoreCacheMetrics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a lookup. Called before membership is checked.
    #[inline]
    pub(crate) fn record_lookup(&mut self) {
        self.lookups_total += 1;
    }

    /// Records that the lookup just recorded located its key.
    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Records an eviction caused by capacity overflow.
    #[inline]
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Copies the counters into a snapshot.
    #[inline]
    pub(crate) fn snapshot(&self) -> CacheStatistics {
        CacheStatistics {
            lookups_total: self.lookups_total,
            hits: self.hits,
            evictions: self.evictions,
        }
    }
}

/// Point-in-time copy of a cache's counters.
///
/// # Examples
///
/// ```
/// use tinylru::LruCache;
///
/// let mut cache = LruCache::new(1).unwrap();
/// cache.insert("a", 1); // internal lookup: miss
/// cache.find(&"a"); // hit
/// cache.insert("b", 2); // internal lookup: miss, evicts "a"
///
/// let stats = cache.statistics();
/// assert_eq!(stats.lookups_total, 3);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses(), 2);
/// assert_eq!(stats.evictions, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatistics {
    /// Number of lookups, including the one each `insert` performs.
    pub lookups_total: u64,
    /// Number of lookups that found their key.
    pub hits: u64,
    /// Number of entries removed because capacity was exceeded.
    pub evictions: u64,
}

impl CacheStatistics {
    /// Lookups that did not find their key.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.lookups_total - self.hits
    }

    /// Fraction of lookups that hit, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.lookups_total > 0 {
            self.hits as f64 / self.lookups_total as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.lookups_total > 0 {
            self.misses() as f64 / self.lookups_total as f64
        } else {
            0.0
        }
    }

    /// Converts the snapshot to a map keyed by metric name.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("lookups_total".to_string(), self.lookups_total as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("misses".to_string(), self.misses() as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        metrics
    }
}

/// Uniform metrics reporting for cache implementations.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}
