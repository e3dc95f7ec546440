//! Concurrent LRU Cache
//!
//! A thread-safe wrapper around [`LruCache`](crate::LruCache) that guards the
//! whole cache (index, recency list and statistics) with a single
//! `parking_lot::Mutex`.
//!
//! # Why one lock?
//!
//! Every `find` mutates the recency list, so even reads need exclusive access,
//! and an `RwLock` would buy nothing. Every operation is O(1), so a single
//! coarse lock keeps the global LRU order and the statistics exact: each
//! `find` or `insert` is applied atomically, and a `statistics()` snapshot is
//! never torn between two counter updates.
//!
//! # Zero-Copy Access
//!
//! [`find`](ConcurrentLruCache::find) clones the value out so the lock is
//! released immediately. When a clone is expensive, or the value should be
//! edited in place, use [`find_with`](ConcurrentLruCache::find_with) or
//! [`find_mut_with`](ConcurrentLruCache::find_mut_with), which run a closure
//! while the lock is held:
//!
//! ```rust
//! use tinylru::ConcurrentLruCache;
//!
//! let cache = ConcurrentLruCache::new(16).unwrap();
//! cache.insert("hits".to_string(), 0u64);
//!
//! cache.find_mut_with("hits", |count| *count += 1);
//! assert_eq!(cache.find_with("hits", |count| *count), Some(1));
//! ```

use crate::config::LruCacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::metrics::{CacheMetrics, CacheStatistics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache behind a single lock.
///
/// Shares the eviction order and statistics semantics of [`LruCache`]
/// exactly; only the access path differs.
///
/// # Example
///
/// ```rust
/// use tinylru::ConcurrentLruCache;
/// use std::sync::Arc;
///
/// let cache = Arc::new(ConcurrentLruCache::new(1000).unwrap());
///
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let cache = Arc::clone(&cache);
///         std::thread::spawn(move || {
///             for i in 0..100 {
///                 cache.insert(format!("key-{}-{}", t, i), i);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(cache.len(), 400);
/// assert_eq!(cache.statistics().lookups_total, 400);
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    inner: Mutex<LruCache<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        LruCache::new(capacity).map(Self::from_cache)
    }

    /// Creates an empty cache from a validated configuration.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::from_cache(LruCache::init(config, hasher))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Creates an empty cache with a custom hash builder.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        Self::from_cache(LruCache::init_with_hasher(config, hash_builder))
    }

    /// Wraps an existing cache, keeping its entries and statistics.
    pub fn from_cache(cache: LruCache<K, V, S>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    /// Unwraps the underlying single-threaded cache.
    pub fn into_inner(self) -> LruCache<K, V, S> {
        self.inner.into_inner()
    }

    /// Maximum number of entries the cache holds.
    pub fn capacity(&self) -> NonZeroUsize {
        self.inner.lock().capacity()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Looks up `key` and returns a **clone** of its value.
    ///
    /// Counts as a lookup and marks the key most recently used on a hit, the
    /// same as [`LruCache::find`].
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.inner.lock().find(key).cloned()
    }

    /// Looks up `key` and applies `f` to its value while holding the lock.
    pub fn find_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        let mut cache = self.inner.lock();
        cache.find(key).map(|value| f(&*value))
    }

    /// Looks up `key` and lets `f` edit its value in place while holding the lock.
    pub fn find_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        let mut cache = self.inner.lock();
        cache.find(key).map(f)
    }

    /// Returns `true` if `key` is cached, without touching recency or statistics.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains(key)
    }

    /// Returns a consistent snapshot of the lookup, hit and eviction counters.
    pub fn statistics(&self) -> CacheStatistics {
        self.inner.lock().statistics()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> ConcurrentLruCache<K, V, S> {
    /// Stores `value` under `key`, evicting the least recently used entry if
    /// the cache overflows. See [`LruCache::insert`].
    pub fn insert(&self, key: K, value: V) {
        self.inner.lock().insert(key, value);
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for ConcurrentLruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Some(cache) => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &*cache)
                .finish(),
            None => f
                .debug_struct("ConcurrentLruCache")
                .field("inner", &"<locked>")
                .finish(),
        }
    }
}
