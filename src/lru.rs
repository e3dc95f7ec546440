//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a count-bounded LRU cache with O(1) lookup, O(1)
//! insertion and O(1) recency tracking.
//!
//! # Algorithm
//!
//! Two structures are kept in lockstep:
//!
//! - an **index**, a hash map from key to [`CacheEntry`], holding the value and
//!   a handle to the key's node in the recency list;
//! - a **recency list**, a doubly linked list of keys ordered from most
//!   recently used (front) to least recently used (back).
//!
//! ```text
//!   index                          recency list
//!  ┌────────┬──────────────┐      ┌──────┐   ┌──────┐   ┌──────┐
//!  │ "e"    │ 2.17, node ──┼─────▶│ "e"  │◀─▶│"zero"│◀─▶│"sq2" │ ◀── evicted next
//!  │ "zero" │ 0.0,  node ──┼────────────────▶└──────┘   └──────┘
//!  │ "sq2"  │ 1.14, node ──┼────────────────────────────────▲
//!  └────────┴──────────────┘
//! ```
//!
//! A hit relinks the key's node to the front through its handle. Inserting a
//! new key pushes a node to the front; if that takes the cache over capacity,
//! the back node is unlinked, its key read out by value, and the matching
//! index entry removed.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Find: O(1)
//!   - Insert: O(1)
//!   - Eviction: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Each entry stores its key twice (index and list node) plus two list
//!     pointers and one node handle
//!
//! # Thread Safety
//!
//! `LruCache` is not thread-safe. Wrap it in a lock, or enable the
//! `concurrent` feature for [`ConcurrentLruCache`](crate::ConcurrentLruCache).

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::Result;
use crate::list::{self, List};
use crate::metrics::{CacheMetrics, CacheStatistics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use log::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A count-bounded Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) lookup and insertion.
/// When an insertion pushes the cache past its capacity, the least recently
/// used entry is evicted.
///
/// Every [`find`](Self::find) is counted in the cache's
/// [`statistics`](Self::statistics), and so is the lookup each
/// [`insert`](Self::insert) performs for its own key.
///
/// # Examples
///
/// ```
/// use tinylru::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
///
/// cache.insert("apple", 1);
/// cache.insert("banana", 2);
///
/// // Finding a key makes it the most recently used
/// assert_eq!(cache.find(&"apple"), Some(&mut 1));
///
/// // Going over capacity evicts the least recently used key
/// cache.insert("cherry", 3);
/// assert_eq!(cache.find(&"banana"), None);
/// assert_eq!(cache.find(&"apple"), Some(&mut 1));
///
/// // Values can be edited in place
/// if let Some(value) = cache.find(&"cherry") {
///     *value += 10;
/// }
/// assert_eq!(cache.peek(&"cherry"), Some(&13));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<K>,
    map: HashMap<K, CacheEntry<K, V>, S>,
    metrics: CoreCacheMetrics,
}

// SAFETY: LruCache owns every list node, and the raw pointers in `map` only
// ever point at those nodes. Moving the cache to another thread moves all of it.
unsafe impl<K: Send, V: Send, S: Send> Send for LruCache<K, V, S> {}

// SAFETY: All mutation requires &mut self; shared references cannot cause data races.
unsafe impl<K: Sync, V: Sync, S: Sync> Sync for LruCache<K, V, S> {}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero. No cache is created in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinylru::{CacheError, LruCache};
    ///
    /// let cache: LruCache<String, f64> = LruCache::new(4).unwrap();
    /// assert_eq!(cache.capacity().get(), 4);
    ///
    /// let err = LruCache::<String, f64>::new(0).unwrap_err();
    /// assert_eq!(err, CacheError::InvalidCapacity { capacity: 0 });
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates an empty cache from a validated configuration.
    ///
    /// `hasher` defaults to [`DefaultHashBuilder`] when `None`.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an empty cache with a custom hash builder.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        let config = LruCacheConfig::new(capacity)?;
        Ok(Self::init_with_hasher(config, hash_builder))
    }

    /// Creates an empty cache from a validated configuration and a custom hash builder.
    pub fn init_with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        debug!("creating LRU cache with capacity {}", config.capacity);
        // One slot of headroom: a new key is indexed before the LRU one is evicted.
        let map_capacity = config.capacity.get().saturating_add(1);
        LruCache {
            config,
            list: List::new(),
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            metrics: CoreCacheMetrics::new(),
        }
    }

    /// Maximum number of entries the cache holds.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Number of entries currently cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up `key`, marking it most recently used on a hit.
    ///
    /// The lookup is always counted in `lookups_total`; a hit also counts in
    /// `hits`. A miss leaves the recency order untouched.
    ///
    /// The returned reference lets the caller edit the cached value in place.
    /// It borrows the cache mutably, so it cannot outlive a later `insert`
    /// that might evict the entry.
    pub fn find<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.metrics.record_lookup();
        let entry = self.map.get_mut(key)?;
        self.metrics.record_hit();
        // SAFETY: entry.node was handed out by self.list for this key and is
        // freed only together with the index entry.
        unsafe { self.list.move_to_front(entry.node) };
        Some(&mut entry.value)
    }

    /// Returns the value for `key` without touching recency or statistics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is cached, without touching recency or statistics.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Iterates over cached keys from most to least recently used.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.list.iter(),
        }
    }

    /// Iterates over cached entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            keys: self.list.iter(),
            map: &self.map,
        }
    }

    /// Returns a snapshot of the lookup, hit and eviction counters.
    #[inline]
    pub fn statistics(&self) -> CacheStatistics {
        self.metrics.snapshot()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Stores `value` under `key` and marks the key most recently used.
    ///
    /// The key is first looked up (and counted) like a [`find`](Self::find).
    /// An existing entry is overwritten in place. A new key is added at the
    /// front; if that leaves the cache over capacity, the least recently
    /// used entry is evicted. At most one entry is evicted per call.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(slot) = self.find(&key) {
            *slot = value;
            return;
        }

        let node = self.list.push_front(key.clone());
        self.map.insert(key, CacheEntry::new(value, node));

        if self.map.len() > self.config.capacity.get() {
            self.evict_lru();
        }
    }

    fn evict_lru(&mut self) {
        // The key is read out of the back node by value before the index entry
        // holding the node handle is removed.
        if let Some(key) = self.list.remove_last() {
            self.map.remove(&key);
            self.metrics.record_eviction();
            trace!(
                "evicted least recently used entry (len={}, capacity={})",
                self.map.len(),
                self.config.capacity
            );
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.statistics().to_btreemap();
        metrics.insert("capacity".to_string(), self.capacity().get() as f64);
        metrics.insert("len".to_string(), self.len() as f64);
        metrics
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .field("statistics", &self.metrics.snapshot())
            .finish()
    }
}

/// Iterator over cached keys, most recently used first.
///
/// Created by [`LruCache::keys`].
pub struct Keys<'a, K> {
    inner: list::Iter<'a, K>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys").field("inner", &self.inner).finish()
    }
}

/// Iterator over cached entries, most recently used first.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V, S> {
    keys: list::Iter<'a, K>,
    map: &'a HashMap<K, CacheEntry<K, V>, S>,
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let key = self.keys.next()?;
        let entry = self.map.get(key)?;
        Some((key, &entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V, S> fmt::Debug for Iter<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("keys", &self.keys).finish()
    }
}
