#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## How It Works
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         LruCache<K, V>                               │
//! │                                                                      │
//! │   index: HashMap<K, CacheEntry>          recency list (front = MRU)  │
//! │  ┌──────────┬──────────────────┐                                     │
//! │  │  key     │ value │ node ────┼──▶ [k3] ◀─▶ [k1] ◀─▶ [k2]           │
//! │  └──────────┴──────────────────┘                          ▲          │
//! │                                                   evicted next       │
//! │                                                                      │
//! │   find(k):   count lookup ─▶ hit? count hit, relink node to front    │
//! │   insert(k): find(k) ─▶ hit? overwrite                               │
//! │                       └─ miss: push front, index, evict back if full │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation | Time | Notes |
//! |-----------|------|-------|
//! | `find` | O(1) | Counts a lookup; relinks on hit |
//! | `insert` | O(1) | One internal lookup, at most one eviction |
//! | `statistics` | O(1) | Copies three counters |
//! | `peek`, `contains` | O(1) | No recency or statistics side effects |
//!
//! ## Statistics
//!
//! ```rust
//! use tinylru::LruCache;
//!
//! let mut cache = LruCache::new(4).unwrap();
//! cache.insert("pi", 3.14);
//! cache.insert("e", 2.17);
//! cache.insert("gold", 1.61);
//! cache.insert("sq2", 1.14);
//! cache.insert("zero", 0.0); // evicts "pi"
//! cache.find("e");            // "e" becomes most recently used
//! cache.insert("one", 1.0);   // evicts "gold"
//!
//! let stats = cache.statistics();
//! assert_eq!(stats.lookups_total, 7);
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses(), 6);
//! assert_eq!(stats.evictions, 2);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use tinylru::config::LruCacheConfig;
//! use tinylru::LruCache;
//!
//! let config = LruCacheConfig::new(10_000).unwrap();
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert!(cache.is_empty());
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: cache
//! construction at `debug`, each eviction at `trace`. Install any `log`
//! implementation in the host program to see them.
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration for cache construction
//! - [`error`]: Construction errors
//! - [`metrics`]: Statistics snapshots and metrics reporting
//! - [`concurrent`]: Single-lock thread-safe wrapper (requires `concurrent` feature)

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std", not(feature = "hashbrown")))]
extern crate std;

/// Index entry type.
///
/// Holds a cached value together with the handle to its key's node in the
/// recency list.
pub(crate) mod entry;

/// Doubly linked list used as the recency sequence.
///
/// **Note**: This module is internal infrastructure. It exposes unsafe raw
/// pointer operations that require careful invariant maintenance.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-capacity cache that evicts the least recently used entry
/// when an insertion exceeds the capacity.
pub mod lru;

/// Cache statistics.
///
/// Lookup, hit and eviction counters with point-in-time snapshots.
pub mod metrics;

/// Thread-safe cache wrapper.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

pub use config::LruCacheConfig;
pub use error::CacheError;
pub use lru::LruCache;
pub use metrics::{CacheMetrics, CacheStatistics};

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentLruCache;
