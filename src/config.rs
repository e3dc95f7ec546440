//! Cache Configuration
//!
//! Configuration for [`LruCache`](crate::LruCache) and, with the `concurrent`
//! feature, [`ConcurrentLruCache`](crate::ConcurrentLruCache).
//!
//! The config struct has a public field for simple instantiation when the
//! capacity is already known to be non-zero, and a validating constructor for
//! capacities that come from untrusted input (flags, config files, requests).
//!
//! # Sizing
//!
//! `capacity` is the maximum number of entries. Eviction is purely
//! count-based: a cache of capacity `n` holds at most `n` key/value pairs
//! no matter how large the values are. Each entry carries roughly 40 bytes of
//! bookkeeping (index slot, list node, two pointers) plus a clone of its key.
//!
//! # Examples
//!
//! ```
//! use tinylru::config::LruCacheConfig;
//! use tinylru::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Capacity known at compile time
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.capacity().get(), 1000);
//!
//! // Capacity from runtime input
//! assert!(LruCacheConfig::new(0).is_err());
//! ```

use crate::error::{CacheError, Result};
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Inserting a new
///   key into a full cache evicts the least recently used entry.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Validates `capacity` and builds a config from it.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(CacheError::InvalidCapacity { capacity })?;
        Ok(Self { capacity })
    }
}

impl TryFrom<usize> for LruCacheConfig {
    type Error = CacheError;

    fn try_from(capacity: usize) -> Result<Self> {
        Self::new(capacity)
    }
}

impl From<NonZeroUsize> for LruCacheConfig {
    fn from(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
