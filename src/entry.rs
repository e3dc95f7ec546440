//! Index Entry Type
//!
//! Each key in the cache index maps to a [`CacheEntry`]: the cached value plus
//! an opaque handle to the key's node in the recency list. The handle is what
//! lets a hit relink its node to the front, and an eviction unlink the back
//! node, without ever scanning the list.
//!
//! # Memory Layout
//!
//! - `value: V` - User's value type
//! - `node: *mut Entry<K>` - 8 bytes (pointer into the recency list)
//!
//! The key itself lives twice: once as the index key and once inside the
//! recency node, so that eviction can read the LRU key straight off the back
//! of the list.

use crate::list::Entry;
use core::fmt;

/// Value slot stored in the cache index.
///
/// # Safety
///
/// `node` is valid for as long as this entry is present in the index. The
/// owning cache removes the index entry in the same operation that frees the
/// node, so a live `CacheEntry` never holds a dangling handle.
pub(crate) struct CacheEntry<K, V> {
    /// The cached value.
    pub(crate) value: V,

    /// Position of this entry's key in the recency list.
    pub(crate) node: *mut Entry<K>,
}

impl<K, V> CacheEntry<K, V> {
    #[inline]
    pub(crate) fn new(value: V, node: *mut Entry<K>) -> Self {
        Self { value, node }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
