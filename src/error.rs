//! Error types for cache construction.
//!
//! Lookups and insertions never fail: a missing key is an ordinary `None`.
//! The only failure is asking for a cache that could never hold an entry.

/// Result type alias for fallible cache operations.
pub type Result<T> = core::result::Result<T, CacheError>;

/// Errors raised while building a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// The requested capacity cannot hold any entries.
    #[error("invalid cache capacity {capacity}: capacity must be at least 1")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },
}
