//! Memoization of resolved station identifiers.
//!
//! Resolutions are keyed by `station:line` and live for the whole process
//! unless explicitly cleared. The default cache never evicts; the station
//! count of a metro area is small enough that it does not need to.
//!
//! Concurrent resolutions of the same key may both miss and both write.
//! Both write the same identifier, so the race is harmless.

use std::fmt;
use std::future::Future;

use moka::future::Cache as MokaCache;

use crate::domain::StationId;

/// Cache key for one station on one line.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(station_name: &str, line_name: &str) -> Self {
        Self(format!("{station_name}:{line_name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CacheKey({})", self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A store for resolved identifiers.
pub trait ResolutionCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> impl Future<Output = Option<StationId>> + Send;

    fn put(&self, key: CacheKey, id: StationId) -> impl Future<Output = ()> + Send;

    /// Drop every entry.
    fn clear(&self);
}

/// Configuration for the in-memory cache.
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// Maximum number of entries, or `None` for no limit.
    pub max_capacity: Option<u64>,
}

impl CacheConfig {
    /// A cache holding at most `max_capacity` entries.
    pub fn bounded(max_capacity: u64) -> Self {
        Self {
            max_capacity: Some(max_capacity),
        }
    }
}

/// In-memory resolution cache.
#[derive(Clone)]
pub struct MemoryResolutionCache {
    entries: MokaCache<CacheKey, StationId>,
}

impl MemoryResolutionCache {
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder();
        if let Some(max) = config.max_capacity {
            builder = builder.max_capacity(max);
        }
        Self {
            entries: builder.build(),
        }
    }

    /// Approximate number of entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

impl Default for MemoryResolutionCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl fmt::Debug for MemoryResolutionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryResolutionCache")
            .field("entry_count", &self.entry_count())
            .finish()
    }
}

impl ResolutionCache for MemoryResolutionCache {
    async fn get(&self, key: &CacheKey) -> Option<StationId> {
        self.entries.get(key).await
    }

    async fn put(&self, key: CacheKey, id: StationId) {
        self.entries.insert(key, id).await;
    }

    fn clear(&self) {
        self.entries.invalidate_all();
    }
}
