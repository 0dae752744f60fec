//! Cache store boundary.
//!
//! A store owns key/value storage and whatever policy comes with it
//! (expiration, eviction, persistence). Decorators such as
//! [`PrefixedCache`](crate::PrefixedCache) only rewrite keys and forward
//! calls, so they depend on this trait alone.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StoreError;

/// Snapshot of store-level metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreMetrics {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub removes: u64,
}

/// Atomic counters backing [`StoreMetrics`] for stores with interior mutability.
#[derive(Debug, Default)]
pub(crate) struct StoreCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    removes: AtomicU64,
}

impl StoreCounters {
    pub(crate) fn snapshot(&self) -> StoreMetrics {
        StoreMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn inc_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn inc_remove(&self) {
        self.removes.fetch_add(1, Ordering::Relaxed);
    }
}

/// Key/value cache store addressed by string keys.
///
/// Implementations use interior mutability; every operation takes `&self`
/// so a single store can be shared behind an `Arc`.
pub trait CacheStore: Send + Sync {
    /// Stored value type.
    type Value;

    /// Error raised by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short backend identifier, e.g. `"memory_store"`.
    fn name(&self) -> &str;

    /// Fetch a value by key. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<Arc<Self::Value>>, Self::Error>;

    /// Insert or replace the value stored under `key`.
    fn set(&self, key: &str, value: Arc<Self::Value>) -> Result<(), Self::Error>;

    /// Remove `key`. Returns `true` if an entry was removed.
    fn delete(&self, key: &str) -> Result<bool, Self::Error>;

    /// Check whether `key` is present.
    fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.get(key)?.is_some())
    }

    /// Snapshot the store's current metrics.
    fn metrics(&self) -> StoreMetrics {
        StoreMetrics::default()
    }
}

/// Type-erased, shareable store handle as produced by
/// [`StoreRegistry`](crate::store::registry::StoreRegistry).
pub type SharedStore<V> = Arc<dyn CacheStore<Value = V, Error = StoreError>>;

impl<S> CacheStore for Arc<S>
where
    S: CacheStore + ?Sized,
{
    type Value = S::Value;
    type Error = S::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<Arc<Self::Value>>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Arc<Self::Value>) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool, Self::Error> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, Self::Error> {
        (**self).exists(key)
    }

    fn metrics(&self) -> StoreMetrics {
        (**self).metrics()
    }
}
