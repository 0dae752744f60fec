//! Store that remembers nothing.
//!
//! Writes succeed and are discarded; every read misses. Useful for disabling
//! caching without changing call sites.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::StoreError;
use crate::store::traits::{CacheStore, StoreCounters, StoreMetrics};

/// Identifier reported by [`NullStore::name`].
pub const NULL_STORE: &str = "null_store";

/// Store that accepts every write and never returns a value.
pub struct NullStore<V> {
    metrics: StoreCounters,
    _marker: PhantomData<fn() -> V>,
}

impl<V> NullStore<V> {
    /// Create a null store.
    pub fn new() -> Self {
        Self {
            metrics: StoreCounters::default(),
            _marker: PhantomData,
        }
    }
}

impl<V> Default for NullStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for NullStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullStore").finish_non_exhaustive()
    }
}

impl<V> CacheStore for NullStore<V> {
    type Value = V;
    type Error = StoreError;

    fn name(&self) -> &str {
        NULL_STORE
    }

    fn get(&self, _key: &str) -> Result<Option<Arc<V>>, StoreError> {
        self.metrics.inc_miss();
        Ok(None)
    }

    fn set(&self, _key: &str, _value: Arc<V>) -> Result<(), StoreError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<bool, StoreError> {
        Ok(false)
    }

    fn metrics(&self) -> StoreMetrics {
        self.metrics.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_store_discards_writes() {
        let store: NullStore<String> = NullStore::new();
        store.set("k", Arc::new("v".to_string())).unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(!store.exists("k").unwrap());
        assert!(!store.delete("k").unwrap());
        assert_eq!(store.metrics().misses, 2);
    }
}
