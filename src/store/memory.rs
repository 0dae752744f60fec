//! In-memory store backed by a hash map.
//!
//! ## Architecture
//! - Entries live in an `FxHashMap<String, Arc<V>>` behind a
//!   `parking_lot::RwLock`; reads share the lock, writes take it exclusively.
//! - Unbounded by default. A bounded store enforces an entry-count limit by
//!   rejecting new keys with [`StoreError::Full`]; updates to existing keys
//!   always succeed. There is no eviction or expiration.
//! - Hit/miss/insert/update/remove counters are relaxed atomics.
//!
//! ## Example Usage
//! ```rust
//! use std::sync::Arc;
//!
//! use prefixkit::store::memory::MemoryStore;
//! use prefixkit::store::traits::CacheStore;
//!
//! let store: MemoryStore<String> = MemoryStore::new();
//! store.set("greeting", Arc::new("hello".to_string())).unwrap();
//! assert_eq!(store.get("greeting").unwrap().as_deref().map(String::as_str), Some("hello"));
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::StoreError;
use crate::store::traits::{CacheStore, StoreCounters, StoreMetrics};

/// Identifier reported by [`MemoryStore::name`].
pub const MEMORY_STORE: &str = "memory_store";

/// Thread-safe in-memory store.
#[derive(Debug)]
pub struct MemoryStore<V> {
    map: RwLock<FxHashMap<String, Arc<V>>>,
    capacity: Option<usize>,
    metrics: StoreCounters,
}

impl<V> MemoryStore<V> {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self {
            map: RwLock::new(FxHashMap::default()),
            capacity: None,
            metrics: StoreCounters::default(),
        }
    }

    /// Create a store that holds at most `capacity` distinct keys.
    ///
    /// The bound is a limit, not a preallocation; the map grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(FxHashMap::default()),
            capacity: Some(capacity),
            metrics: StoreCounters::default(),
        }
    }

    /// Maximum number of keys, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.map.write().clear();
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore for MemoryStore<V>
where
    V: Send + Sync,
{
    type Value = V;
    type Error = StoreError;

    fn name(&self) -> &str {
        MEMORY_STORE
    }

    fn get(&self, key: &str) -> Result<Option<Arc<V>>, StoreError> {
        let value = self.map.read().get(key).cloned();
        match value {
            Some(_) => self.metrics.inc_hit(),
            None => self.metrics.inc_miss(),
        }
        Ok(value)
    }

    fn set(&self, key: &str, value: Arc<V>) -> Result<(), StoreError> {
        let mut map = self.map.write();
        if let Some(slot) = map.get_mut(key) {
            *slot = value;
            self.metrics.inc_update();
            return Ok(());
        }
        if let Some(capacity) = self.capacity {
            if map.len() >= capacity {
                return Err(StoreError::Full { capacity });
            }
        }
        map.insert(key.to_owned(), value);
        self.metrics.inc_insert();
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let removed = self.map.write().remove(key).is_some();
        if removed {
            self.metrics.inc_remove();
        }
        Ok(removed)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.map.read().contains_key(key))
    }

    fn metrics(&self) -> StoreMetrics {
        self.metrics.snapshot()
    }
}
