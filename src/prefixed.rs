//! Key-prefixing cache decorator.
//!
//! ## Architecture
//!
//! ```text
//!   caller ── read("foo") ──► PrefixedCache { prefix: "pr-" }
//!                                   │
//!                                   │  key_for("foo") = "pr-foo"
//!                                   ▼
//!                             store.get("pr-foo") ──► Ok(Some(v)) / Ok(None) / Err(e)
//!                                   │
//!   caller ◄────── returned unchanged
//! ```
//!
//! The prefix is normalized once at construction. Values and errors pass
//! through untouched; the decorator adds no locking, retries or policy of
//! its own, so the wrapped store's guarantees are inherited as-is.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use prefixkit::prefixed::PrefixedCache;
//! use prefixkit::store::memory::MemoryStore;
//! use prefixkit::store::traits::CacheStore;
//!
//! let parent = Arc::new(MemoryStore::<String>::new());
//! let cache = PrefixedCache::new(parent.clone(), "pr");
//!
//! cache.write("baz", "woo".to_string()).unwrap();
//! assert_eq!(parent.get("pr-baz").unwrap().as_deref().map(String::as_str), Some("woo"));
//! assert_eq!(cache.read("missing").unwrap(), None);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::builder::PrefixedCacheBuilder;
use crate::prefix::KeyPrefix;
use crate::store::traits::{CacheStore, SharedStore, StoreMetrics};

/// Cache decorator that namespaces every key with a fixed prefix.
pub struct PrefixedCache<S> {
    store: S,
    prefix: String,
}

impl<V> PrefixedCache<SharedStore<V>>
where
    V: Send + Sync + 'static,
{
    /// Start building a cache from `store` / `prefix` options.
    pub fn builder() -> PrefixedCacheBuilder<V> {
        PrefixedCacheBuilder::new()
    }
}

impl<S> PrefixedCache<S>
where
    S: CacheStore,
{
    /// Wrap `store`, namespacing keys with `prefix` followed by `-`.
    pub fn new(store: S, prefix: impl Into<KeyPrefix>) -> Self {
        let prefix = prefix.into().normalize();
        tracing::debug!(store = store.name(), prefix = %prefix, "prefixed cache created");
        Self { store, prefix }
    }

    /// Normalized prefix, including the trailing separator.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the decorator and return the wrapped store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Key under which `key` is stored in the wrapped store.
    pub fn key_for(&self, key: &str) -> String {
        let mut prefixed = String::with_capacity(self.prefix.len() + key.len());
        prefixed.push_str(&self.prefix);
        prefixed.push_str(key);
        prefixed
    }

    /// Read the value stored under the prefixed `key`.
    pub fn read(&self, key: &str) -> Result<Option<Arc<S::Value>>, S::Error> {
        let key = self.key_for(key);
        tracing::trace!(key = %key, "read");
        self.store.get(&key)
    }

    /// Write `value` under the prefixed `key`.
    pub fn write(&self, key: &str, value: impl Into<Arc<S::Value>>) -> Result<(), S::Error> {
        let key = self.key_for(key);
        tracing::trace!(key = %key, "write");
        self.store.set(&key, value.into())
    }

    /// Delete the prefixed `key`. Returns the store's answer unchanged.
    pub fn delete(&self, key: &str) -> Result<bool, S::Error> {
        let key = self.key_for(key);
        tracing::trace!(key = %key, "delete");
        self.store.delete(&key)
    }

    /// Check whether the prefixed `key` is present.
    pub fn exists(&self, key: &str) -> Result<bool, S::Error> {
        let key = self.key_for(key);
        tracing::trace!(key = %key, "exists");
        self.store.exists(&key)
    }

    /// Read-through: return the cached value, or compute, store and return it.
    pub fn fetch<F>(&self, key: &str, compute: F) -> Result<Arc<S::Value>, S::Error>
    where
        F: FnOnce() -> S::Value,
    {
        let key = self.key_for(key);
        if let Some(value) = self.store.get(&key)? {
            tracing::trace!(key = %key, "fetch hit");
            return Ok(value);
        }
        tracing::trace!(key = %key, "fetch miss");
        let value = Arc::new(compute());
        self.store.set(&key, Arc::clone(&value))?;
        Ok(value)
    }
}

impl<S> fmt::Debug for PrefixedCache<S>
where
    S: CacheStore,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedCache")
            .field("store", &self.store.name())
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// A prefixed cache is itself a store, so decorators nest.
impl<S> CacheStore for PrefixedCache<S>
where
    S: CacheStore,
{
    type Value = S::Value;
    type Error = S::Error;

    fn name(&self) -> &str {
        self.store.name()
    }

    fn get(&self, key: &str) -> Result<Option<Arc<S::Value>>, S::Error> {
        self.read(key)
    }

    fn set(&self, key: &str, value: Arc<S::Value>) -> Result<(), S::Error> {
        self.write(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool, S::Error> {
        PrefixedCache::delete(self, key)
    }

    fn exists(&self, key: &str) -> Result<bool, S::Error> {
        PrefixedCache::exists(self, key)
    }

    fn metrics(&self) -> StoreMetrics {
        self.store.metrics()
    }
}
