//! Named store registry.
//!
//! Maps symbolic identifiers (e.g. `"memory_store"`) to constructors. The
//! builder consults a registry when the `store` option is given by name
//! instead of as a pre-built handle.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use prefixkit::store::memory::MemoryStore;
//! use prefixkit::store::registry::StoreRegistry;
//! use prefixkit::store::traits::CacheStore;
//!
//! let mut registry = StoreRegistry::<String>::with_defaults();
//! registry.register("bounded_store", || Arc::new(MemoryStore::<String>::with_capacity(16)));
//!
//! let store = registry.resolve("bounded_store").unwrap();
//! assert_eq!(store.name(), "memory_store");
//! assert!(registry.resolve("redis_store").is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::store::memory::{MEMORY_STORE, MemoryStore};
use crate::store::null::{NULL_STORE, NullStore};
use crate::store::traits::{CacheStore, SharedStore};

type StoreConstructor<V> = Box<dyn Fn() -> SharedStore<V> + Send + Sync>;

/// Identifier → store constructor table.
pub struct StoreRegistry<V> {
    constructors: FxHashMap<String, StoreConstructor<V>>,
}

impl<V> StoreRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: FxHashMap::default(),
        }
    }

    /// Register (or replace) the constructor for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn() -> SharedStore<V> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
        self
    }

    /// Build a fresh store for `name`, or `None` if the name is unknown.
    pub fn resolve(&self, name: &str) -> Option<SharedStore<V>> {
        let store = self.constructors.get(name).map(|construct| construct());
        match &store {
            Some(store) => tracing::debug!(name, backend = store.name(), "resolved cache store"),
            None => tracing::debug!(name, "unknown cache store identifier"),
        }
        store
    }

    /// Check whether `name` has a registered constructor.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered identifiers, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check whether no identifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<V> StoreRegistry<V>
where
    V: Send + Sync + 'static,
{
    /// Registry pre-populated with `"memory_store"` and `"null_store"`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(MEMORY_STORE, || Arc::new(MemoryStore::<V>::new()))
            .register(NULL_STORE, || Arc::new(NullStore::<V>::new()));
        registry
    }
}

impl<V> Default for StoreRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for StoreRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_memory_and_null_stores() {
        let registry = StoreRegistry::<u64>::with_defaults();
        assert_eq!(registry.names(), vec!["memory_store", "null_store"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("memory_store").unwrap().name(), "memory_store");
        assert_eq!(registry.resolve("null_store").unwrap().name(), "null_store");
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = StoreRegistry::<u64>::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("memory_store").is_none());
    }

    #[test]
    fn each_resolve_builds_a_fresh_store() {
        let registry = StoreRegistry::<u64>::with_defaults();
        let a = registry.resolve("memory_store").unwrap();
        let b = registry.resolve("memory_store").unwrap();
        a.set("k", Arc::new(1)).unwrap();
        assert_eq!(b.get("k").unwrap(), None);
    }

    #[test]
    fn register_replaces_existing_constructor() {
        let mut registry = StoreRegistry::<u64>::with_defaults();
        registry.register("memory_store", || Arc::new(NullStore::<u64>::new()));
        assert_eq!(registry.resolve("memory_store").unwrap().name(), "null_store");
        assert!(registry.contains("memory_store"));
    }

    #[test]
    fn custom_constructor_can_share_one_instance() {
        let shared: SharedStore<u64> = Arc::new(MemoryStore::<u64>::new());
        let mut registry = StoreRegistry::<u64>::new();
        let handle = shared.clone();
        registry.register("shared", move || handle.clone());

        registry.resolve("shared").unwrap().set("k", Arc::new(9)).unwrap();
        assert_eq!(shared.get("k").unwrap().as_deref(), Some(&9));
    }
}
