//! Option-based construction of prefixed caches.
//!
//! Hides the store lookup and validation behind a small builder. The `store`
//! option is either a pre-built handle or an identifier resolved through a
//! [`StoreRegistry`]; the `prefix` option is any [`KeyPrefix`] input.
//!
//! ## Example
//!
//! ```rust
//! use prefixkit::builder::PrefixedCacheBuilder;
//! use prefixkit::prefix::Symbol;
//!
//! let cache = PrefixedCacheBuilder::<String>::new()
//!     .store(Symbol::new("memory_store"))
//!     .prefix(Symbol::new("pr"))
//!     .build()
//!     .unwrap();
//!
//! cache.write("foo", "bar".to_string()).unwrap();
//! assert_eq!(cache.prefix(), "pr-");
//! assert_eq!(cache.read("foo").unwrap().as_deref().map(String::as_str), Some("bar"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigError, StoreError};
use crate::prefix::{KeyPrefix, Symbol};
use crate::prefixed::PrefixedCache;
use crate::store::registry::StoreRegistry;
use crate::store::traits::{CacheStore, SharedStore};

/// The `store` option: a ready handle or a registry identifier.
pub enum StoreOption<V> {
    Instance(SharedStore<V>),
    Named(String),
}

impl<V> fmt::Debug for StoreOption<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOption::Instance(store) => f.debug_tuple("Instance").field(&store.name()).finish(),
            StoreOption::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl<V, S> From<Arc<S>> for StoreOption<V>
where
    S: CacheStore<Value = V, Error = StoreError> + 'static,
{
    fn from(store: Arc<S>) -> Self {
        StoreOption::Instance(store)
    }
}

impl<V> From<SharedStore<V>> for StoreOption<V> {
    fn from(store: SharedStore<V>) -> Self {
        StoreOption::Instance(store)
    }
}

impl<V> From<&str> for StoreOption<V> {
    fn from(name: &str) -> Self {
        StoreOption::Named(name.to_owned())
    }
}

impl<V> From<String> for StoreOption<V> {
    fn from(name: String) -> Self {
        StoreOption::Named(name)
    }
}

impl<V> From<Symbol> for StoreOption<V> {
    fn from(name: Symbol) -> Self {
        StoreOption::Named(name.as_str().to_owned())
    }
}

/// Deserializable cache options, e.g. `{"store": "memory_store", "prefix": 123}`.
///
/// Both fields are optional at the type level so that missing options are
/// reported as [`ConfigError`]s rather than as parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CacheOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub store: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub prefix: Option<KeyPrefix>,
}

/// Builder for [`PrefixedCache`] instances over type-erased stores.
pub struct PrefixedCacheBuilder<V> {
    store: Option<StoreOption<V>>,
    prefix: Option<KeyPrefix>,
}

impl<V> PrefixedCacheBuilder<V>
where
    V: Send + Sync + 'static,
{
    /// Create a builder with no options set.
    pub fn new() -> Self {
        Self {
            store: None,
            prefix: None,
        }
    }

    /// Create a builder from parsed [`CacheOptions`].
    pub fn from_options(options: CacheOptions) -> Self {
        Self {
            store: options.store.map(StoreOption::Named),
            prefix: options.prefix,
        }
    }

    /// Set the `store` option.
    pub fn store(mut self, store: impl Into<StoreOption<V>>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Set the `prefix` option.
    pub fn prefix(mut self, prefix: impl Into<KeyPrefix>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Build, resolving named stores against the default registry.
    pub fn build(self) -> Result<PrefixedCache<SharedStore<V>>, ConfigError> {
        self.build_with(&StoreRegistry::with_defaults())
    }

    /// Build, resolving named stores against `registry`.
    ///
    /// The `store` option is validated before the `prefix` option.
    pub fn build_with(
        self,
        registry: &StoreRegistry<V>,
    ) -> Result<PrefixedCache<SharedStore<V>>, ConfigError> {
        let Some(store) = self.store else {
            return Err(ConfigError::MissingStore);
        };
        let Some(prefix) = self.prefix else {
            return Err(ConfigError::MissingPrefix);
        };
        let store = match store {
            StoreOption::Instance(store) => store,
            StoreOption::Named(name) => match registry.resolve(&name) {
                Some(store) => store,
                None => return Err(ConfigError::UnknownStore(name)),
            },
        };
        Ok(PrefixedCache::new(store, prefix))
    }
}

impl<V> Default for PrefixedCacheBuilder<V>
where
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for PrefixedCacheBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixedCacheBuilder")
            .field("store", &self.store)
            .field("prefix", &self.prefix)
            .finish()
    }
}
