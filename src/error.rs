//! Error types for the prefixkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a [`PrefixedCache`](crate::PrefixedCache)
//!   is built from incomplete or unresolvable options.
//! - [`StoreError`]: Error type of the bundled stores and of
//!   [`SharedStore`](crate::store::SharedStore) handles.
//!
//! ## Example Usage
//!
//! ```
//! use prefixkit::builder::PrefixedCacheBuilder;
//! use prefixkit::error::ConfigError;
//!
//! let err = PrefixedCacheBuilder::<String>::new()
//!     .prefix("pr")
//!     .build()
//!     .unwrap_err();
//! assert_eq!(err, ConfigError::MissingStore);
//! assert_eq!(err.to_string(), "No cache store option given.");
//! ```

use std::error::Error as StdError;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Invalid configuration detected while building a prefixed cache.
///
/// Raised synchronously by the builder; no partially built cache is ever
/// returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The `store` option was not supplied.
    #[error("No cache store option given.")]
    MissingStore,

    /// The `prefix` option was not supplied.
    #[error("No key prefix option given.")]
    MissingPrefix,

    /// The `store` option named an identifier the registry does not know.
    #[error("Unknown cache store: {0}")]
    UnknownStore(String),
}

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Error returned by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store is bounded and already holds `capacity` distinct keys.
    #[error("cache store is full (capacity {capacity})")]
    Full { capacity: usize },

    /// Failure reported by an external backend.
    #[error(transparent)]
    Backend(#[from] Box<dyn StdError + Send + Sync>),
}

impl StoreError {
    /// Wraps an arbitrary backend error.
    pub fn backend(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
