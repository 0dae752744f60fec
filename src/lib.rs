//! prefixkit: key-prefixing decorator for cache stores.
//!
//! [`PrefixedCache`] namespaces every key with a fixed prefix before
//! forwarding reads, writes and deletes to a wrapped [`CacheStore`]. The
//! bundled [`MemoryStore`](store::memory::MemoryStore) and
//! [`NullStore`](store::null::NullStore) cover the common cases; any other
//! backend plugs in by implementing the trait, and can be made available by
//! name through a [`StoreRegistry`](store::registry::StoreRegistry).

pub mod builder;
pub mod error;
pub mod prefix;
pub mod prefixed;
pub mod prelude;
pub mod store;

pub use prefixed::PrefixedCache;
pub use store::traits::CacheStore;
