pub use crate::builder::{CacheOptions, PrefixedCacheBuilder, StoreOption};
pub use crate::error::{ConfigError, StoreError};
pub use crate::prefix::{KeyPrefix, Symbol};
pub use crate::prefixed::PrefixedCache;
pub use crate::store::{CacheStore, MemoryStore, NullStore, SharedStore, StoreMetrics, StoreRegistry};
