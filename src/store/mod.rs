pub mod memory;
pub mod null;
pub mod registry;
pub mod traits;

pub use memory::MemoryStore;
pub use null::NullStore;
pub use registry::StoreRegistry;
pub use traits::{CacheStore, SharedStore, StoreMetrics};
