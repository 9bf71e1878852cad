//! Cache infrastructure - TTL store and the read-through content cache

mod content_cache;
mod in_memory;

pub use content_cache::ContentCache;
pub use in_memory::InMemoryStore;
