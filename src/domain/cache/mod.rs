//! Cache domain - key derivation and expiry settings for cached wiki content

mod key;
mod store;

pub use key::{ContentKey, ATTACHMENT_PREFIX, PAGES_PREFIX, SPACES_PREFIX};
pub use store::{CacheStats, StoreConfig};
