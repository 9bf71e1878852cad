//! Domain layer - Wiki content entities, cache keys and errors

pub mod cache;
pub mod content;
pub mod error;

pub use cache::{CacheStats, ContentKey, StoreConfig};
pub use content::{Attachment, AttachmentRequest, ContentSource, Page, Space, TrustedHtml};
pub use error::DomainError;
