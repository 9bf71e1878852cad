use async_trait::async_trait;

use super::{Attachment, AttachmentRequest, Page, Space};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Backing source of wiki content (the remote REST API in production)
///
/// Implementations never cache and never retry: every call is one attempt and
/// every failure is returned to the caller unchanged.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Lists all spaces with their rendered descriptions
    async fn fetch_spaces(&self) -> Result<Vec<Space>, DomainError>;

    /// Finds a page of `space_key` by title
    async fn fetch_page_by_title(&self, space_key: &str, title: &str)
        -> Result<Page, DomainError>;

    /// Loads a page of `space_key` by content id
    async fn fetch_page_by_id(&self, space_key: &str, id: &str) -> Result<Page, DomainError>;

    /// Downloads the bytes of one attachment version
    async fn fetch_attachment(&self, request: &AttachmentRequest)
        -> Result<Attachment, DomainError>;
}
