//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    Attachment, AttachmentRequest, CacheStats, ContentSource, DomainError, Page, Space,
};
use crate::infrastructure::cache::ContentCache;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentServiceTrait>,
    pub site_title: Arc<str>,
    /// Bearer token accepted by `/admin` routes
    pub admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentServiceTrait>, site_title: impl Into<Arc<str>>) -> Self {
        Self {
            content,
            site_title: site_title.into(),
            admin_token: None,
        }
    }

    pub fn with_admin_token(mut self, token: impl Into<Arc<str>>) -> Self {
        self.admin_token = Some(token.into());
        self
    }
}

/// Read access to wiki content as seen by the HTTP layer
#[async_trait::async_trait]
pub trait ContentServiceTrait: Send + Sync {
    async fn get_spaces(&self) -> Result<Arc<Vec<Space>>, DomainError>;
    async fn get_space(&self, key: &str) -> Result<Space, DomainError>;
    async fn get_page_by_id(&self, space_key: &str, id: &str) -> Result<Arc<Page>, DomainError>;
    async fn get_page_by_title(&self, space_key: &str, title: &str)
        -> Result<Arc<Page>, DomainError>;
    async fn get_attachment(&self, request: &AttachmentRequest)
        -> Result<Arc<Attachment>, DomainError>;
    fn reset(&self) -> Result<(), DomainError>;
    fn stats(&self) -> Result<CacheStats, DomainError>;
}

#[async_trait::async_trait]
impl<S: ContentSource> ContentServiceTrait for ContentCache<S> {
    async fn get_spaces(&self) -> Result<Arc<Vec<Space>>, DomainError> {
        ContentCache::get_spaces(self).await
    }

    async fn get_space(&self, key: &str) -> Result<Space, DomainError> {
        ContentCache::get_space(self, key).await
    }

    async fn get_page_by_id(&self, space_key: &str, id: &str) -> Result<Arc<Page>, DomainError> {
        ContentCache::get_page_by_id(self, space_key, id).await
    }

    async fn get_page_by_title(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Arc<Page>, DomainError> {
        ContentCache::get_page_by_title(self, space_key, title).await
    }

    async fn get_attachment(
        &self,
        request: &AttachmentRequest,
    ) -> Result<Arc<Attachment>, DomainError> {
        ContentCache::get_attachment(self, request).await
    }

    fn reset(&self) -> Result<(), DomainError> {
        ContentCache::reset(self)
    }

    fn stats(&self) -> Result<CacheStats, DomainError> {
        ContentCache::stats(self)
    }
}
