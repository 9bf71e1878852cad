//! Read-through cache in front of a wiki content source

use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::in_memory::InMemoryStore;
use crate::domain::cache::{CacheStats, ContentKey, StoreConfig};
use crate::domain::content::{Attachment, AttachmentRequest, ContentSource, Page, Space};
use crate::domain::DomainError;

/// Value held by the content store
#[derive(Debug, Clone)]
enum CachedContent {
    Spaces(Arc<Vec<Space>>),
    Page(Arc<Page>),
    Attachment(Arc<Attachment>),
}

/// Read-through cache wrapping a [`ContentSource`]
///
/// Lookups go to the active store first; on a miss the source is queried and
/// the result stored before it is returned. Failures are passed through and
/// never stored. Pages are written under both their id key and their title
/// key, so either addressing scheme warms the other.
///
/// Concurrent misses on the same key are not coalesced: each caller fetches
/// and the last write wins.
pub struct ContentCache<S: ContentSource> {
    source: S,
    store: RwLock<Arc<InMemoryStore<CachedContent>>>,
    reset_config: StoreConfig,
}

impl<S: ContentSource> ContentCache<S> {
    /// Creates a cache with the standard expiry settings
    pub fn new(source: S) -> Self {
        Self::with_configs(source, StoreConfig::standard(), StoreConfig::after_reset())
    }

    /// Creates a cache with explicit settings for the initial store and for
    /// the stores created by [`ContentCache::reset`]
    pub fn with_configs(source: S, initial: StoreConfig, reset_config: StoreConfig) -> Self {
        Self {
            source,
            store: RwLock::new(Arc::new(InMemoryStore::with_config(initial))),
            reset_config,
        }
    }

    /// Returns every space of the wiki
    pub async fn get_spaces(&self) -> Result<Arc<Vec<Space>>, DomainError> {
        let store = self.current_store()?;
        let key = ContentKey::all_spaces().to_string();

        if let Some(CachedContent::Spaces(spaces)) = store.get(&key)? {
            debug!(key = %key, "Cache hit for spaces");
            return Ok(spaces);
        }

        debug!(key = %key, "Cache miss, fetching spaces");

        let spaces = Arc::new(self.source.fetch_spaces().await?);
        store.insert(key.clone(), CachedContent::Spaces(spaces.clone()))?;

        debug!(key = %key, count = spaces.len(), "Cached spaces");

        Ok(spaces)
    }

    /// Returns the space with the given key, served from the cached listing
    pub async fn get_space(&self, key: &str) -> Result<Space, DomainError> {
        let spaces = self.get_spaces().await?;

        Space::find_by_key(&spaces, key)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Space '{}' not found", key)))
    }

    /// Returns a page of `space_key` by title
    ///
    /// Titles are matched in their normalized form, so `Release Notes` and
    /// `Release+Notes` address the same entry.
    pub async fn get_page_by_title(
        &self,
        space_key: &str,
        title: &str,
    ) -> Result<Arc<Page>, DomainError> {
        let store = self.current_store()?;
        let key = ContentKey::page_by_title(space_key, title).to_string();

        if let Some(CachedContent::Page(page)) = store.get(&key)? {
            debug!(key = %key, "Cache hit for page");
            return Ok(page);
        }

        debug!(key = %key, "Cache miss, fetching page by title");

        let page = self.source.fetch_page_by_title(space_key, title).await?;
        Self::populate_page(&store, space_key, page)
    }

    /// Returns a page of `space_key` by content id
    pub async fn get_page_by_id(&self, space_key: &str, id: &str) -> Result<Arc<Page>, DomainError> {
        let store = self.current_store()?;
        let key = ContentKey::page_by_id(space_key, id).to_string();

        if let Some(CachedContent::Page(page)) = store.get(&key)? {
            debug!(key = %key, "Cache hit for page");
            return Ok(page);
        }

        debug!(key = %key, "Cache miss, fetching page by id");

        let page = self.source.fetch_page_by_id(space_key, id).await?;
        Self::populate_page(&store, space_key, page)
    }

    /// Returns the bytes of an attachment
    pub async fn get_attachment(
        &self,
        request: &AttachmentRequest,
    ) -> Result<Arc<Attachment>, DomainError> {
        let store = self.current_store()?;
        let key = ContentKey::attachment(request).to_string();

        if let Some(CachedContent::Attachment(attachment)) = store.get(&key)? {
            debug!(key = %key, "Cache hit for attachment");
            return Ok(attachment);
        }

        debug!(key = %key, "Cache miss, fetching attachment");

        let attachment = Arc::new(self.source.fetch_attachment(request).await?);
        store.insert(key.clone(), CachedContent::Attachment(attachment.clone()))?;

        debug!(key = %key, bytes = attachment.len(), "Cached attachment");

        Ok(attachment)
    }

    /// Discards every cached entry by swapping in a new, shorter-lived store
    ///
    /// Fetches already in flight finish against the store they started with,
    /// so their results never reach the new store.
    pub fn reset(&self) -> Result<(), DomainError> {
        let mut store = self
            .store
            .write()
            .map_err(|e| DomainError::cache(format!("Failed to acquire store lock: {}", e)))?;

        *store = Arc::new(InMemoryStore::with_config(self.reset_config));

        info!(
            ttl_secs = self.reset_config.ttl.as_secs(),
            sweep_interval_secs = self.reset_config.sweep_interval.as_secs(),
            "Content cache reset"
        );

        Ok(())
    }

    /// Live entry count and settings of the active store
    pub fn stats(&self) -> Result<CacheStats, DomainError> {
        let store = self.current_store()?;
        Ok(CacheStats::new(store.len()?, store.config()))
    }

    fn current_store(&self) -> Result<Arc<InMemoryStore<CachedContent>>, DomainError> {
        self.store
            .read()
            .map(|store| Arc::clone(&store))
            .map_err(|e| DomainError::cache(format!("Failed to acquire store lock: {}", e)))
    }

    fn populate_page(
        store: &InMemoryStore<CachedContent>,
        space_key: &str,
        page: Page,
    ) -> Result<Arc<Page>, DomainError> {
        let page = Arc::new(page);
        let by_id = ContentKey::page_by_id(space_key, page.id.as_str()).to_string();
        let by_title = ContentKey::page_by_title(space_key, &page.title).to_string();

        store.insert_many(
            [by_id.clone(), by_title.clone()],
            CachedContent::Page(page.clone()),
        )?;

        debug!(by_id = %by_id, by_title = %by_title, "Cached page under both keys");

        Ok(page)
    }
}

impl<S: ContentSource> std::fmt::Debug for ContentCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("reset_config", &self.reset_config)
            .finish_non_exhaustive()
    }
}
