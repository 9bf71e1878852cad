//! In-memory TTL store with lazy expiry and periodic sweeping

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};
use std::time::Instant;

use tracing::debug;

use crate::domain::cache::StoreConfig;
use crate::domain::DomainError;

/// Value stored together with its creation time
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    created_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, config: &StoreConfig, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= config.ttl
    }
}

/// Thread-safe key-value store where every entry expires a fixed time after
/// it was written
///
/// Expiry is checked lazily on read: an expired entry is reported as absent
/// and removed. In addition, any access that happens at least
/// `sweep_interval` after the previous sweep purges every expired entry.
/// Writes never refresh the age of other entries and reads never extend an
/// entry's lifetime.
#[derive(Debug)]
pub struct InMemoryStore<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    last_sweep: Mutex<Instant>,
    config: StoreConfig,
}

impl<V: Clone> InMemoryStore<V> {
    /// Creates a store with the standard expiry settings
    pub fn new() -> Self {
        Self::with_config(StoreConfig::standard())
    }

    /// Creates a store with the given expiry settings
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            last_sweep: Mutex::new(Instant::now()),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Returns the value under `key` unless it is missing or expired
    pub fn get(&self, key: &str) -> Result<Option<V>, DomainError> {
        self.sweep_if_due()?;
        let now = Instant::now();

        {
            let entries = self.entries.read().map_err(|e| {
                DomainError::cache(format!("Failed to acquire read lock: {}", e))
            })?;

            match entries.get(key) {
                Some(entry) if !entry.is_expired(&self.config, now) => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.write_entries()?;

        // Another writer may have replaced the entry since the read lock was released
        if entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(&self.config, now))
        {
            entries.remove(key);
            debug!(key = %key, "Expired cache entry removed");
        }

        Ok(None)
    }

    /// Stores `value` under `key`, replacing any previous entry
    pub fn insert(&self, key: impl Into<String>, value: V) -> Result<(), DomainError> {
        self.insert_many([key.into()], value)
    }

    /// Stores `value` under every key in one step, all with the same creation time
    pub fn insert_many<I>(&self, keys: I, value: V) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = String>,
    {
        self.sweep_if_due()?;

        let created_at = Instant::now();
        let mut entries = self.write_entries()?;

        for key in keys {
            entries.insert(
                key,
                CacheEntry {
                    value: value.clone(),
                    created_at,
                },
            );
        }

        Ok(())
    }

    /// Number of entries that have not expired
    pub fn len(&self) -> Result<usize, DomainError> {
        let now = Instant::now();
        let entries = self.entries.read().map_err(|e| {
            DomainError::cache(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries
            .values()
            .filter(|entry| !entry.is_expired(&self.config, now))
            .count())
    }

    /// Drops every expired entry and returns how many were dropped
    pub fn purge_expired(&self) -> Result<usize, DomainError> {
        let now = Instant::now();
        let mut entries = self.write_entries()?;
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired(&self.config, now));

        let purged = before - entries.len();

        if purged > 0 {
            debug!(purged, remaining = entries.len(), "Swept expired cache entries");
        }

        Ok(purged)
    }

    fn sweep_if_due(&self) -> Result<(), DomainError> {
        let due = {
            let mut last_sweep = self.last_sweep.lock().map_err(|e| {
                DomainError::cache(format!("Failed to acquire sweep lock: {}", e))
            })?;

            let now = Instant::now();

            if now.saturating_duration_since(*last_sweep) >= self.config.sweep_interval {
                *last_sweep = now;
                true
            } else {
                false
            }
        };

        if due {
            self.purge_expired()?;
        }

        Ok(())
    }

    fn write_entries(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>>, DomainError> {
        self.entries
            .write()
            .map_err(|e| DomainError::cache(format!("Failed to acquire write lock: {}", e)))
    }
}
