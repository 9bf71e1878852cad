//! Store configuration and statistics

use std::time::Duration;

use serde::Serialize;

/// Expiry settings of a content store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreConfig {
    /// Lifetime of an entry, counted from its creation
    pub ttl: Duration,
    /// Minimum time between two sweeps of expired entries
    pub sweep_interval: Duration,
}

impl StoreConfig {
    pub const fn new(ttl: Duration, sweep_interval: Duration) -> Self {
        Self {
            ttl,
            sweep_interval,
        }
    }

    /// Settings of the store created at startup
    pub const fn standard() -> Self {
        Self::new(Duration::from_secs(30 * 60), Duration::from_secs(5 * 60))
    }

    /// Shorter-lived settings used once the cache has been reset
    pub const fn after_reset() -> Self {
        Self::new(Duration::from_secs(5 * 60), Duration::from_secs(30))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Snapshot of the active store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries that have not yet expired
    pub entries: usize,
    pub ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl CacheStats {
    pub fn new(entries: usize, config: StoreConfig) -> Self {
        Self {
            entries,
            ttl_secs: config.ttl.as_secs(),
            sweep_interval_secs: config.sweep_interval.as_secs(),
        }
    }
}
