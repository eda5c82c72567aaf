//! Process-local cache store with per-entry TTLs.

use super::CacheInterface;
use async_trait::async_trait;
use parking_lot::Mutex;
use prefcache_core::PrefCacheResult;
use shaku::Component;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// A stored value and its deadline.
pub struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// In-memory cache service.
///
/// Deadlines are measured on the tokio clock, so tests running with a
/// paused runtime can advance time deterministically. Expired entries are
/// dropped when touched and swept on every write.
#[derive(Component, Default)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCacheService {
    #[shaku(default = Mutex::default())]
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryCacheService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|e| e.is_live(now)).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining lifetime of a live entry.
    #[must_use]
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .lock()
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.expires_at - now)
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> PrefCacheResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let value = match entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        };

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> PrefCacheResult<()> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now + ttl,
        };

        let mut entries = self.entries.lock();
        entries.retain(|_, e| e.is_live(now));
        entries.insert(key.to_string(), entry);

        debug!("Cached key '{}' with TTL {:?}", key, ttl);
        Ok(())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> PrefCacheResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let renewed = match entries.get_mut(key) {
            Some(entry) if entry.is_live(now) => {
                entry.expires_at = now + ttl;
                true
            }
            Some(_) => {
                entries.remove(key);
                false
            }
            None => false,
        };

        Ok(renewed)
    }

    async fn delete(&self, key: &str) -> PrefCacheResult<bool> {
        let now = Instant::now();
        let removed = self
            .entries
            .lock()
            .remove(key)
            .is_some_and(|e| e.is_live(now));

        debug!("Deleted key '{}': {}", key, removed);
        Ok(removed)
    }

    async fn health_check(&self) -> PrefCacheResult<bool> {
        Ok(true)
    }
}

impl std::fmt::Debug for InMemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCacheService")
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}
