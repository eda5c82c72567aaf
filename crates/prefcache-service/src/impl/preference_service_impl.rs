//! Read-through preference cache.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::preference_service::PreferenceService;
use async_trait::async_trait;
use prefcache_config::CacheConfig;
use prefcache_core::{PrefCacheError, PrefCacheResult, UserId, UserPreference};
use prefcache_repository::PreferenceRepository;
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Sliding expiration used when none is configured (10 minutes).
pub const DEFAULT_SLIDING_EXPIRATION: Duration = Duration::from_secs(600);

/// Read-through cache accessor for user preferences.
///
/// Lookups consult the cache store first. A hit renews the entry's TTL; a
/// miss fetches from the authoritative source and populates the store. When
/// the store cannot be read the record is served straight from the source
/// and nothing is written.
///
/// Concurrent misses for the same user may both fetch and both write; the
/// last write wins.
#[derive(Component)]
#[shaku(interface = PreferenceService)]
pub struct PreferenceCacheAccessor {
    #[shaku(inject)]
    repository: Arc<dyn PreferenceRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(default = cache_keys::DEFAULT_NAMESPACE.to_string())]
    namespace: String,
    #[shaku(default = DEFAULT_SLIDING_EXPIRATION)]
    sliding_expiration: Duration,
}

impl PreferenceCacheAccessor {
    /// Creates an accessor with the default namespace and sliding window.
    pub fn new(repository: Arc<dyn PreferenceRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            repository,
            cache,
            namespace: cache_keys::DEFAULT_NAMESPACE.to_string(),
            sliding_expiration: DEFAULT_SLIDING_EXPIRATION,
        }
    }

    /// Creates an accessor using the configured namespace and sliding window.
    pub fn from_config(
        repository: Arc<dyn PreferenceRepository>,
        cache: Arc<dyn CacheInterface>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(repository, cache)
            .with_namespace(config.namespace.clone())
            .with_sliding_expiration(config.sliding_expiration())
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_sliding_expiration(mut self, sliding_expiration: Duration) -> Self {
        self.sliding_expiration = sliding_expiration;
        self
    }

    /// Cache key holding a user's preferences.
    #[must_use]
    pub fn cache_key(&self, user_id: &UserId) -> String {
        cache_keys::user_preferences(&self.namespace, user_id)
    }

    #[must_use]
    pub fn sliding_expiration(&self) -> Duration {
        self.sliding_expiration
    }

    async fn fetch_from_source(&self, user_id: &UserId) -> PrefCacheResult<UserPreference> {
        self.repository
            .fetch(user_id)
            .await?
            .ok_or_else(|| PrefCacheError::not_found("UserPreference", user_id))
    }

    /// Resets the entry's TTL. Failure only shortens the entry's life.
    async fn renew(&self, key: &str) {
        match self.cache.expire(key, self.sliding_expiration).await {
            Ok(true) => debug!(key = %key, "Renewed sliding expiration"),
            Ok(false) => debug!(key = %key, "Entry expired before its TTL could be renewed"),
            Err(e) => warn!(key = %key, error = %e, "Failed to renew sliding expiration"),
        }
    }

    /// Writes the entry. Failure leaves the next lookup to fetch again.
    async fn populate(&self, key: &str, preference: &UserPreference) {
        if let Err(e) = self.cache.set(key, preference, self.sliding_expiration).await {
            warn!(key = %key, error = %e, "Failed to cache preferences");
        }
    }
}

#[async_trait]
impl PreferenceService for PreferenceCacheAccessor {
    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn get_preferences(&self, user_id: &UserId) -> PrefCacheResult<UserPreference> {
        let key = self.cache_key(user_id);
        let mut corrupt = false;

        match self.cache.get::<UserPreference>(&key).await {
            Ok(Some(cached)) if cached.belongs_to(user_id) => {
                debug!(key = %key, "Serving preferences from cache");
                self.renew(&key).await;
                return Ok(cached);
            }
            Ok(Some(cached)) => {
                warn!(key = %key, cached_user = %cached.user_id(), "Cached record belongs to another user");
                corrupt = true;
            }
            Ok(None) => debug!(key = %key, "Cache miss"),
            Err(PrefCacheError::Deserialization(e)) => {
                warn!(key = %key, error = %e, "Discarding corrupt cache entry");
                corrupt = true;
            }
            Err(e) if e.is_store_unavailable() => {
                warn!(key = %key, error = %e, "Cache store unavailable, reading from source");
                return self.fetch_from_source(user_id).await;
            }
            Err(e) => return Err(e),
        }

        let preference = match self.fetch_from_source(user_id).await {
            Ok(preference) => preference,
            Err(e) => {
                if corrupt && e.is_not_found() {
                    // Nothing valid will replace the entry, so drop it.
                    if let Err(delete_err) = self.cache.delete(&key).await {
                        warn!(key = %key, error = %delete_err, "Failed to drop corrupt cache entry");
                    }
                }
                return Err(e);
            }
        };

        self.populate(&key, &preference).await;
        debug!(key = %key, "Cached preferences from source");

        Ok(preference)
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    async fn invalidate(&self, user_id: &UserId) -> PrefCacheResult<()> {
        let key = self.cache_key(user_id);
        let removed = self.cache.delete(&key).await?;

        info!(key = %key, removed, "Invalidated cached preferences");
        Ok(())
    }
}

impl std::fmt::Debug for PreferenceCacheAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceCacheAccessor")
            .field("namespace", &self.namespace)
            .field("sliding_expiration", &self.sliding_expiration)
            .finish_non_exhaustive()
    }
}
