//! Preference service trait definition.

use async_trait::async_trait;
use prefcache_core::{Interface, PrefCacheResult, UserId, UserPreference};

/// Preference lookup and invalidation.
#[async_trait]
pub trait PreferenceService: Interface + Send + Sync {
    /// Gets a user's preferences, reading through the cache.
    ///
    /// Fails with `NotFound` when the authoritative source has no record.
    async fn get_preferences(&self, user_id: &UserId) -> PrefCacheResult<UserPreference>;

    /// Drops the cached entry for a user so the next lookup hits the source.
    ///
    /// Succeeds when no entry exists. Fails with `StoreUnavailable` when the
    /// cache store cannot be reached.
    async fn invalidate(&self, user_id: &UserId) -> PrefCacheResult<()>;
}
