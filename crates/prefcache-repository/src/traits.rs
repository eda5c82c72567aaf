//! Repository trait definitions.

use prefcache_core::{Interface, PrefCacheResult, UserId, UserPreference};
use async_trait::async_trait;

/// Authoritative source of user preference records.
#[async_trait]
pub trait PreferenceRepository: Interface + Send + Sync {
    /// Fetches the preference record for a user.
    ///
    /// Returns `Ok(None)` when the source has no record for the user.
    async fn fetch(&self, user_id: &UserId) -> PrefCacheResult<Option<UserPreference>>;
}
