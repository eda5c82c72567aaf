//! Lookup / invalidate walkthrough run by the binary.

use prefcache_core::{PrefCacheResult, UserId, UserPreference};
use prefcache_service::PreferenceService;
use std::time::Duration;
use tracing::info;

/// Records returned by each lookup of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughReport {
    /// Cold lookup, fetched from the source.
    pub first: UserPreference,
    /// Repeated lookup, served from the cache.
    pub second: UserPreference,
    /// Lookup after invalidation, fetched again.
    pub after_invalidate: UserPreference,
}

/// Runs get, get, invalidate, get for one user.
///
/// `pause` is slept between the first two lookups.
pub async fn run_walkthrough(
    service: &dyn PreferenceService,
    user_id: &UserId,
    pause: Duration,
) -> PrefCacheResult<WalkthroughReport> {
    let first = service.get_preferences(user_id).await?;
    info!(preferences = %serde_json::to_string(&first)?, "Loaded preferences");

    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }

    let second = service.get_preferences(user_id).await?;
    info!(preferences = %serde_json::to_string(&second)?, "Loaded preferences again");

    service.invalidate(user_id).await?;
    info!(user_id = %user_id, "Cache invalidated");

    let after_invalidate = service.get_preferences(user_id).await?;
    info!(
        preferences = %serde_json::to_string(&after_invalidate)?,
        "Loaded preferences after invalidation"
    );

    Ok(WalkthroughReport {
        first,
        second,
        after_invalidate,
    })
}
