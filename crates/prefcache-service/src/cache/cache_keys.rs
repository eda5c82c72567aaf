//! Cache key generators for consistent key naming.

use prefcache_core::UserId;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "user:preferences";

/// Generate the cache key for a user's preference record.
///
/// The same key is used for reads, writes and invalidation.
#[must_use]
pub fn user_preferences(namespace: &str, user_id: &UserId) -> String {
    format!("{}:{}", namespace, user_id)
}
