//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use prefcache_core::{PrefCacheError, PrefCacheResult};
use shaku::Interface;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over TTL-capable key-value stores,
/// allowing for easy swapping between Redis and in-memory backends.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
/// Backend failures are reported as [`PrefCacheError::StoreUnavailable`].
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> PrefCacheResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> PrefCacheResult<()>;

    /// Reset the TTL of an existing key.
    ///
    /// Returns `false` if the key doesn't exist.
    async fn expire(&self, key: &str, ttl: Duration) -> PrefCacheResult<bool>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> PrefCacheResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> PrefCacheResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any serializable type.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// A stored payload that does not decode as `T` yields
    /// [`PrefCacheError::Deserialization`].
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> PrefCacheResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| PrefCacheError::deserialization(format!("key '{}': {}", key, e))),
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> PrefCacheResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryCacheService;
    use prefcache_core::{UserId, UserPreference};

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_typed_roundtrip() {
        let cache = InMemoryCacheService::new();
        let pref = UserPreference::new(UserId::parse("1").unwrap(), "English", "Email");

        cache.set("k", &pref, TTL).await.unwrap();
        let back: Option<UserPreference> = cache.get("k").await.unwrap();
        assert_eq!(back, Some(pref));
    }

    #[tokio::test]
    async fn test_typed_get_reports_corrupt_payload() {
        let cache = InMemoryCacheService::new();
        cache.set_raw("k", "{not json", TTL).await.unwrap();

        let result = cache.get::<UserPreference>("k").await;
        assert!(matches!(result, Err(PrefCacheError::Deserialization(_))));
    }

    #[tokio::test]
    async fn test_typed_get_through_trait_object() {
        let cache: std::sync::Arc<dyn CacheInterface> = std::sync::Arc::new(InMemoryCacheService::new());
        assert!(cache.get::<String>("missing").await.unwrap().is_none());
    }
}
