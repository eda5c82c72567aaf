//! Stub source that answers every lookup with default preferences.

use crate::PreferenceRepository;
use async_trait::async_trait;
use prefcache_config::SourceConfig;
use prefcache_core::{PrefCacheResult, UserId, UserPreference};
use shaku::Component;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Language assigned when no configuration overrides it.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Channel assigned when no configuration overrides it.
pub const DEFAULT_MODE: &str = "Email";

/// Authoritative source stand-in for deployments without a preference store.
///
/// Every user has a record: the configured default language and mode.
/// Each fetch is counted so callers can observe how often the cache fell
/// through to the source.
#[derive(Component)]
#[shaku(interface = PreferenceRepository)]
pub struct DefaultPreferenceRepository {
    #[shaku(default = DEFAULT_LANGUAGE.to_string())]
    default_language: String,
    #[shaku(default = DEFAULT_MODE.to_string())]
    default_mode: String,
    #[shaku(default = AtomicU64::new(0))]
    fetches: AtomicU64,
}

impl DefaultPreferenceRepository {
    #[must_use]
    pub fn new(default_language: impl Into<String>, default_mode: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            default_mode: default_mode.into(),
            fetches: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.default_language.clone(), config.default_mode.clone())
    }

    /// Number of fetches served since construction.
    #[must_use]
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl Default for DefaultPreferenceRepository {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_MODE)
    }
}

#[async_trait]
impl PreferenceRepository for DefaultPreferenceRepository {
    async fn fetch(&self, user_id: &UserId) -> PrefCacheResult<Option<UserPreference>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        info!("Fetching preferences from source for user: {}", user_id);

        Ok(Some(UserPreference::new(
            user_id.clone(),
            self.default_language.clone(),
            self.default_mode.clone(),
        )))
    }
}

impl std::fmt::Debug for DefaultPreferenceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultPreferenceRepository")
            .field("default_language", &self.default_language)
            .field("default_mode", &self.default_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_defaults_for_any_user() {
        let repo = DefaultPreferenceRepository::default();
        let user_id = UserId::parse("12345").unwrap();

        let record = repo.fetch(&user_id).await.unwrap().unwrap();
        assert_eq!(record.user_id(), &user_id);
        assert_eq!(record.communication_language(), "English");
        assert_eq!(record.communication_mode(), "Email");
    }

    #[tokio::test]
    async fn test_fetch_is_deterministic_and_counted() {
        let repo = DefaultPreferenceRepository::from_config(&SourceConfig {
            default_language: "German".to_string(),
            default_mode: "Sms".to_string(),
        });
        let user_id = UserId::parse("7").unwrap();

        let first = repo.fetch(&user_id).await.unwrap();
        let second = repo.fetch(&user_id).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.unwrap().communication_language(), "German");
        assert_eq!(repo.fetch_count(), 2);
    }
}
