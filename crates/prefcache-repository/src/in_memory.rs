//! In-memory preference repository.

use crate::PreferenceRepository;
use async_trait::async_trait;
use parking_lot::RwLock;
use prefcache_core::{PrefCacheResult, UserId, UserPreference, ValidateExt};
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Preference repository backed by a process-local map.
///
/// Unknown users yield `None`, so this source exercises the not-found path
/// that the default source never takes.
#[derive(Component, Default)]
#[shaku(interface = PreferenceRepository)]
pub struct InMemoryPreferenceRepository {
    #[shaku(default = RwLock::default())]
    records: RwLock<HashMap<UserId, UserPreference>>,
}

impl InMemoryPreferenceRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given records.
    pub fn with_records(
        records: impl IntoIterator<Item = UserPreference>,
    ) -> PrefCacheResult<Self> {
        let repository = Self::new();
        for record in records {
            repository.upsert(record)?;
        }
        Ok(repository)
    }

    /// Inserts or replaces the record for its user.
    pub fn upsert(&self, record: UserPreference) -> PrefCacheResult<()> {
        record.validate_request()?;
        debug!("Storing preferences for user: {}", record.user_id());
        self.records.write().insert(record.user_id().clone(), record);
        Ok(())
    }

    /// Removes the record for a user, returning it if present.
    pub fn remove(&self, user_id: &UserId) -> Option<UserPreference> {
        self.records.write().remove(user_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn fetch(&self, user_id: &UserId) -> PrefCacheResult<Option<UserPreference>> {
        Ok(self.records.read().get(user_id).cloned())
    }
}

impl std::fmt::Debug for InMemoryPreferenceRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPreferenceRepository")
            .field("records", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefcache_core::PrefCacheError;

    fn id(s: &str) -> UserId {
        UserId::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_known_and_unknown() {
        let repo = InMemoryPreferenceRepository::with_records([UserPreference::new(
            id("12345"),
            "English",
            "Email",
        )])
        .unwrap();

        let found = repo.fetch(&id("12345")).await.unwrap();
        assert_eq!(found.unwrap().communication_mode(), "Email");

        let missing = repo.fetch(&id("99999")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_and_remove() {
        let repo = InMemoryPreferenceRepository::new();
        assert!(repo.is_empty());

        repo.upsert(UserPreference::new(id("1"), "English", "Email")).unwrap();
        repo.upsert(UserPreference::new(id("1"), "French", "Sms")).unwrap();
        assert_eq!(repo.len(), 1);

        let record = repo.fetch(&id("1")).await.unwrap().unwrap();
        assert_eq!(record.communication_language(), "French");

        assert!(repo.remove(&id("1")).is_some());
        assert!(repo.fetch(&id("1")).await.unwrap().is_none());
    }

    #[test]
    fn test_upsert_rejects_invalid_record() {
        let repo = InMemoryPreferenceRepository::new();
        let result = repo.upsert(UserPreference::new(id("1"), "x".repeat(100), "Email"));
        assert!(matches!(result, Err(PrefCacheError::Validation(_))));
        assert!(repo.is_empty());
    }
}
