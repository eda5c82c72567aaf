//! End-to-end lookup/invalidate walkthrough against the in-memory store.

use prefcache_core::{UserId, UserPreference};
use prefcache_repository::{DefaultPreferenceRepository, InMemoryPreferenceRepository};
use prefcache_service::{
    CacheExt, CacheInterface, InMemoryCacheService, PreferenceCacheAccessor, PreferenceService,
};
use std::sync::Arc;

fn user() -> UserId {
    UserId::parse("12345").unwrap()
}

#[tokio::test]
async fn test_lookup_invalidate_walkthrough() {
    let source = Arc::new(DefaultPreferenceRepository::default());
    let cache = Arc::new(InMemoryCacheService::new());
    let accessor = PreferenceCacheAccessor::new(source.clone(), cache.clone());
    let key = accessor.cache_key(&user());
    let expected = UserPreference::new(user(), "English", "Email");

    // Step 1: cold cache, fetched and cached.
    let first = accessor.get_preferences(&user()).await.unwrap();
    assert_eq!(first, expected);
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(cache.get::<UserPreference>(&key).await.unwrap(), Some(expected.clone()));

    // Step 2: served from cache.
    let second = accessor.get_preferences(&user()).await.unwrap();
    assert_eq!(second, first);
    assert_eq!(source.fetch_count(), 1);

    // Step 3: invalidated.
    accessor.invalidate(&user()).await.unwrap();
    assert!(cache.get_raw(&key).await.unwrap().is_none());

    // Step 4: fetched again and repopulated.
    let fourth = accessor.get_preferences(&user()).await.unwrap();
    assert_eq!(fourth, expected);
    assert_eq!(source.fetch_count(), 2);
    assert!(cache.get_raw(&key).await.unwrap().is_some());
}

#[tokio::test]
async fn test_entries_are_isolated_per_user() {
    let source = Arc::new(
        InMemoryPreferenceRepository::with_records([
            UserPreference::new(UserId::parse("a").unwrap(), "English", "Email"),
            UserPreference::new(UserId::parse("b").unwrap(), "Spanish", "Sms"),
        ])
        .unwrap(),
    );
    let cache = Arc::new(InMemoryCacheService::new());
    let accessor = PreferenceCacheAccessor::new(source.clone(), cache.clone());

    let a = UserId::parse("a").unwrap();
    let b = UserId::parse("b").unwrap();

    assert_eq!(accessor.get_preferences(&a).await.unwrap().communication_language(), "English");
    assert_eq!(accessor.get_preferences(&b).await.unwrap().communication_language(), "Spanish");
    assert_eq!(cache.len(), 2);

    accessor.invalidate(&a).await.unwrap();
    assert_eq!(cache.len(), 1);
    assert!(cache.get_raw(&accessor.cache_key(&b)).await.unwrap().is_some());
}

#[tokio::test]
async fn test_source_changes_are_visible_after_invalidation() {
    let source = Arc::new(
        InMemoryPreferenceRepository::with_records([UserPreference::new(user(), "English", "Email")])
            .unwrap(),
    );
    let cache = Arc::new(InMemoryCacheService::new());
    let accessor = PreferenceCacheAccessor::new(source.clone(), cache);

    accessor.get_preferences(&user()).await.unwrap();
    source
        .upsert(UserPreference::new(user(), "English", "Phone"))
        .unwrap();

    // Still the cached record until invalidated.
    assert_eq!(accessor.get_preferences(&user()).await.unwrap().communication_mode(), "Email");

    accessor.invalidate(&user()).await.unwrap();
    assert_eq!(accessor.get_preferences(&user()).await.unwrap().communication_mode(), "Phone");
}

#[tokio::test]
async fn test_concurrent_lookups_converge() {
    let source = Arc::new(DefaultPreferenceRepository::default());
    let cache = Arc::new(InMemoryCacheService::new());
    let accessor = Arc::new(PreferenceCacheAccessor::new(source.clone(), cache.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let accessor = accessor.clone();
            tokio::spawn(async move { accessor.get_preferences(&user()).await })
        })
        .collect();

    for handle in handles {
        let pref = handle.await.unwrap().unwrap();
        assert_eq!(pref.communication_mode(), "Email");
    }

    // Misses may race, but all of them end in a single entry.
    assert!(source.fetch_count() >= 1);
    assert_eq!(cache.len(), 1);
}
