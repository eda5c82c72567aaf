//! Dependency injection module using Shaku.
//!
//! This module defines Shaku modules for the two cache backends:
//! - `RedisModule`: accessor backed by a Redis connection pool
//! - `LocalModule`: accessor backed by the process-local store

use prefcache_config::AppConfig;
use prefcache_core::PrefCacheResult;
use prefcache_repository::{DefaultPreferenceRepository, DefaultPreferenceRepositoryParameters};
use prefcache_service::{
    create_pool, CacheInterface, InMemoryCacheService, PreferenceCacheAccessor,
    PreferenceCacheAccessorParameters, PreferenceService, RedisCacheService,
    RedisCacheServiceParameters,
};
use shaku::{module, HasComponent};
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

module! {
    pub RedisModule {
        components = [
            RedisCacheService,
            DefaultPreferenceRepository,
            PreferenceCacheAccessor,
        ],
        providers = [],
    }
}

module! {
    pub LocalModule {
        components = [
            InMemoryCacheService,
            DefaultPreferenceRepository,
            PreferenceCacheAccessor,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

fn source_parameters(config: &AppConfig) -> DefaultPreferenceRepositoryParameters {
    DefaultPreferenceRepositoryParameters {
        default_language: config.source.default_language.clone(),
        default_mode: config.source.default_mode.clone(),
        fetches: AtomicU64::new(0),
    }
}

fn accessor_parameters(config: &AppConfig) -> PreferenceCacheAccessorParameters {
    PreferenceCacheAccessorParameters {
        namespace: config.cache.namespace.clone(),
        sliding_expiration: config.cache.sliding_expiration(),
    }
}

/// Builds a module whose accessor reads through Redis.
pub fn build_redis_module(config: &AppConfig) -> PrefCacheResult<Arc<RedisModule>> {
    let pool = create_pool(&config.redis)?;

    let module = RedisModule::builder()
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: Some(Arc::new(pool)),
            command_timeout: config.redis.command_timeout(),
        })
        .with_component_parameters::<DefaultPreferenceRepository>(source_parameters(config))
        .with_component_parameters::<PreferenceCacheAccessor>(accessor_parameters(config))
        .build();

    Ok(Arc::new(module))
}

/// Builds a module whose accessor reads through the process-local store.
#[must_use]
pub fn build_local_module(config: &AppConfig) -> Arc<LocalModule> {
    let module = LocalModule::builder()
        .with_component_parameters::<DefaultPreferenceRepository>(source_parameters(config))
        .with_component_parameters::<PreferenceCacheAccessor>(accessor_parameters(config))
        .build();

    Arc::new(module)
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving services from any module.
pub trait ServiceResolver {
    /// Resolves the preference service from the module.
    fn preference_service(&self) -> Arc<dyn PreferenceService>;

    /// Resolves the cache store from the module.
    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl ServiceResolver for RedisModule {
    fn preference_service(&self) -> Arc<dyn PreferenceService> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}

impl ServiceResolver for LocalModule {
    fn preference_service(&self) -> Arc<dyn PreferenceService> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}

/// Builds the module selected by `redis.enabled`.
pub fn build_module(config: &AppConfig) -> PrefCacheResult<Arc<dyn ServiceResolver + Send + Sync>> {
    if config.redis.enabled {
        info!("Using Redis cache store");
        Ok(build_redis_module(config)?)
    } else {
        info!("Using in-memory cache store");
        Ok(build_local_module(config))
    }
}
