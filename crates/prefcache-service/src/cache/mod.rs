//! Caching infrastructure for the service layer.
//!
//! This module provides a cache store abstraction with a Redis
//! implementation and a process-local one for development and tests.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::{InMemoryCacheService, InMemoryCacheServiceParameters};
pub use redis_cache::{
    create_pool, RedisCacheService, RedisCacheServiceParameters, DEFAULT_COMMAND_TIMEOUT,
};
