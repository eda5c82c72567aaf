//! # Prefcache Service
//!
//! Read-through caching of user preference records.
//!
//! [`PreferenceCacheAccessor`] checks a [`CacheInterface`] store before
//! falling back to a [`PreferenceRepository`](prefcache_repository::PreferenceRepository),
//! keeps hot entries alive with a sliding expiration, and supports explicit
//! invalidation.

pub mod cache;
mod r#impl;
pub mod preference_service;

pub use cache::*;
pub use r#impl::*;
pub use preference_service::*;
