//! Preference service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `preference_service.rs`).

pub mod preference_service_impl;

pub use preference_service_impl::{
    PreferenceCacheAccessor, PreferenceCacheAccessorParameters, DEFAULT_SLIDING_EXPIRATION,
};
