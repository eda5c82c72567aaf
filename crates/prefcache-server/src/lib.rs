//! # Prefcache Server Library
//!
//! Application wiring, dependency injection configuration and the
//! lookup/invalidate walkthrough used by the `prefcache-server` binary.

pub mod app;
pub mod di;
pub mod walkthrough;
