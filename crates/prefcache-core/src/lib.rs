//! # Prefcache Core
//!
//! Core types, traits, and error definitions for the preference cache.
//! Every other crate in the workspace builds on the error taxonomy and
//! domain types defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
