//! # Prefcache Repository
//!
//! Authoritative sources for user preference records.
//!
//! The cache layer only ever reads through [`PreferenceRepository`]; the
//! implementations here are an in-memory store and a stub that synthesizes
//! default preferences for any user.

mod default_source;
mod in_memory;
mod traits;

pub use default_source::*;
pub use in_memory::*;
pub use traits::*;
