//! Domain entities for the preference cache.

mod preference;

pub use preference::*;
