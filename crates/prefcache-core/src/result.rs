//! Result type aliases for the preference cache.

use crate::PrefCacheError;

/// A specialized `Result` type for preference cache operations.
pub type PrefCacheResult<T> = Result<T, PrefCacheError>;
