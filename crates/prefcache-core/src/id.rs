//! Typed identifier wrappers.

use crate::validation::rules::not_blank;
use crate::{PrefCacheError, PrefCacheResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for user identifiers.
///
/// Identifiers are opaque strings issued by the authoritative source.
/// The only constraint is that they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parses a user ID, rejecting empty or whitespace-only input.
    pub fn parse(s: impl Into<String>) -> PrefCacheResult<Self> {
        let s = s.into();
        not_blank(&s)
            .map_err(|_| PrefCacheError::validation("user id must not be blank"))?;
        Ok(Self(s))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for UserId {
    type Error = PrefCacheError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = PrefCacheError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
