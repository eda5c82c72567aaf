//! User preference entity.

use crate::UserId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Communication preferences for a single user.
///
/// Records are immutable once constructed; a changed preference is a new
/// record fetched from the authoritative source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    /// Owner of the preference record.
    user_id: UserId,

    /// Preferred language for outbound communication.
    #[validate(length(max = 64))]
    communication_language: String,

    /// Preferred channel for outbound communication.
    #[validate(length(max = 64))]
    communication_mode: String,
}

impl UserPreference {
    /// Creates a new preference record.
    #[must_use]
    pub fn new(
        user_id: UserId,
        communication_language: impl Into<String>,
        communication_mode: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            communication_language: communication_language.into(),
            communication_mode: communication_mode.into(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn communication_language(&self) -> &str {
        &self.communication_language
    }

    #[must_use]
    pub fn communication_mode(&self) -> &str {
        &self.communication_mode
    }

    /// Returns true if this record belongs to the given user.
    #[must_use]
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}
