//! Unified error types for all layers of the preference cache.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the preference cache.
///
/// Variants are grouped by where the failure originates: the caller's input,
/// the authoritative source, or the cache store.
#[derive(Error, Debug)]
pub enum PrefCacheError {
    // ============ Domain Errors ============
    /// The authoritative source has no record for the identifier.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Cache backend unreachable, erroring, or timed out.
    #[error("Cache store unavailable: {0}")]
    StoreUnavailable(String),

    /// Cached payload could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Authoritative source failure.
    #[error("Source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrefCacheError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Deserialization(_) => "DESERIALIZATION_ERROR",
            Self::Source(_) => "SOURCE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a store unavailable error.
    #[must_use]
    pub fn store_unavailable<T: Into<String>>(message: T) -> Self {
        Self::StoreUnavailable(message.into())
    }

    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization<T: Into<String>>(message: T) -> Self {
        Self::Deserialization(message.into())
    }

    /// Creates a source error.
    #[must_use]
    pub fn source<T: Into<String>>(message: T) -> Self {
        Self::Source(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Source(_))
    }

    /// Checks if the cache store could not be reached.
    #[must_use]
    pub const fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// Checks if the authoritative source had no record.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for PrefCacheError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
