//! # Domain Errors
//!
//! Error types for domain-level validation failures.
//!
//! These errors are produced by value-object and entity constructors when
//! an input cannot be represented in the domain (for example a negative
//! price). They never reach API callers directly; upper layers translate
//! them into their own error types.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A price value could not be constructed.
    #[error("invalid price: {message}")]
    InvalidPrice {
        /// Error message.
        message: String,
    },

    /// A ride estimate violated an entity invariant.
    #[error("invalid estimate: {message}")]
    InvalidEstimate {
        /// Error message.
        message: String,
    },

    /// A provider identifier was malformed.
    #[error("invalid provider id: {message}")]
    InvalidProviderId {
        /// Error message.
        message: String,
    },
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice {
            message: message.into(),
        }
    }

    /// Creates an invalid estimate error.
    #[must_use]
    pub fn invalid_estimate(message: impl Into<String>) -> Self {
        Self::InvalidEstimate {
            message: message.into(),
        }
    }

    /// Creates an invalid provider id error.
    #[must_use]
    pub fn invalid_provider_id(message: impl Into<String>) -> Self {
        Self::InvalidProviderId {
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
