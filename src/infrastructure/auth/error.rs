//! # Authentication Errors
//!
//! Error types for caller authentication.
//!
//! Only two failure kinds exist: the presented token is wrong (401) or
//! the expected token was never configured in the execution environment
//! (500).

use thiserror::Error;

/// Error type for caller authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The presented token is missing or does not match.
    #[error("{message}")]
    InvalidToken {
        /// Error message, surfaced to callers verbatim.
        message: String,
    },

    /// The expected token is not configured.
    #[error("{message}")]
    Misconfigured {
        /// Error message, surfaced to callers verbatim.
        message: String,
    },
}

impl AuthError {
    /// Creates an invalid token error.
    #[must_use]
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    /// Creates a misconfiguration error.
    #[must_use]
    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::Misconfigured {
            message: message.into(),
        }
    }

    /// Returns true if the failure is attributable to the caller.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidToken { .. })
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
