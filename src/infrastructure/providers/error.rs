//! # Provider Errors
//!
//! Error types for price-provider operations.
//!
//! This module provides error types for provider client operations:
//! price requests, payload decoding, and transport failures.
//!
//! # Examples
//!
//! ```
//! use fare_aggregator::infrastructure::providers::error::ProviderError;
//!
//! let error = ProviderError::timeout("request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = ProviderError::invalid_request("missing trip coordinates");
//! assert!(error.is_client_error());
//! ```

use thiserror::Error;

/// Error type for provider client operations.
///
/// Represents failures that can occur when querying a ride-price
/// provider, including network issues, authentication failures, and
/// upstream validation rejections.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure against the provider.
    #[error("provider authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("provider rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The provider rejected the request parameters.
    #[error("{message}")]
    InvalidRequest {
        /// Error message, surfaced to callers verbatim.
        message: String,
    },

    /// Protocol or payload format error.
    #[error("provider protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("provider internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },

    /// Unknown or unclassified error.
    #[error("provider unknown error: {message}")]
    Unknown {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Creates an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and could succeed on a
    /// fresh request.
    ///
    /// The service never retries (first error wins); the classification
    /// exists for logging and monitoring.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true if this error originated from the request itself.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::Authentication { .. }
        )
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
