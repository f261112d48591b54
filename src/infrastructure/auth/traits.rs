//! # Authenticator Trait
//!
//! Port definition for caller authentication.
//!
//! The handler depends on this trait rather than a concrete token
//! check, so tests substitute fakes that approve or reject at will.

use crate::infrastructure::auth::error::AuthResult;
use async_trait::async_trait;
use std::fmt;

/// Trait for validating an inbound caller token.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Validates the token presented in the request.
    ///
    /// `token` is the raw value of the `authentication` header, or
    /// `None` when the header is absent.
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidToken` - Token missing or mismatched
    /// - `AuthError::Misconfigured` - Expected token not configured
    async fn authenticate(&self, token: Option<&str>) -> AuthResult<()>;
}
