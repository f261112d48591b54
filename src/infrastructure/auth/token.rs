//! # Static Token Authenticator
//!
//! Shared-secret token check against a value configured at startup.

use crate::infrastructure::auth::error::{AuthError, AuthResult};
use crate::infrastructure::auth::traits::Authenticator;
use async_trait::async_trait;
use std::fmt;

/// Authenticator comparing the presented token against a single
/// configured value.
///
/// An absent or empty configured token fails every request with a
/// misconfiguration error rather than silently allowing access.
#[derive(Clone)]
pub struct StaticTokenAuthenticator {
    expected: Option<String>,
}

impl StaticTokenAuthenticator {
    /// Creates an authenticator with the expected token.
    ///
    /// Pass `None` (or an empty string) to model an unconfigured
    /// deployment; every request will then fail with
    /// [`AuthError::Misconfigured`].
    #[must_use]
    pub fn new(expected: Option<String>) -> Self {
        let expected = expected.filter(|token| !token.is_empty());
        Self { expected }
    }

    /// Returns true if an expected token is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }
}

// The expected token must never appear in logs.
impl fmt::Debug for StaticTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenAuthenticator")
            .field("expected", &self.expected.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, token: Option<&str>) -> AuthResult<()> {
        let Some(expected) = &self.expected else {
            return Err(AuthError::misconfigured(
                "authentication token is not configured",
            ));
        };

        match token {
            Some(presented) if presented == expected => Ok(()),
            Some(_) => Err(AuthError::invalid_token("wrong authentication token")),
            None => Err(AuthError::invalid_token("missing authentication token")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_matching_token() {
        let auth = StaticTokenAuthenticator::new(Some("secret".to_string()));
        assert!(auth.authenticate(Some("secret")).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_wrong_token() {
        let auth = StaticTokenAuthenticator::new(Some("secret".to_string()));
        let error = auth.authenticate(Some("other")).await.unwrap_err();
        assert!(matches!(error, AuthError::InvalidToken { .. }));
    }

    #[tokio::test]
    async fn rejects_missing_token() {
        let auth = StaticTokenAuthenticator::new(Some("secret".to_string()));
        let error = auth.authenticate(None).await.unwrap_err();
        assert!(matches!(error, AuthError::InvalidToken { .. }));
    }

    #[tokio::test]
    async fn unconfigured_token_is_misconfiguration() {
        let auth = StaticTokenAuthenticator::new(None);
        let error = auth.authenticate(Some("anything")).await.unwrap_err();
        assert!(matches!(error, AuthError::Misconfigured { .. }));
    }

    #[tokio::test]
    async fn empty_configured_token_is_misconfiguration() {
        let auth = StaticTokenAuthenticator::new(Some(String::new()));
        assert!(!auth.is_configured());
        let error = auth.authenticate(Some("")).await.unwrap_err();
        assert!(matches!(error, AuthError::Misconfigured { .. }));
    }

    #[test]
    fn debug_redacts_token() {
        let auth = StaticTokenAuthenticator::new(Some("secret".to_string()));
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("redacted"));
    }
}
