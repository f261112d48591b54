//! # Identifier Types
//!
//! String-based identifiers for external price providers.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a ride-price provider.
///
/// Providers are identified by short lowercase names ("lyft", "uber").
///
/// # Examples
///
/// ```
/// use fare_aggregator::domain::value_objects::ProviderId;
///
/// let id = ProviderId::lyft();
/// assert_eq!(id.as_str(), "lyft");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a new provider id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a provider id, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProviderId` if the id is empty or
    /// consists only of whitespace.
    pub fn parse(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_provider_id("id must not be empty"));
        }
        Ok(Self(id))
    }

    /// The Lyft provider id.
    #[must_use]
    pub fn lyft() -> Self {
        Self::new("lyft")
    }

    /// The Uber provider id.
    #[must_use]
    pub fn uber() -> Self {
        Self::new("uber")
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
