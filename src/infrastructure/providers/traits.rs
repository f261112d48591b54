//! # Price Provider Trait
//!
//! Port definition for ride-price provider integrations.
//!
//! This module defines the [`PriceProvider`] trait that all provider
//! integrations must implement. It provides a uniform interface for
//! requesting trip-price estimates so the aggregation service can be
//! tested with substituted fakes.
//!
//! # Examples
//!
//! ```ignore
//! use fare_aggregator::infrastructure::providers::traits::PriceProvider;
//!
//! #[derive(Debug)]
//! struct MyProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl PriceProvider for MyProvider {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::PriceList;
use crate::domain::value_objects::{ProviderId, TripQuery};
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;

/// Trait defining the interface for ride-price providers.
///
/// All provider integrations implement this trait so the aggregation
/// service can query different ride-hailing services uniformly.
///
/// # Error Handling
///
/// Methods return `ProviderResult<T>` which wraps
/// `Result<T, ProviderError>`. Implementations map provider-specific
/// failures onto the shared [`ProviderError`] taxonomy.
///
/// [`ProviderError`]: crate::infrastructure::providers::error::ProviderError
#[async_trait]
pub trait PriceProvider: Send + Sync + fmt::Debug {
    /// Returns the provider id.
    fn provider_id(&self) -> &ProviderId;

    /// Returns the configured request timeout in milliseconds, if any.
    ///
    /// `None` means the provider call waits indefinitely.
    fn timeout_ms(&self) -> Option<u64>;

    /// Requests price estimates for a trip.
    ///
    /// The query is forwarded as-is; incomplete coordinates are a
    /// provider-side validation failure, not a client-side one.
    ///
    /// # Errors
    ///
    /// - `ProviderError::InvalidRequest` - Provider rejected the trip parameters
    /// - `ProviderError::Authentication` - Provider rejected our credentials
    /// - `ProviderError::Timeout` - Request timed out
    /// - `ProviderError::Connection` - Transport failure
    /// - `ProviderError::ProtocolError` - Unparseable response payload
    async fn fetch_prices(&self, query: &TripQuery) -> ProviderResult<PriceList>;
}
