//! # Price Aggregation Service
//!
//! Orchestrates the two provider calls and merges their results.
//!
//! This module provides the [`PriceAggregationService`], which queries
//! Lyft and Uber for the same trip and combines their price lists into
//! one comparison. The two calls are strictly sequenced: Uber is only
//! queried after the Lyft call has settled, and a Lyft failure
//! short-circuits before the Uber adapter is ever invoked. The first
//! failure wins; there is no retry and no partial result.

use crate::domain::entities::PriceList;
use crate::domain::value_objects::{ProviderId, TripQuery};
use crate::infrastructure::providers::error::ProviderError;
use crate::infrastructure::providers::traits::PriceProvider;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// Configuration for price aggregation.
#[derive(Debug, Clone, Default)]
pub struct AggregationConfig {
    /// Per-provider timeout in milliseconds.
    ///
    /// `None` preserves the default behavior of waiting indefinitely on
    /// each provider call.
    pub per_provider_timeout_ms: Option<u64>,
}

impl AggregationConfig {
    /// Sets the per-provider timeout.
    #[must_use]
    pub fn with_per_provider_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_provider_timeout_ms = Some(timeout_ms);
        self
    }
}

/// The merged price comparison returned on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPrices {
    /// Lyft's price list.
    pub lyft: PriceList,
    /// Uber's price list.
    pub uber: PriceList,
}

impl AggregatedPrices {
    /// Returns the total number of ride options across both providers.
    #[must_use]
    pub fn estimate_count(&self) -> usize {
        self.lyft.len() + self.uber.len()
    }
}

/// Error type for aggregation: the first provider failure encountered.
#[derive(Debug, Clone, Error)]
#[error("{source}")]
pub struct AggregationError {
    /// The provider whose call failed.
    pub provider_id: ProviderId,
    /// The underlying provider error.
    #[source]
    pub source: ProviderError,
}

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Service collecting price estimates from both providers.
#[derive(Debug)]
pub struct PriceAggregationService {
    lyft: Arc<dyn PriceProvider>,
    uber: Arc<dyn PriceProvider>,
    config: AggregationConfig,
}

impl PriceAggregationService {
    /// Creates a new PriceAggregationService.
    #[must_use]
    pub fn new(
        lyft: Arc<dyn PriceProvider>,
        uber: Arc<dyn PriceProvider>,
        config: AggregationConfig,
    ) -> Self {
        Self { lyft, uber, config }
    }

    /// Creates a new service with default configuration.
    #[must_use]
    pub fn with_defaults(lyft: Arc<dyn PriceProvider>, uber: Arc<dyn PriceProvider>) -> Self {
        Self::new(lyft, uber, AggregationConfig::default())
    }

    /// Collects price estimates from both providers for one trip.
    ///
    /// Lyft is queried first; Uber is queried only after Lyft has
    /// answered successfully.
    ///
    /// # Errors
    ///
    /// Returns the first [`AggregationError`] encountered, carrying the
    /// failing provider's id and error.
    pub async fn compare_prices(&self, query: &TripQuery) -> AggregationResult<AggregatedPrices> {
        let lyft = self.query_provider(self.lyft.as_ref(), query).await?;
        let uber = self.query_provider(self.uber.as_ref(), query).await?;

        let prices = AggregatedPrices { lyft, uber };
        tracing::info!(
            trip = %query,
            estimates = prices.estimate_count(),
            "aggregated price comparison"
        );
        Ok(prices)
    }

    /// Queries one provider, applying the configured timeout if any.
    async fn query_provider(
        &self,
        provider: &dyn PriceProvider,
        query: &TripQuery,
    ) -> AggregationResult<PriceList> {
        let result = match self.config.per_provider_timeout_ms {
            Some(ms) => match timeout(Duration::from_millis(ms), provider.fetch_prices(query)).await
            {
                Ok(result) => result,
                Err(_) => Err(ProviderError::timeout_with_duration(
                    "provider request timed out",
                    ms,
                )),
            },
            None => provider.fetch_prices(query).await,
        };

        result.map_err(|source| {
            tracing::warn!(
                provider = %provider.provider_id(),
                error = %source,
                "provider request failed"
            );
            AggregationError {
                provider_id: provider.provider_id().clone(),
                source,
            }
        })
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::RideEstimate;
    use crate::domain::value_objects::Price;
    use crate::infrastructure::providers::error::ProviderResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct MockProvider {
        provider_id: ProviderId,
        result: ProviderResult<PriceList>,
        delay_ms: u64,
        calls: AtomicUsize,
        call_log: Option<Arc<Mutex<Vec<String>>>>,
    }

    impl MockProvider {
        fn successful(id: &str, estimates: PriceList) -> Self {
            Self {
                provider_id: ProviderId::new(id),
                result: Ok(estimates),
                delay_ms: 0,
                calls: AtomicUsize::new(0),
                call_log: None,
            }
        }

        fn failing(id: &str, error: ProviderError) -> Self {
            Self {
                provider_id: ProviderId::new(id),
                result: Err(error),
                delay_ms: 0,
                calls: AtomicUsize::new(0),
                call_log: None,
            }
        }

        fn slow(id: &str, delay_ms: u64) -> Self {
            Self {
                provider_id: ProviderId::new(id),
                result: Ok(vec![]),
                delay_ms,
                calls: AtomicUsize::new(0),
                call_log: None,
            }
        }

        fn logged(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
            self.call_log = Some(log);
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceProvider for MockProvider {
        fn provider_id(&self) -> &ProviderId {
            &self.provider_id
        }

        fn timeout_ms(&self) -> Option<u64> {
            None
        }

        async fn fetch_prices(&self, _query: &TripQuery) -> ProviderResult<PriceList> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(log) = &self.call_log {
                log.lock().unwrap().push(self.provider_id.to_string());
            }
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            self.result.clone()
        }
    }

    fn estimate(name: &str, min_cents: i64, max_cents: i64) -> RideEstimate {
        RideEstimate::new(
            name,
            Price::from_cents(min_cents).unwrap(),
            Price::from_cents(max_cents).unwrap(),
            "USD",
        )
        .unwrap()
    }

    fn query() -> TripQuery {
        TripQuery::complete(37.77, -122.41, 37.79, -122.39)
    }

    #[tokio::test]
    async fn merges_both_price_lists() {
        let lyft = Arc::new(MockProvider::successful(
            "lyft",
            vec![estimate("Lyft", 1000, 1500)],
        ));
        let uber = Arc::new(MockProvider::successful(
            "uber",
            vec![estimate("UberX", 1300, 1700), estimate("UberXL", 2100, 2600)],
        ));
        let service = PriceAggregationService::with_defaults(lyft.clone(), uber.clone());

        let prices = service.compare_prices(&query()).await.unwrap();
        assert_eq!(prices.lyft.len(), 1);
        assert_eq!(prices.uber.len(), 2);
        assert_eq!(prices.estimate_count(), 3);
        assert_eq!(lyft.call_count(), 1);
        assert_eq!(uber.call_count(), 1);
    }

    #[tokio::test]
    async fn lyft_failure_short_circuits_before_uber() {
        let lyft = Arc::new(MockProvider::failing(
            "lyft",
            ProviderError::invalid_request("Lyft: Incorrect Params"),
        ));
        let uber = Arc::new(MockProvider::successful("uber", vec![]));
        let service = PriceAggregationService::with_defaults(lyft.clone(), uber.clone());

        let error = service.compare_prices(&query()).await.unwrap_err();
        assert_eq!(error.provider_id, ProviderId::lyft());
        assert_eq!(error.to_string(), "Lyft: Incorrect Params");
        assert_eq!(lyft.call_count(), 1);
        assert_eq!(uber.call_count(), 0);
    }

    #[tokio::test]
    async fn uber_failure_surfaces_after_lyft_success() {
        let lyft = Arc::new(MockProvider::successful(
            "lyft",
            vec![estimate("Lyft", 1000, 1500)],
        ));
        let uber = Arc::new(MockProvider::failing(
            "uber",
            ProviderError::invalid_request("Uber: Missing Params"),
        ));
        let service = PriceAggregationService::with_defaults(lyft.clone(), uber.clone());

        let error = service.compare_prices(&query()).await.unwrap_err();
        assert_eq!(error.provider_id, ProviderId::uber());
        assert_eq!(error.to_string(), "Uber: Missing Params");
        assert_eq!(lyft.call_count(), 1);
        assert_eq!(uber.call_count(), 1);
    }

    #[tokio::test]
    async fn providers_are_queried_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let lyft =
            Arc::new(MockProvider::successful("lyft", vec![]).logged(log.clone()));
        let uber =
            Arc::new(MockProvider::successful("uber", vec![]).logged(log.clone()));
        let service = PriceAggregationService::with_defaults(lyft, uber);

        service.compare_prices(&query()).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["lyft", "uber"]);
    }

    #[tokio::test]
    async fn transport_failure_is_passed_through() {
        let lyft = Arc::new(MockProvider::successful("lyft", vec![]));
        let uber = Arc::new(MockProvider::failing(
            "uber",
            ProviderError::connection("connection reset"),
        ));
        let service = PriceAggregationService::with_defaults(lyft, uber);

        let error = service.compare_prices(&query()).await.unwrap_err();
        assert!(matches!(error.source, ProviderError::Connection { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn configured_timeout_maps_to_timeout_error() {
        let lyft = Arc::new(MockProvider::slow("lyft", 500));
        let uber = Arc::new(MockProvider::successful("uber", vec![]));
        let service = PriceAggregationService::new(
            lyft,
            uber.clone(),
            AggregationConfig::default().with_per_provider_timeout(50),
        );

        let error = service.compare_prices(&query()).await.unwrap_err();
        assert!(matches!(
            error.source,
            ProviderError::Timeout {
                timeout_ms: Some(50),
                ..
            }
        ));
        assert_eq!(uber.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn no_timeout_by_default() {
        let lyft = Arc::new(MockProvider::slow("lyft", 60_000));
        let uber = Arc::new(MockProvider::successful("uber", vec![]));
        let service = PriceAggregationService::with_defaults(lyft, uber);

        assert!(service.config().per_provider_timeout_ms.is_none());
        // A provider slower than any plausible timeout still answers.
        let prices = service.compare_prices(&query()).await.unwrap();
        assert_eq!(prices.estimate_count(), 0);
    }

    #[test]
    fn aggregation_config_builder() {
        let config = AggregationConfig::default().with_per_provider_timeout(3000);
        assert_eq!(config.per_provider_timeout_ms, Some(3000));
        assert!(AggregationConfig::default().per_provider_timeout_ms.is_none());
    }
}
