//! # Uber Provider Adapter
//!
//! Client for the Uber price-estimate API.
//!
//! Queries `GET {endpoint}/v1.2/estimates/price` with the trip
//! coordinates as query parameters and converts the returned `prices`
//! (costs in whole currency units) into the domain [`PriceList`].

use crate::domain::entities::{PriceList, RideEstimate};
use crate::domain::value_objects::{Price, ProviderId, TripQuery};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::PriceProvider;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for the Uber client.
#[derive(Debug, Clone)]
pub struct UberConfig {
    /// Base URL of the Uber API.
    pub endpoint: String,
    /// Server token presented to Uber, if required by the deployment.
    pub token: Option<String>,
    /// Request timeout in milliseconds; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl Default for UberConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.uber.com".to_string(),
            token: None,
            timeout_ms: None,
        }
    }
}

impl UberConfig {
    /// Creates a configuration pointing at the given endpoint.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Sets the server token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Uber price-provider adapter.
#[derive(Debug, Clone)]
pub struct UberClient {
    provider_id: ProviderId,
    endpoint: String,
    client: HttpClient,
}

impl UberClient {
    /// Creates a new Uber client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the HTTP client cannot
    /// be constructed or the configured token is not a valid header
    /// value.
    pub fn new(config: UberConfig) -> ProviderResult<Self> {
        let client = match &config.token {
            Some(token) => {
                let mut headers = HeaderMap::new();
                let value = HeaderValue::from_str(&format!("Token {}", token)).map_err(|e| {
                    ProviderError::internal_error(format!("Invalid Uber token: {}", e))
                })?;
                headers.insert(AUTHORIZATION, value);
                HttpClient::with_headers(config.timeout_ms, headers)?
            }
            None => HttpClient::new(config.timeout_ms)?,
        };

        Ok(Self {
            provider_id: ProviderId::uber(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }
}

/// Query parameters for the price-estimates endpoint.
#[derive(Debug, Serialize)]
struct PriceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_longitude: Option<f64>,
}

impl From<&TripQuery> for PriceParams {
    fn from(query: &TripQuery) -> Self {
        Self {
            start_latitude: query.start_lat,
            start_longitude: query.start_lng,
            end_latitude: query.end_lat,
            end_longitude: query.end_lng,
        }
    }
}

/// Response payload of the price-estimates endpoint.
#[derive(Debug, Deserialize)]
struct PriceEstimatesResponse {
    prices: Vec<PriceEstimateData>,
}

/// One price estimate as Uber reports it.
///
/// Metered products (taxis) carry no numeric bounds.
#[derive(Debug, Deserialize)]
struct PriceEstimateData {
    localized_display_name: String,
    low_estimate: Option<i64>,
    high_estimate: Option<i64>,
    currency_code: Option<String>,
    duration: Option<u64>,
    distance: Option<f64>,
}

impl PriceEstimateData {
    /// Converts to a domain estimate. Metered products without numeric
    /// bounds are omitted (`Ok(None)`).
    fn into_estimate(self) -> ProviderResult<Option<RideEstimate>> {
        let (Some(low), Some(high)) = (self.low_estimate, self.high_estimate) else {
            return Ok(None);
        };

        let min_cost = Price::from_decimal(Decimal::from(low))
            .map_err(|e| ProviderError::protocol_error(e.to_string()))?;
        let max_cost = Price::from_decimal(Decimal::from(high))
            .map_err(|e| ProviderError::protocol_error(e.to_string()))?;

        let mut estimate = RideEstimate::new(
            self.localized_display_name,
            min_cost,
            max_cost,
            self.currency_code.unwrap_or_default(),
        )
        .map_err(|e| ProviderError::protocol_error(e.to_string()))?;
        if let Some(seconds) = self.duration {
            estimate = estimate.with_duration_seconds(seconds);
        }
        if let Some(miles) = self.distance {
            estimate = estimate.with_distance(miles);
        }
        Ok(Some(estimate))
    }
}

#[async_trait]
impl PriceProvider for UberClient {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    fn timeout_ms(&self) -> Option<u64> {
        self.client.timeout_ms()
    }

    async fn fetch_prices(&self, query: &TripQuery) -> ProviderResult<PriceList> {
        let url = format!("{}/v1.2/estimates/price", self.endpoint);
        tracing::debug!(provider = %self.provider_id, trip = %query, "requesting price estimates");

        let response: PriceEstimatesResponse = self
            .client
            .get_with_params(&url, &PriceParams::from(query))
            .await?;

        let mut estimates = Vec::with_capacity(response.prices.len());
        for price in response.prices {
            if let Some(estimate) = price.into_estimate()? {
                estimates.push(estimate);
            }
        }
        Ok(estimates)
    }
}
