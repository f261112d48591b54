//! # Lyft Provider Adapter
//!
//! Client for the Lyft cost-estimate API.
//!
//! Queries `GET {endpoint}/v1/cost` with the trip coordinates as query
//! parameters and converts the returned `cost_estimates` (costs in
//! integer cents) into the domain [`PriceList`].

use crate::domain::entities::{PriceList, RideEstimate};
use crate::domain::value_objects::{Price, ProviderId, TripQuery};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::PriceProvider;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};

/// Configuration for the Lyft client.
#[derive(Debug, Clone)]
pub struct LyftConfig {
    /// Base URL of the Lyft API.
    pub endpoint: String,
    /// Bearer token presented to Lyft, if required by the deployment.
    pub token: Option<String>,
    /// Request timeout in milliseconds; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl Default for LyftConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.lyft.com".to_string(),
            token: None,
            timeout_ms: None,
        }
    }
}

impl LyftConfig {
    /// Creates a configuration pointing at the given endpoint.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Sets the bearer token.
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

/// Lyft price-provider adapter.
#[derive(Debug, Clone)]
pub struct LyftClient {
    provider_id: ProviderId,
    endpoint: String,
    client: HttpClient,
}

impl LyftClient {
    /// Creates a new Lyft client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the HTTP client cannot
    /// be constructed or the configured token is not a valid header
    /// value.
    pub fn new(config: LyftConfig) -> ProviderResult<Self> {
        let client = match &config.token {
            Some(token) => {
                let mut headers = HeaderMap::new();
                let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    ProviderError::internal_error(format!("Invalid Lyft token: {}", e))
                })?;
                headers.insert(AUTHORIZATION, value);
                HttpClient::with_headers(config.timeout_ms, headers)?
            }
            None => HttpClient::new(config.timeout_ms)?,
        };

        Ok(Self {
            provider_id: ProviderId::lyft(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }
}

/// Query parameters for the cost endpoint.
///
/// Absent coordinates are omitted entirely so the upstream sees exactly
/// what the caller supplied.
#[derive(Debug, Serialize)]
struct CostParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_lng: Option<f64>,
}

impl From<&TripQuery> for CostParams {
    fn from(query: &TripQuery) -> Self {
        Self {
            start_lat: query.start_lat,
            start_lng: query.start_lng,
            end_lat: query.end_lat,
            end_lng: query.end_lng,
        }
    }
}

/// Response payload of the cost endpoint.
#[derive(Debug, Deserialize)]
struct CostEstimatesResponse {
    cost_estimates: Vec<CostEstimateData>,
}

/// One cost estimate as Lyft reports it.
#[derive(Debug, Deserialize)]
struct CostEstimateData {
    display_name: String,
    estimated_cost_cents_min: i64,
    estimated_cost_cents_max: i64,
    currency: String,
    estimated_duration_seconds: Option<u64>,
    estimated_distance_miles: Option<f64>,
}

impl CostEstimateData {
    fn into_estimate(self) -> ProviderResult<RideEstimate> {
        let min_cost = Price::from_cents(self.estimated_cost_cents_min)
            .map_err(|e| ProviderError::protocol_error(e.to_string()))?;
        let max_cost = Price::from_cents(self.estimated_cost_cents_max)
            .map_err(|e| ProviderError::protocol_error(e.to_string()))?;

        let mut estimate = RideEstimate::new(self.display_name, min_cost, max_cost, self.currency)
            .map_err(|e| ProviderError::protocol_error(e.to_string()))?;
        if let Some(seconds) = self.estimated_duration_seconds {
            estimate = estimate.with_duration_seconds(seconds);
        }
        if let Some(miles) = self.estimated_distance_miles {
            estimate = estimate.with_distance(miles);
        }
        Ok(estimate)
    }
}

#[async_trait]
impl PriceProvider for LyftClient {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    fn timeout_ms(&self) -> Option<u64> {
        self.client.timeout_ms()
    }

    async fn fetch_prices(&self, query: &TripQuery) -> ProviderResult<PriceList> {
        let url = format!("{}/v1/cost", self.endpoint);
        tracing::debug!(provider = %self.provider_id, trip = %query, "requesting cost estimates");

        let response: CostEstimatesResponse = self
            .client
            .get_with_params(&url, &CostParams::from(query))
            .await?;

        response
            .cost_estimates
            .into_iter()
            .map(CostEstimateData::into_estimate)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LyftConfig::default();
        assert_eq!(config.endpoint, "https://api.lyft.com");
        assert!(config.token.is_none());
        assert!(config.timeout_ms.is_none());
    }

    #[test]
    fn config_builder() {
        let config = LyftConfig::with_endpoint("https://lyft.test")
            .with_token("secret")
            .with_timeout_ms(3000);
        assert_eq!(config.endpoint, "https://lyft.test");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout_ms, Some(3000));
    }

    #[test]
    fn new_strips_trailing_slash() {
        let client = LyftClient::new(LyftConfig::with_endpoint("https://lyft.test/")).unwrap();
        assert_eq!(client.endpoint, "https://lyft.test");
        assert_eq!(client.provider_id().as_str(), "lyft");
    }

    #[test]
    fn cost_params_omit_absent_coordinates() {
        let query = TripQuery {
            start_lat: Some(123.0),
            start_lng: Some(123.0),
            ..TripQuery::default()
        };
        let value = serde_json::to_value(CostParams::from(&query)).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("start_lat"));
        assert!(!object.contains_key("end_lat"));
    }

    #[test]
    fn estimate_conversion() {
        let data = CostEstimateData {
            display_name: "Lyft XL".to_string(),
            estimated_cost_cents_min: 1500,
            estimated_cost_cents_max: 2200,
            currency: "USD".to_string(),
            estimated_duration_seconds: Some(913),
            estimated_distance_miles: Some(3.29),
        };
        let estimate = data.into_estimate().unwrap();
        assert_eq!(estimate.ride_type(), "Lyft XL");
        assert_eq!(estimate.min_cost(), Price::from_cents(1500).unwrap());
        assert_eq!(estimate.duration_seconds(), Some(913));
    }

    #[test]
    fn malformed_estimate_is_protocol_error() {
        let data = CostEstimateData {
            display_name: "Lyft".to_string(),
            estimated_cost_cents_min: 2200,
            estimated_cost_cents_max: 1500,
            currency: "USD".to_string(),
            estimated_duration_seconds: None,
            estimated_distance_miles: None,
        };
        let error = data.into_estimate().unwrap_err();
        assert!(matches!(error, ProviderError::ProtocolError { .. }));
    }
}
