//! # REST Handlers
//!
//! Request handlers for the price-comparison API.
//!
//! The price handler is the orchestration entrypoint: it authenticates
//! the caller, forwards the trip query to the aggregation service, and
//! emits exactly one response whose HTTP status mirrors the body's
//! `status` field.

use crate::application::services::{AggregatedPrices, PriceAggregationService};
use crate::domain::value_objects::TripQuery;
use crate::infrastructure::auth::{AuthError, Authenticator};
use crate::infrastructure::providers::error::ProviderError;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Name of the header carrying the caller's token.
pub const AUTH_HEADER: &str = "authentication";

/// Shared state injected into handlers.
///
/// Both collaborators are trait objects so tests substitute fakes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Caller authentication check.
    pub authenticator: Arc<dyn Authenticator>,
    /// The two-provider aggregation service.
    pub aggregation: Arc<PriceAggregationService>,
}

/// Body of every price-comparison response, success or failure.
#[derive(Debug, Serialize)]
pub struct PriceComparisonResponse {
    /// True when the request failed.
    pub error: bool,
    /// Mirrored in the HTTP status code.
    pub status: u16,
    /// Error text, or the merged price lists keyed `lyft`/`uber`.
    pub message: ResponseMessage,
}

/// The polymorphic `message` field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseMessage {
    /// Merged price lists on success.
    Prices(AggregatedPrices),
    /// Error description on failure.
    Text(String),
}

impl PriceComparisonResponse {
    /// Builds the success response.
    #[must_use]
    pub fn success(prices: AggregatedPrices) -> Self {
        Self {
            error: false,
            status: StatusCode::OK.as_u16(),
            message: ResponseMessage::Prices(prices),
        }
    }

    /// Builds a failure response.
    #[must_use]
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: true,
            status: status.as_u16(),
            message: ResponseMessage::Text(message.into()),
        }
    }
}

impl IntoResponse for PriceComparisonResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" when the service can answer at all.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// When the check ran.
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/v1/prices` - compare trip prices across both providers.
///
/// Evaluation order is fixed: authentication, then Lyft, then Uber.
/// The first failure is surfaced and terminates the request.
pub async fn get_prices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<TripQuery>, QueryRejection>,
) -> PriceComparisonResponse {
    let token = headers.get(AUTH_HEADER).and_then(|value| value.to_str().ok());
    if let Err(error) = state.authenticator.authenticate(token).await {
        tracing::warn!(error = %error, "authentication failed");
        return PriceComparisonResponse::failure(auth_error_status(&error), error.to_string());
    }

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return PriceComparisonResponse::failure(
                StatusCode::BAD_REQUEST,
                rejection.body_text(),
            );
        }
    };

    match state.aggregation.compare_prices(&query).await {
        Ok(prices) => PriceComparisonResponse::success(prices),
        Err(error) => {
            PriceComparisonResponse::failure(
                provider_error_status(&error.source),
                error.to_string(),
            )
        }
    }
}

/// `GET /api/v1/health` - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: crate::VERSION,
        timestamp: Utc::now(),
    })
}

/// Maps an authentication failure to the response status.
fn auth_error_status(error: &AuthError) -> StatusCode {
    match error {
        AuthError::InvalidToken { .. } => StatusCode::UNAUTHORIZED,
        AuthError::Misconfigured { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a provider failure to the response status.
///
/// Client-error variants keep their 4xx class; everything transport-
/// or server-side collapses to 500, keeping the response status
/// alphabet at 200/400/401/500.
fn provider_error_status(error: &ProviderError) -> StatusCode {
    match error {
        ProviderError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
        ProviderError::Authentication { .. } => StatusCode::UNAUTHORIZED,
        ProviderError::Timeout { .. }
        | ProviderError::Connection { .. }
        | ProviderError::RateLimited { .. }
        | ProviderError::ProtocolError { .. }
        | ProviderError::InternalError { .. }
        | ProviderError::Unknown { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
