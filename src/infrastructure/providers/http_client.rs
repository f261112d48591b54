//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for provider adapters.
//!
//! This module provides a reusable HTTP client with:
//! - Optional request timeouts
//! - JSON deserialization
//! - Status-code to error mapping
//!
//! # Examples
//!
//! ```ignore
//! use fare_aggregator::infrastructure::providers::http_client::HttpClient;
//!
//! let client = HttpClient::new(Some(5000))?;
//! let response: MyResponse = client.get_with_params(url, &params).await?;
//! ```

use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
///
/// When no timeout is configured the client waits indefinitely on the
/// upstream, matching the service's default behavior.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds, if any.
    timeout_ms: Option<u64>,
}

impl HttpClient {
    /// Creates a new HTTP client with an optional timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the client cannot be
    /// created.
    pub fn new(timeout_ms: Option<u64>) -> ProviderResult<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().map_err(|e| {
            ProviderError::internal_error(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, timeout_ms })
    }

    /// Creates a new HTTP client with default headers.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the client cannot be
    /// created.
    pub fn with_headers(
        timeout_ms: Option<u64>,
        default_headers: reqwest::header::HeaderMap,
    ) -> ProviderResult<Self> {
        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder.build().map_err(|e| {
            ProviderError::internal_error(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and deserializes the
    /// JSON response.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Connection` or `ProviderError::Timeout`
    /// if the request fails, and `ProviderError::ProtocolError` if the
    /// response cannot be parsed. Non-2xx statuses map through
    /// [`ProviderError`] by status class.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ProviderResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ProviderError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a ProviderError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            match self.timeout_ms {
                Some(ms) => {
                    ProviderError::timeout_with_duration("Request timed out", ms)
                }
                None => ProviderError::timeout("Request timed out"),
            }
        } else if error.is_connect() {
            ProviderError::connection(format!("Connection failed: {}", error))
        } else {
            ProviderError::connection(format!("HTTP request failed: {}", error))
        }
    }
}

/// Maps an HTTP status code to a ProviderError.
///
/// The upstream body is preserved as the message so validation
/// rejections surface verbatim to callers.
fn map_status_error(status: StatusCode, body: &str) -> ProviderError {
    let detail = if body.is_empty() {
        status.canonical_reason().unwrap_or("request failed")
    } else {
        body
    };

    match status {
        StatusCode::BAD_REQUEST => ProviderError::invalid_request(detail),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::authentication(detail),
        StatusCode::NOT_FOUND => {
            ProviderError::protocol_error(format!("Resource not found: {}", detail))
        }
        StatusCode::TOO_MANY_REQUESTS => ProviderError::rate_limited(detail),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            ProviderError::connection(format!("Server error ({}): {}", status, detail))
        }
        _ => ProviderError::protocol_error(format!("HTTP error ({}): {}", status, detail)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client_without_timeout() {
        let client = HttpClient::new(None);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), None);
    }

    #[test]
    fn new_client_with_timeout() {
        let client = HttpClient::new(Some(5000)).unwrap();
        assert_eq!(client.timeout_ms(), Some(5000));
    }

    #[test]
    fn with_headers() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Authorization", "Bearer token".parse().unwrap());
        let client = HttpClient::with_headers(Some(3000), headers);
        assert!(client.is_ok());
    }

    #[test]
    fn bad_request_maps_to_invalid_request_with_body() {
        let error = map_status_error(StatusCode::BAD_REQUEST, "Incorrect Params");
        assert!(matches!(error, ProviderError::InvalidRequest { .. }));
        assert_eq!(error.to_string(), "Incorrect Params");
    }

    #[test]
    fn unauthorized_maps_to_authentication() {
        let error = map_status_error(StatusCode::UNAUTHORIZED, "bad key");
        assert!(matches!(error, ProviderError::Authentication { .. }));
    }

    #[test]
    fn server_error_maps_to_connection() {
        let error = map_status_error(StatusCode::BAD_GATEWAY, "");
        assert!(matches!(error, ProviderError::Connection { .. }));
    }

    #[test]
    fn empty_body_falls_back_to_canonical_reason() {
        let error = map_status_error(StatusCode::BAD_REQUEST, "");
        assert_eq!(error.to_string(), "Bad Request");
    }
}
