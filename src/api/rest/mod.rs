//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Prices
//! - `GET /api/v1/prices` - Compare trip prices across Lyft and Uber.
//!   Requires the `authentication` header and the trip coordinates
//!   `start_lat`, `start_lng`, `end_lat`, `end_lng` as query
//!   parameters.
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use fare_aggregator::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     authenticator: /* ... */,
//!     aggregation: /* ... */,
//! });
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, HealthResponse, PriceComparisonResponse, ResponseMessage, AUTH_HEADER,
};
pub use routes::create_router;
