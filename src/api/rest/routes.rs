//! # Route Definitions
//!
//! Wires handlers into the axum router with the shared middleware
//! stack (request tracing, permissive CORS).

use crate::api::rest::handlers::{self, AppState};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the service router.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/prices", get(handlers::get_prices))
        .route("/api/v1/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
