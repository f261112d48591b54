//! Binary entrypoint for the fare aggregation service.

use anyhow::{Context, Result};
use fare_aggregator::api::rest::{create_router, AppState};
use fare_aggregator::application::services::{AggregationConfig, PriceAggregationService};
use fare_aggregator::config::{LoggingConfig, ProviderSettings, ServiceConfig};
use fare_aggregator::infrastructure::auth::StaticTokenAuthenticator;
use fare_aggregator::infrastructure::providers::{
    LyftClient, LyftConfig, UberClient, UberConfig,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServiceConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    let lyft = LyftClient::new(lyft_config(&config.providers.lyft))
        .context("Failed to construct Lyft client")?;
    let uber = UberClient::new(uber_config(&config.providers.uber))
        .context("Failed to construct Uber client")?;

    let aggregation = PriceAggregationService::new(
        Arc::new(lyft),
        Arc::new(uber),
        AggregationConfig {
            per_provider_timeout_ms: config.aggregation.per_provider_timeout_ms,
        },
    );

    let authenticator = StaticTokenAuthenticator::new(config.auth.token.clone());
    if !authenticator.is_configured() {
        tracing::warn!("no authentication token configured; all requests will be rejected");
    }

    let state = Arc::new(AppState {
        authenticator: Arc::new(authenticator),
        aggregation: Arc::new(aggregation),
    });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "fare aggregation service listening");

    axum::serve(listener, create_router(state))
        .await
        .context("Server error")?;
    Ok(())
}

/// Builds the Lyft client configuration from service settings.
fn lyft_config(settings: &ProviderSettings) -> LyftConfig {
    let mut config = LyftConfig::default();
    if let Some(endpoint) = &settings.endpoint {
        config.endpoint = endpoint.clone();
    }
    config.token = settings.token.clone();
    config.timeout_ms = settings.timeout_ms;
    config
}

/// Builds the Uber client configuration from service settings.
fn uber_config(settings: &ProviderSettings) -> UberConfig {
    let mut config = UberConfig::default();
    if let Some(endpoint) = &settings.endpoint {
        config.endpoint = endpoint.clone();
    }
    config.token = settings.token.clone();
    config.timeout_ms = settings.timeout_ms;
    config
}

/// Initializes the tracing subscriber from logging settings.
fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
