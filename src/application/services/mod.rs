//! # Application Services
//!
//! Orchestration services coordinating the infrastructure ports.

pub mod price_aggregation;

pub use price_aggregation::{
    AggregatedPrices, AggregationConfig, AggregationError, AggregationResult,
    PriceAggregationService,
};
