//! # Application Layer
//!
//! Use-case orchestration on top of the domain and infrastructure
//! layers. The single use case of this service is the sequential
//! two-provider price comparison.

pub mod services;

pub use services::{
    AggregatedPrices, AggregationConfig, AggregationError, PriceAggregationService,
};
