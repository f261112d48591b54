//! # Fare Aggregator
//!
//! Ride-price aggregation service comparing Lyft and Uber trip
//! estimates behind a single authenticated endpoint.
//!
//! A request supplies a bearer token and four trip coordinates; the
//! service validates the token, queries Lyft and then Uber for the same
//! trip, and answers with either a merged price comparison or the first
//! error encountered.
//!
//! # Architecture
//!
//! - [`domain`]: value objects and the ride-estimate entity
//! - [`infrastructure`]: provider HTTP adapters and the token check
//! - [`application`]: the sequential two-provider aggregation service
//! - [`api`]: the axum REST surface
//! - [`config`]: file/environment configuration

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
