//! # Price Provider Integrations
//!
//! Adapters for the external ride-price APIs.
//!
//! ## Available Adapters
//!
//! - [`LyftClient`]: Lyft cost-estimate API (`/v1/cost`)
//! - [`UberClient`]: Uber price-estimate API (`/v1.2/estimates/price`)
//!
//! Both implement the [`PriceProvider`] port and are constructed from
//! explicit config structs at startup; endpoint URLs are never resolved
//! inside request handling.

pub mod error;
pub mod http_client;
pub mod lyft;
pub mod traits;
pub mod uber;

pub use error::{ProviderError, ProviderResult};
pub use http_client::HttpClient;
pub use lyft::{LyftClient, LyftConfig};
pub use traits::PriceProvider;
pub use uber::{UberClient, UberConfig};
