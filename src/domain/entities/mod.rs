//! # Domain Entities
//!
//! Core domain objects returned by price providers.

pub mod estimate;

pub use estimate::{PriceList, RideEstimate};
