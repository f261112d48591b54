//! # Ride Estimate Entity
//!
//! Represents one priced ride option from a provider.
//!
//! A provider answers a trip query with an ordered list of ride options
//! (shared, standard, XL, luxury, ...), each carrying an estimated cost
//! range. [`PriceList`] is that ordered list; the aggregated response
//! returns one `PriceList` per provider.
//!
//! # Examples
//!
//! ```
//! use fare_aggregator::domain::entities::RideEstimate;
//! use fare_aggregator::domain::value_objects::Price;
//!
//! let estimate = RideEstimate::new(
//!     "Lyft XL",
//!     Price::from_cents(1500).unwrap(),
//!     Price::from_cents(2200).unwrap(),
//!     "USD",
//! )
//! .unwrap()
//! .with_duration_seconds(913);
//!
//! assert_eq!(estimate.ride_type(), "Lyft XL");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of ride-option estimates from a single provider.
pub type PriceList = Vec<RideEstimate>;

/// A price estimate for one ride option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideEstimate {
    /// Display name of the ride option.
    ride_type: String,
    /// Lower bound of the estimated cost.
    min_cost: Price,
    /// Upper bound of the estimated cost.
    max_cost: Price,
    /// ISO 4217 currency code.
    currency: String,
    /// Estimated trip duration in seconds, when the provider reports it.
    duration_seconds: Option<u64>,
    /// Estimated trip distance in the provider's unit, when reported.
    distance: Option<f64>,
}

impl RideEstimate {
    /// Creates a new ride estimate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEstimate` if the ride type is empty
    /// or the minimum cost exceeds the maximum cost.
    pub fn new(
        ride_type: impl Into<String>,
        min_cost: Price,
        max_cost: Price,
        currency: impl Into<String>,
    ) -> DomainResult<Self> {
        let ride_type = ride_type.into();
        if ride_type.trim().is_empty() {
            return Err(DomainError::invalid_estimate("ride type must not be empty"));
        }
        if min_cost > max_cost {
            return Err(DomainError::invalid_estimate(format!(
                "minimum cost {min_cost} exceeds maximum cost {max_cost}"
            )));
        }
        Ok(Self {
            ride_type,
            min_cost,
            max_cost,
            currency: currency.into(),
            duration_seconds: None,
            distance: None,
        })
    }

    /// Sets the estimated trip duration.
    #[must_use]
    pub fn with_duration_seconds(mut self, seconds: u64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Sets the estimated trip distance.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Returns the ride option display name.
    #[inline]
    #[must_use]
    pub fn ride_type(&self) -> &str {
        &self.ride_type
    }

    /// Returns the lower cost bound.
    #[inline]
    #[must_use]
    pub fn min_cost(&self) -> Price {
        self.min_cost
    }

    /// Returns the upper cost bound.
    #[inline]
    #[must_use]
    pub fn max_cost(&self) -> Price {
        self.max_cost
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the estimated duration in seconds.
    #[inline]
    #[must_use]
    pub fn duration_seconds(&self) -> Option<u64> {
        self.duration_seconds
    }

    /// Returns the estimated distance.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Returns true if the estimate is a fixed price (min == max).
    #[must_use]
    pub fn is_fixed_price(&self) -> bool {
        self.min_cost == self.max_cost
    }
}

impl fmt::Display for RideEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.ride_type, self.min_cost, self.max_cost, self.currency
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn estimate(min_cents: i64, max_cents: i64) -> DomainResult<RideEstimate> {
        RideEstimate::new(
            "Lyft",
            Price::from_cents(min_cents).unwrap(),
            Price::from_cents(max_cents).unwrap(),
            "USD",
        )
    }

    #[test]
    fn new_creates_estimate() {
        let estimate = estimate(1000, 1500).unwrap();
        assert_eq!(estimate.ride_type(), "Lyft");
        assert_eq!(estimate.currency(), "USD");
        assert!(estimate.duration_seconds().is_none());
        assert!(estimate.distance().is_none());
    }

    #[test]
    fn rejects_empty_ride_type() {
        let result = RideEstimate::new(
            "  ",
            Price::from_cents(100).unwrap(),
            Price::from_cents(200).unwrap(),
            "USD",
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_inverted_cost_range() {
        assert!(estimate(2000, 1000).is_err());
    }

    #[test]
    fn fixed_price() {
        assert!(estimate(500, 500).unwrap().is_fixed_price());
        assert!(!estimate(500, 900).unwrap().is_fixed_price());
    }

    #[test]
    fn builder_setters() {
        let estimate = estimate(1000, 1500)
            .unwrap()
            .with_duration_seconds(600)
            .with_distance(3.2);
        assert_eq!(estimate.duration_seconds(), Some(600));
        assert_eq!(estimate.distance(), Some(3.2));
    }

    #[test]
    fn display() {
        let display = estimate(1000, 1500).unwrap().to_string();
        assert!(display.contains("Lyft"));
        assert!(display.contains("10.00"));
        assert!(display.contains("15.00"));
        assert!(display.contains("USD"));
    }

    #[test]
    fn serde_round_trip() {
        let estimate = estimate(1099, 1599).unwrap().with_duration_seconds(420);
        let json = serde_json::to_string(&estimate).unwrap();
        let back: RideEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(estimate, back);
    }
}
