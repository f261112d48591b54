//! # Price Value Object
//!
//! Non-negative decimal money amount.
//!
//! Ride-price estimates arrive from providers either as integer cents
//! (Lyft) or as whole currency units (Uber). [`Price`] normalizes both
//! onto a decimal representation that survives serialization without
//! floating-point drift.
//!
//! # Examples
//!
//! ```
//! use fare_aggregator::domain::value_objects::Price;
//!
//! let price = Price::from_cents(1250).unwrap();
//! assert_eq!(price.to_string(), "12.50");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative decimal price.
///
/// Construction is fallible: negative, NaN, and infinite inputs are
/// rejected with [`DomainError::InvalidPrice`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a floating-point value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative or
    /// not representable as a decimal (NaN, infinity).
    pub fn new(value: f64) -> DomainResult<Self> {
        let decimal = Decimal::from_f64(value).ok_or_else(|| {
            DomainError::invalid_price(format!("value {value} is not representable"))
        })?;
        Self::from_decimal(decimal)
    }

    /// Creates a price from an integer number of cents.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if `cents` is negative.
    pub fn from_cents(cents: i64) -> DomainResult<Self> {
        Self::from_decimal(Decimal::new(cents, 2))
    }

    /// Creates a price from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the value is negative.
    pub fn from_decimal(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_price(format!(
                "amount must not be negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> DomainResult<Self> {
        Self::from_decimal(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
