//! # Trip Query
//!
//! The four-coordinate trip description used to request price quotes.
//!
//! All fields are optional on purpose: the service forwards whatever the
//! caller supplied and lets each provider reject incomplete or
//! out-of-range coordinates with its own validation error. The handler
//! itself never rejects a trip query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin and destination coordinates for a price request.
///
/// Deserialized directly from request query parameters. Missing
/// parameters deserialize to `None` and are omitted from outbound
/// provider requests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripQuery {
    /// Origin latitude.
    pub start_lat: Option<f64>,
    /// Origin longitude.
    pub start_lng: Option<f64>,
    /// Destination latitude.
    pub end_lat: Option<f64>,
    /// Destination longitude.
    pub end_lng: Option<f64>,
}

impl TripQuery {
    /// Creates a trip query with all four coordinates present.
    #[must_use]
    pub fn complete(start_lat: f64, start_lng: f64, end_lat: f64, end_lng: f64) -> Self {
        Self {
            start_lat: Some(start_lat),
            start_lng: Some(start_lng),
            end_lat: Some(end_lat),
            end_lng: Some(end_lng),
        }
    }

    /// Returns true if all four coordinates are present.
    ///
    /// Diagnostic only: an incomplete query is still forwarded to
    /// providers.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.start_lat.is_some()
            && self.start_lng.is_some()
            && self.end_lat.is_some()
            && self.end_lng.is_some()
    }
}

impl fmt::Display for TripQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn coord(value: Option<f64>) -> String {
            value.map_or_else(|| "?".to_string(), |v| v.to_string())
        }
        write!(
            f,
            "({},{}) -> ({},{})",
            coord(self.start_lat),
            coord(self.start_lng),
            coord(self.end_lat),
            coord(self.end_lng)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn complete_query() {
        let query = TripQuery::complete(37.77, -122.41, 37.79, -122.39);
        assert!(query.is_complete());
        assert_eq!(query.start_lat, Some(37.77));
    }

    #[test]
    fn default_is_incomplete() {
        assert!(!TripQuery::is_complete(&TripQuery::default()));
    }

    #[test]
    fn partial_query_is_incomplete() {
        let query = TripQuery {
            start_lat: Some(123.0),
            start_lng: Some(123.0),
            ..TripQuery::default()
        };
        assert!(!query.is_complete());
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let query: TripQuery =
            serde_json::from_str(r#"{"start_lat":123.0,"start_lng":123.0}"#).unwrap();
        assert_eq!(query.start_lat, Some(123.0));
        assert_eq!(query.end_lat, None);
        assert!(!query.is_complete());
    }

    #[test]
    fn out_of_range_coordinates_are_not_rejected() {
        // Range validation is a provider concern.
        let query = TripQuery::complete(123.0, 123.0, 500.0, -500.0);
        assert!(query.is_complete());
    }

    #[test]
    fn display_marks_missing_coordinates() {
        let query = TripQuery {
            start_lat: Some(1.0),
            ..TripQuery::default()
        };
        assert_eq!(query.to_string(), "(1,?) -> (?,?)");
    }
}
