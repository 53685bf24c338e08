use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic point to fetch observations for, plus the name shown in the
/// report header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self { latitude, longitude, label: label.into() }
    }

    /// Fallback location when neither flags nor config provide one.
    pub fn default_city() -> Self {
        Self::new(40.7128, -74.0060, "New York City")
    }
}

/// The unparsed response body for one request, stamped with the fetch time.
///
/// Created by an [`ObservationSource`](crate::provider::ObservationSource),
/// consumed once by [`map_fields`](crate::report::map_fields).
#[derive(Debug, Clone)]
pub struct RawDocument {
    body: String,
    fetched_at: DateTime<Utc>,
}

impl RawDocument {
    pub fn new(body: String, fetched_at: DateTime<Utc>) -> Self {
        Self { body, fetched_at }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_city_is_new_york() {
        let loc = Location::default_city();
        assert_eq!(loc.label, "New York City");
        assert!((loc.latitude - 40.7128).abs() < 1e-9);
        assert!((loc.longitude + 74.0060).abs() < 1e-9);
    }
}
