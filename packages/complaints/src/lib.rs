#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! NYC 311 graffiti complaint data.
//!
//! Fetches open Brooklyn graffiti complaints from the NYC Open Data
//! Socrata endpoint, validates their coordinates, and assigns each
//! distinct resolution description a stable categorical color.

pub mod fetch;
pub mod scale;

use serde::Deserialize;

pub use fetch::{ComplaintsConfig, fetch_complaints};
pub use scale::{CATEGORY_PALETTE, CategoricalScale};

/// Errors that can occur while fetching complaint data.
#[derive(Debug, thiserror::Error)]
pub enum ComplaintError {
    /// HTTP request failed (includes non-2xx responses).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One 311 complaint record as returned by the Socrata API.
///
/// Socrata encodes coordinates as strings, and any field may be absent on
/// a given record, so everything is optional here. Validation happens in
/// [`ComplaintRecord::coordinates`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ComplaintRecord {
    /// Latitude as a decimal string.
    #[serde(default)]
    pub latitude: Option<String>,
    /// Longitude as a decimal string.
    #[serde(default)]
    pub longitude: Option<String>,
    /// Free-text resolution description; also the categorical color key.
    #[serde(default)]
    pub resolution_description: Option<String>,
    /// Street address of the incident, used as the sidebar label.
    #[serde(default)]
    pub incident_address: Option<String>,
}

impl ComplaintRecord {
    /// Returns `(latitude, longitude)` when both coordinates are present
    /// and parse as finite floats; `None` otherwise. Records failing this
    /// check get no marker.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat: f64 = self.latitude.as_deref()?.trim().parse().ok()?;
        let lng: f64 = self.longitude.as_deref()?.trim().parse().ok()?;
        if lat.is_finite() && lng.is_finite() {
            Some((lat, lng))
        } else {
            None
        }
    }

    /// The color-scale key for this record. Missing descriptions all share
    /// the empty-string key so every record still resolves to a color.
    #[must_use]
    pub fn scale_key(&self) -> &str {
        self.resolution_description.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: Option<&str>, lng: Option<&str>) -> ComplaintRecord {
        ComplaintRecord {
            latitude: lat.map(str::to_owned),
            longitude: lng.map(str::to_owned),
            ..ComplaintRecord::default()
        }
    }

    #[test]
    fn parses_valid_coordinates() {
        let (lat, lng) = record(Some("40.65"), Some("-73.93")).coordinates().unwrap();
        assert!((lat - 40.65).abs() < f64::EPSILON);
        assert!((lng - -73.93).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_record_with_one_coordinate() {
        assert!(record(Some("40.65"), None).coordinates().is_none());
        assert!(record(None, Some("-73.93")).coordinates().is_none());
    }

    #[test]
    fn rejects_unparseable_coordinates() {
        assert!(record(Some("forty"), Some("-73.93")).coordinates().is_none());
    }

    #[test]
    fn deserializes_socrata_record() {
        let raw = r#"{
            "unique_key": "31015465",
            "latitude": "40.650000",
            "longitude": "-73.930000",
            "resolution_description": "The Department has closed this complaint.",
            "incident_address": "123 FLATBUSH AVENUE"
        }"#;
        let record: ComplaintRecord = serde_json::from_str(raw).unwrap();
        assert!(record.coordinates().is_some());
        assert_eq!(
            record.incident_address.as_deref(),
            Some("123 FLATBUSH AVENUE")
        );
    }

    #[test]
    fn missing_fields_default_to_none() {
        let record: ComplaintRecord = serde_json::from_str("{}").unwrap();
        assert!(record.coordinates().is_none());
        assert_eq!(record.scale_key(), "");
    }
}
