#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! ACS census tract boundary loading.
//!
//! Reads the joined ACS B07201 `GeoJSON` file (Brooklyn census tracts with
//! their population counts), extracts the numerator/denominator/label
//! property bag, and computes each polygon's bounding-box center for use
//! as a popup anchor. Features without usable geometry are skipped with a
//! warning.

use std::path::Path;

use geo::BoundingRect;
use geojson::{GeoJson, JsonObject, JsonValue};
use thiserror::Error;

/// Property key for the population living in the same house one year ago.
pub const NUMERATOR_PROP: &str = "ACS_13_5YR_B07201_HD01_VD02";
/// Property key for the total population of the tract.
pub const DENOMINATOR_PROP: &str = "ACS_13_5YR_B07201_HD01_VD01";
/// Property key for the tract's human-readable display label.
pub const LABEL_PROP: &str = "ACS_13_5YR_B07201_GEOdisplay_label";

/// Errors that can occur while loading tract boundaries.
#[derive(Debug, Error)]
pub enum GeoError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// One census tract: geometry, ACS counts, label, and popup anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct TractFeature {
    /// The original `GeoJSON` geometry, passed through to the frontend.
    pub geometry: geojson::Geometry,
    /// Population living in the same house one year ago, when present and
    /// numeric (ACS encodes counts as strings in some vintages).
    pub numerator: Option<f64>,
    /// Total tract population, same caveats as `numerator`.
    pub denominator: Option<f64>,
    /// Display label, e.g. `"Census Tract 1, Kings County, New York"`.
    pub display_label: String,
    /// Latitude of the geometry's bounding-box center.
    pub center_lat: f64,
    /// Longitude of the geometry's bounding-box center.
    pub center_lng: f64,
}

/// Loads the tract `FeatureCollection` from a file.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read, is not valid
/// `GeoJSON`, or is not a feature collection.
pub fn load_tracts(path: &Path) -> Result<Vec<TractFeature>, GeoError> {
    let raw = std::fs::read_to_string(path)?;
    let tracts = parse_tracts(&raw)?;
    log::info!("Loaded {} census tracts from {}", tracts.len(), path.display());
    Ok(tracts)
}

/// Parses a tract `FeatureCollection` from a `GeoJSON` string, preserving
/// feature order. Features without geometry, or whose geometry has no
/// bounding box, are skipped.
///
/// # Errors
///
/// Returns [`GeoError`] if the input is not a valid `GeoJSON` feature
/// collection.
pub fn parse_tracts(raw: &str) -> Result<Vec<TractFeature>, GeoError> {
    let geojson: GeoJson = raw.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(GeoError::Conversion {
            message: "expected a GeoJSON FeatureCollection".to_owned(),
        });
    };

    let mut tracts = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        if let Some(tract) = tract_from_feature(feature) {
            tracts.push(tract);
        } else {
            log::warn!("Skipping tract feature without usable geometry");
        }
    }
    Ok(tracts)
}

fn tract_from_feature(feature: geojson::Feature) -> Option<TractFeature> {
    let geometry = feature.geometry?;
    let geo_geometry = geo::Geometry::try_from(&geometry).ok()?;
    let center = geo_geometry.bounding_rect()?.center();

    let props = feature.properties.unwrap_or_default();
    Some(TractFeature {
        numerator: number_prop(&props, NUMERATOR_PROP),
        denominator: number_prop(&props, DENOMINATOR_PROP),
        display_label: string_prop(&props, LABEL_PROP).unwrap_or_default(),
        center_lat: center.y,
        center_lng: center.x,
        geometry,
    })
}

/// Reads a numeric property that may be encoded as a JSON number or a
/// numeric string. Returns `None` if absent or unparseable.
fn number_prop(props: &JsonObject, key: &str) -> Option<f64> {
    match props.get(key)? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_prop(props: &JsonObject, key: &str) -> Option<String> {
    match props.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tract_collection(properties: &str) -> String {
        format!(
            r#"{{
                "type": "FeatureCollection",
                "features": [{{
                    "type": "Feature",
                    "properties": {properties},
                    "geometry": {{
                        "type": "Polygon",
                        "coordinates": [[
                            [-73.95, 40.64], [-73.91, 40.64],
                            [-73.91, 40.66], [-73.95, 40.66],
                            [-73.95, 40.64]
                        ]]
                    }}
                }}]
            }}"#
        )
    }

    #[test]
    fn parses_feature_with_string_counts() {
        let raw = tract_collection(
            r#"{
                "ACS_13_5YR_B07201_HD01_VD01": "1000",
                "ACS_13_5YR_B07201_HD01_VD02": "950",
                "ACS_13_5YR_B07201_GEOdisplay_label": "Census Tract 1, Kings County, New York"
            }"#,
        );
        let tracts = parse_tracts(&raw).unwrap();
        assert_eq!(tracts.len(), 1);
        assert_eq!(tracts[0].numerator, Some(950.0));
        assert_eq!(tracts[0].denominator, Some(1000.0));
        assert_eq!(
            tracts[0].display_label,
            "Census Tract 1, Kings County, New York"
        );
    }

    #[test]
    fn parses_feature_with_numeric_counts() {
        let raw = tract_collection(
            r#"{"ACS_13_5YR_B07201_HD01_VD01": 1000, "ACS_13_5YR_B07201_HD01_VD02": 950}"#,
        );
        let tracts = parse_tracts(&raw).unwrap();
        assert_eq!(tracts[0].numerator, Some(950.0));
        assert_eq!(tracts[0].display_label, "");
    }

    #[test]
    fn computes_bounding_box_center() {
        let raw = tract_collection("{}");
        let tracts = parse_tracts(&raw).unwrap();
        assert!((tracts[0].center_lat - 40.65).abs() < 1e-9);
        assert!((tracts[0].center_lng - -73.93).abs() < 1e-9);
    }

    #[test]
    fn unparseable_counts_become_none() {
        let raw = tract_collection(
            r#"{"ACS_13_5YR_B07201_HD01_VD01": "n/a", "ACS_13_5YR_B07201_HD01_VD02": null}"#,
        );
        let tracts = parse_tracts(&raw).unwrap();
        assert_eq!(tracts[0].numerator, None);
        assert_eq!(tracts[0].denominator, None);
    }

    #[test]
    fn skips_feature_without_geometry() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [{"type": "Feature", "properties": {}, "geometry": null}]
        }"#;
        let tracts = parse_tracts(raw).unwrap();
        assert!(tracts.is_empty());
    }

    #[test]
    fn rejects_non_collection_input() {
        let raw = r#"{"type": "Point", "coordinates": [-73.93, 40.65]}"#;
        assert!(matches!(
            parse_tracts(raw),
            Err(GeoError::Conversion { .. })
        ));
    }
}
