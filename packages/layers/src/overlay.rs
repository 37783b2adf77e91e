//! The 311 complaint point overlay.

use serde::Serialize;
use tract_map_complaints::{CATEGORY_PALETTE, CategoricalScale, ComplaintRecord};

/// Overlay title shown in the layer-toggle control.
pub const OVERLAY_TITLE: &str = "Open 311 Graffiti Complaints";

/// Prefix for marker layer identifiers (`apiLayerGroup0`, ...).
pub const API_LAYER_ID_PREFIX: &str = "apiLayerGroup";

/// Circle marker radius in pixels.
pub const MARKER_RADIUS: f64 = 5.0;

/// Style for one circle marker, serialized with Leaflet's field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Markers are filled circles with no stroke.
    pub stroke: bool,
    /// Categorical color keyed on the resolution description.
    pub fill_color: &'static str,
    /// Always fully opaque.
    pub fill_opacity: f64,
    /// Radius in pixels.
    pub radius: f64,
}

/// One complaint marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Stable identifier, `apiLayerGroup{i}` over the valid records in
    /// input order.
    pub layer_id: String,
    /// Marker latitude.
    pub latitude: f64,
    /// Marker longitude.
    pub longitude: f64,
    /// Computed marker style.
    pub style: MarkerStyle,
    /// Popup body text (the resolution description).
    pub popup_text: String,
    /// Street address, used as the sidebar entry label.
    pub address: Option<String>,
}

/// The full point overlay payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOverlay {
    /// Overlay title.
    pub title: &'static str,
    /// Markers for every record with valid coordinates, in input order.
    pub markers: Vec<Marker>,
}

/// Builds the point overlay from the fetched complaints.
///
/// The categorical scale is built over the full dataset before coordinate
/// validation, so the label-to-color mapping does not depend on which
/// records have usable coordinates. Records without both coordinates get
/// no marker. Identifiers number the surviving markers in input order, so
/// the sidebar's `apiLayerGroup{i}` lookups always resolve.
#[must_use]
pub fn build_point_overlay(records: &[ComplaintRecord]) -> PointOverlay {
    let scale = CategoricalScale::from_records(records);

    let mut markers: Vec<Marker> = Vec::new();
    let mut skipped = 0_usize;
    for record in records {
        let Some((latitude, longitude)) = record.coordinates() else {
            skipped += 1;
            continue;
        };
        let fill_color = scale
            .color(record.scale_key())
            .unwrap_or(CATEGORY_PALETTE[0]);
        markers.push(Marker {
            layer_id: format!("{API_LAYER_ID_PREFIX}{}", markers.len()),
            latitude,
            longitude,
            style: MarkerStyle {
                stroke: false,
                fill_color,
                fill_opacity: 1.0,
                radius: MARKER_RADIUS,
            },
            popup_text: record.scale_key().to_owned(),
            address: record.incident_address.clone(),
        });
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} complaint records without valid coordinates");
    }

    PointOverlay {
        title: OVERLAY_TITLE,
        markers,
    }
}
