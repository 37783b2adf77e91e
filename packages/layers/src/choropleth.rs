//! The census tract choropleth layer.

use serde::Serialize;
use tract_map_choropleth::{DerivedStatistic, classify};
use tract_map_geography::TractFeature;

/// Overlay title shown in the layer-toggle control.
pub const CHOROPLETH_TITLE: &str = "Percentage Living in Same House 1 Year Ago";

/// Prefix for tract layer identifiers (`acsLayerID0`, `acsLayerID1`, ...).
pub const ACS_LAYER_ID_PREFIX: &str = "acsLayerID";

/// Stroke + fill style for one tract shape, serialized with the field
/// names Leaflet path options use.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Stroke weight.
    pub weight: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Stroke color.
    pub color: &'static str,
    /// Bucket fill color.
    pub fill_color: &'static str,
    /// Fill opacity (`0.0` for empty tracts).
    pub fill_opacity: f64,
}

/// One styled tract shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethFeature {
    /// Stable identifier, `acsLayerID{i}` in input order.
    pub layer_id: String,
    /// Tract display label (also the sidebar entry text).
    pub display_label: String,
    /// The tract polygon, passed through unchanged.
    pub geometry: geojson::Geometry,
    /// Computed shape style.
    pub style: ShapeStyle,
    /// `[latitude, longitude]` of the shape's bounding-box center, where
    /// the popup opens.
    pub popup_anchor: [f64; 2],
    /// Popup body HTML.
    pub popup_html: String,
}

/// The full choropleth layer payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethLayer {
    /// Overlay title.
    pub title: &'static str,
    /// Styled shapes in input order.
    pub features: Vec<ChoroplethFeature>,
}

/// Builds the choropleth layer from the loaded tracts. Identifiers are
/// assigned from the loop index, so feature `i` always gets
/// `acsLayerID{i}` with no gaps or repeats.
#[must_use]
pub fn build_choropleth_layer(tracts: &[TractFeature]) -> ChoroplethLayer {
    let features = tracts
        .iter()
        .enumerate()
        .map(|(i, tract)| {
            let stat = DerivedStatistic::new(tract.numerator, tract.denominator);
            let fill = classify(stat.percentage);
            ChoroplethFeature {
                layer_id: format!("{ACS_LAYER_ID_PREFIX}{i}"),
                display_label: tract.display_label.clone(),
                geometry: tract.geometry.clone(),
                style: ShapeStyle {
                    weight: 1.0,
                    opacity: 0.25,
                    color: "grey",
                    fill_color: fill.fill_color,
                    fill_opacity: fill.fill_opacity,
                },
                popup_anchor: [tract.center_lat, tract.center_lng],
                popup_html: popup_html(&stat),
            }
        })
        .collect();

    ChoroplethLayer {
        title: CHOROPLETH_TITLE,
        features,
    }
}

fn popup_html(stat: &DerivedStatistic) -> String {
    format!(
        "<strong>Total Population:</strong> {}<br />\
         <strong>Population Living in Same House 1 Year Ago:</strong> {}<br />\
         <strong>Percentage Living in Same House 1 Year Ago:</strong> {}%",
        stat.denominator_text(),
        stat.numerator_text(),
        stat.percentage_text(),
    )
}
