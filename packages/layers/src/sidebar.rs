//! The sidebar cross-reference list.
//!
//! One entry per rendered map element, in render order: first the tract
//! shapes, then the complaint markers. Each entry carries the element's
//! `layer_id`, so clicking an entry replays the element's click behavior
//! through the frontend's explicit id-to-layer map.

use serde::Serialize;

use crate::{ChoroplethLayer, PointOverlay};

/// One clickable sidebar row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEntry {
    /// Display text: tract label, or complaint street address.
    pub label: String,
    /// Identifier of the map element this entry fires.
    pub layer_id: String,
}

/// Builds the sidebar entries from whichever layers loaded. A layer that
/// failed to load contributes no entries.
#[must_use]
pub fn build_sidebar(
    choropleth: Option<&ChoroplethLayer>,
    overlay: Option<&PointOverlay>,
) -> Vec<SidebarEntry> {
    let mut entries = Vec::new();

    if let Some(layer) = choropleth {
        entries.extend(layer.features.iter().map(|feature| SidebarEntry {
            label: feature.display_label.clone(),
            layer_id: feature.layer_id.clone(),
        }));
    }

    if let Some(overlay) = overlay {
        entries.extend(overlay.markers.iter().map(|marker| SidebarEntry {
            // Markers without an address fall back to the popup text so
            // the entry is never blank.
            label: marker
                .address
                .clone()
                .unwrap_or_else(|| marker.popup_text.clone()),
            layer_id: marker.layer_id.clone(),
        }));
    }

    entries
}
