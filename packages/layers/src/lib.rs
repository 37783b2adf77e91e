#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Renderable map layer view models.
//!
//! Everything the frontend needs to draw the map is assembled here:
//! per-tract shapes with their computed style, popup anchor, and popup
//! HTML; complaint markers with their categorical colors; the legend; and
//! the sidebar cross-reference list. Each rendered element carries a
//! stable `layer_id` (`acsLayerID{i}` / `apiLayerGroup{i}`, assigned from
//! the element's zero-based position in input order) that the sidebar uses
//! to replay the element's click behavior.

pub mod choropleth;
pub mod overlay;
pub mod sidebar;

pub use choropleth::{ChoroplethFeature, ChoroplethLayer, ShapeStyle, build_choropleth_layer};
pub use overlay::{Marker, MarkerStyle, PointOverlay, build_point_overlay};
pub use sidebar::{SidebarEntry, build_sidebar};
