//! HTTP handler functions for the tract map API.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiHealth {
    healthy: bool,
    version: String,
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/choropleth`
///
/// Returns the styled census tract layer, or `503` when the tract
/// dataset failed to load.
pub async fn choropleth(state: web::Data<AppState>) -> HttpResponse {
    match &state.choropleth {
        Some(layer) => HttpResponse::Ok().json(layer),
        None => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "Census tract data unavailable"
        })),
    }
}

/// `GET /api/legend`
///
/// Returns the six color bucket legend rows. Static: available even when
/// the tract dataset failed to load.
pub async fn legend() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "title": "Percentage Population<br />That Lived in Same House<br />Last Year",
        "entries": tract_map_choropleth::legend_entries(),
    }))
}

/// `GET /api/complaints`
///
/// Returns the complaint marker overlay, or `503` when the 311 fetch
/// failed.
pub async fn complaints(state: web::Data<AppState>) -> HttpResponse {
    match &state.complaints {
        Some(overlay) => HttpResponse::Ok().json(overlay),
        None => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "error": "311 complaint data unavailable"
        })),
    }
}

/// `GET /api/sidebar`
///
/// Returns the cross-reference list entries. Layers that failed to load
/// simply contribute no entries.
pub async fn sidebar(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.sidebar)
}
