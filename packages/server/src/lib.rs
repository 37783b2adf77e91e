#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the Brooklyn tract map.
//!
//! Loads the census tract `GeoJSON` and fetches the open 311 graffiti
//! complaints concurrently at startup, assembles the renderable layer
//! view models once, and serves them as JSON alongside the static
//! frontend. A dataset that fails to load is logged and surfaced as a
//! `503` on its endpoint rather than silently leaving the layer absent.

mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use std::path::PathBuf;

use tract_map_complaints::{ComplaintsConfig, fetch_complaints};
use tract_map_geography::load_tracts;
use tract_map_layers::{
    ChoroplethLayer, PointOverlay, SidebarEntry, build_choropleth_layer, build_point_overlay,
    build_sidebar,
};

/// Default location of the joined ACS tract boundary file.
pub const DEFAULT_TRACT_DATA_PATH: &str = "data/acs_data_joined.geojson";

/// Shared application state: the layer payloads built once at startup.
///
/// A `None` layer means that dataset failed to load; its endpoint reports
/// the failure instead of serving an empty layer.
pub struct AppState {
    /// Census tract choropleth layer, when the `GeoJSON` loaded.
    pub choropleth: Option<ChoroplethLayer>,
    /// Complaint point overlay, when the 311 fetch succeeded.
    pub complaints: Option<PointOverlay>,
    /// Sidebar cross-reference entries for whichever layers loaded.
    pub sidebar: Vec<SidebarEntry>,
}

impl AppState {
    /// Loads both datasets concurrently and builds the layer payloads.
    /// Neither failure is fatal; each is logged and recorded as `None`.
    pub async fn load() -> Self {
        let tract_path = PathBuf::from(
            std::env::var("TRACT_DATA_PATH").unwrap_or_else(|_| DEFAULT_TRACT_DATA_PATH.to_owned()),
        );
        let complaints_config = ComplaintsConfig::from_env();

        let (tracts, records) = tokio::join!(
            async { load_tracts(&tract_path) },
            fetch_complaints(&complaints_config),
        );

        let choropleth = match tracts {
            Ok(tracts) => Some(build_choropleth_layer(&tracts)),
            Err(e) => {
                log::error!("Failed to load census tract data: {e}");
                None
            }
        };

        let complaints = match records {
            Ok(records) => Some(build_point_overlay(&records)),
            Err(e) => {
                log::error!("Failed to fetch 311 complaint data: {e}");
                None
            }
        };

        let sidebar = build_sidebar(choropleth.as_ref(), complaints.as_ref());

        Self {
            choropleth,
            complaints,
            sidebar,
        }
    }
}

/// Starts the tract map server.
///
/// Loads both datasets, builds the layer payloads, and starts the
/// Actix-Web HTTP server. This is a regular async function — the caller
/// is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Loading census tracts and fetching 311 complaints...");
    let state = web::Data::new(AppState::load().await);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/choropleth", web::get().to(handlers::choropleth))
                    .route("/legend", web::get().to(handlers::legend))
                    .route("/complaints", web::get().to(handlers::complaints))
                    .route("/sidebar", web::get().to(handlers::sidebar)),
            )
            // Serve the static frontend
            .service(Files::new("/", "app").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
