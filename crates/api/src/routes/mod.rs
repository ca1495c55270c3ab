pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (paths are part of the compatibility contract):
///
/// ```text
/// /upload/                 multipart upload, starts a processing session
/// /progress/{session_id}   current session status (200 + error field when unknown)
/// /locations               known locations, canonical order
/// /prognose                single-date forecast (POST, body optional)
/// /prognose_range          per-day forecast over an inclusive range (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/upload/", post(handlers::session::upload_file))
        .route(
            "/progress/{session_id}",
            get(handlers::session::get_progress),
        )
        .route("/locations", get(handlers::forecast::list_locations))
        .route("/prognose", post(handlers::forecast::prognose))
        .route("/prognose_range", post(handlers::forecast::prognose_range))
}
