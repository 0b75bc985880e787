//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_materials, get_projects, get_rooms};
use crate::adapters::http::StudioAppState;

/// Creates the catalog router.
///
/// Routes:
/// - `GET /api/materials` - Material library
/// - `GET /api/projects` - Portfolio projects
/// - `GET /api/rooms` - Room hotspots
pub fn catalog_routes() -> Router<StudioAppState> {
    Router::new()
        .route("/api/materials", get(get_materials))
        .route("/api/projects", get(get_projects))
        .route("/api/rooms", get(get_rooms))
}
