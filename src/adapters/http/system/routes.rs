//! Route configuration for service-level endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{check_health, root};
use crate::adapters::http::StudioAppState;

/// Routes:
/// - `GET /` - Liveness greeting
/// - `GET /test` - Backend and database diagnostics
pub fn system_routes() -> Router<StudioAppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(check_health))
}
