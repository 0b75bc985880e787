//! Route configuration for the assistant endpoints.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use super::dto::MAX_UPLOAD_BYTES;
use super::handlers::{chatbot, redesign};
use crate::adapters::http::StudioAppState;

/// Creates the assistant router.
///
/// Routes:
/// - `POST /api/redesign` - Multipart photo upload, returns style variants
/// - `POST /api/chatbot` - JSON request, returns a design concept
pub fn assistant_routes() -> Router<StudioAppState> {
    Router::new()
        .route(
            "/api/redesign",
            post(redesign).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/chatbot", post(chatbot))
}
