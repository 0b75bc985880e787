//! HTTP handlers for service-level endpoints.

use axum::extract::{Json, State};
use serde::Serialize;

use crate::adapters::http::StudioAppState;
use crate::application::handlers::{CheckHealthQuery, HealthReport};

/// Greeting returned from the root path.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / - Liveness greeting
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Interior Studio API running",
    })
}

/// GET /test - Backend and database diagnostics
///
/// Always answers 200; database problems are described in the body.
pub async fn check_health(State(state): State<StudioAppState>) -> Json<HealthReport> {
    let handler = state.check_health_handler();
    Json(handler.handle(CheckHealthQuery).await)
}
