//! HTTP handlers for showroom catalog endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::StudioAppState;
use crate::domain::catalog::{MaterialCatalog, ProjectCatalog, RoomCatalog};

/// GET /api/materials
pub async fn get_materials(State(state): State<StudioAppState>) -> Json<MaterialCatalog> {
    Json(state.catalog.materials())
}

/// GET /api/projects
pub async fn get_projects(State(state): State<StudioAppState>) -> Json<ProjectCatalog> {
    Json(state.catalog.projects())
}

/// GET /api/rooms
pub async fn get_rooms(State(state): State<StudioAppState>) -> Json<RoomCatalog> {
    Json(state.catalog.rooms())
}
