//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter; `app_router` merges them and
//! applies the cross-cutting layers (tracing, timeout, CORS).

pub mod assistant;
pub mod catalog;
pub mod contact;
pub mod system;

mod error;
mod state;

#[cfg(test)]
mod test_support;

use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use state::StudioAppState;

/// Builds the complete application router.
pub fn app_router(state: StudioAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(system::system_routes())
        .merge(catalog::catalog_routes())
        .merge(assistant::assistant_routes())
        .merge(contact::contact_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Any origin is allowed unless an explicit list is configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(allowed))
}
