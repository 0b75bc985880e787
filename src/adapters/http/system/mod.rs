//! HTTP adapter for service-level endpoints.
//!
//! - `GET /` - Liveness greeting
//! - `GET /test` - Backend and database diagnostics

pub mod handlers;
pub mod routes;

pub use routes::system_routes;
