//! HTTP adapter for showroom catalog endpoints.
//!
//! Read-only; content comes from the configured `CatalogProvider`.

pub mod handlers;
pub mod routes;

pub use routes::catalog_routes;
