//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Static showroom fixtures
//! - `http` - REST API (axum)
//! - `memory` - In-process document store
//! - `postgres` - PostgreSQL document store

pub mod catalog;
pub mod http;
pub mod memory;
pub mod postgres;

pub use catalog::StaticCatalog;
pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
