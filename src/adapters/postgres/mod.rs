//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresDocumentStore` - JSONB-backed document persistence

mod document_store;

pub use document_store::PostgresDocumentStore;
