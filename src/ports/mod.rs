//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentStore` - Persistence gateway for submitted records
//! - `CatalogProvider` - Source of showroom content

mod catalog_provider;
mod document_store;

pub use catalog_provider::CatalogProvider;
pub use document_store::{DocumentStore, StoreDiagnostics};
