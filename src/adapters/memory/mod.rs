//! In-memory adapters for development and tests.

mod in_memory_document_store;

pub use in_memory_document_store::{InMemoryDocumentStore, StoredDocument};
