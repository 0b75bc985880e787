//! Document store port.
//!
//! Defines the contract for the schemaless store that persists website
//! records (contact submissions today) and reports its own health.
//!
//! # Design
//!
//! - **Collection-scoped**: every record is written into a named collection
//! - **Single attempt**: callers do not retry; implementations must not either
//! - **Timestamped**: implementations stamp `created_at`/`updated_at` on write

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::foundation::{DocumentId, DomainError};

/// Reachability report used by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct StoreDiagnostics {
    /// Human-readable name of the underlying database, if known.
    pub store_name: Option<String>,
    /// Whether a connection URL was configured.
    pub url_configured: bool,
    /// Whether the store answered a round trip.
    pub connected: bool,
    /// Collections currently holding documents.
    pub collections: Vec<String>,
    /// Error raised while inspecting the store, if any.
    pub error: Option<String>,
}

impl StoreDiagnostics {
    /// Diagnostics for a store that could not be reached at all.
    pub fn unreachable(url_configured: bool, error: impl Into<String>) -> Self {
        Self {
            url_configured,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Port for persisting schemaless records.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a record into `collection` and return its generated id.
    ///
    /// # Errors
    ///
    /// - `StorageUnavailable` if the store cannot be reached
    /// - `DatabaseError` if the write is rejected
    async fn create_document(
        &self,
        collection: &str,
        record: Map<String, Value>,
    ) -> Result<DocumentId, DomainError>;

    /// Inspect the store. Never fails; problems are reported in the result.
    async fn diagnostics(&self) -> StoreDiagnostics;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn document_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn DocumentStore) {}
    }

    #[test]
    fn unreachable_diagnostics_are_disconnected() {
        let diagnostics = StoreDiagnostics::unreachable(true, "connection refused");

        assert!(!diagnostics.connected);
        assert!(diagnostics.url_configured);
        assert!(diagnostics.collections.is_empty());
        assert_eq!(diagnostics.error.as_deref(), Some("connection refused"));
    }
}
