//! Fixtures shared by the HTTP route tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Response;
use serde_json::{Map, Value};

use crate::adapters::catalog::StaticCatalog;
use crate::adapters::memory::InMemoryDocumentStore;
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
use crate::ports::{DocumentStore, StoreDiagnostics};

use super::StudioAppState;

/// Store that is never reachable.
pub struct UnavailableDocumentStore;

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    async fn create_document(
        &self,
        _collection: &str,
        _record: Map<String, Value>,
    ) -> Result<DocumentId, DomainError> {
        Err(DomainError::new(
            ErrorCode::StorageUnavailable,
            "Database not available",
        ))
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        StoreDiagnostics::unreachable(true, "connection refused")
    }
}

pub fn state_with(store: Arc<dyn DocumentStore>) -> StudioAppState {
    StudioAppState::new(store, Arc::new(StaticCatalog::new()))
}

pub fn in_memory_state() -> (StudioAppState, InMemoryDocumentStore) {
    let store = InMemoryDocumentStore::new();
    (state_with(Arc::new(store.clone())), store)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
