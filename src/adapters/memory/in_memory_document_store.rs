//! In-Memory Document Store Adapter
//!
//! Keeps documents in process memory. Used when no database URL is
//! configured, and in tests.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DocumentId, DomainError, Timestamp};
use crate::ports::{DocumentStore, StoreDiagnostics};

/// A record as held by the in-memory store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub data: Map<String, Value>,
}

/// In-memory storage for documents, grouped by collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<BTreeMap<String, Vec<StoredDocument>>>>,
}

impl InMemoryDocumentStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents stored in a collection, in insertion order
    pub async fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of stored documents
    pub async fn document_count(&self) -> usize {
        self.collections.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Map<String, Value>,
    ) -> Result<DocumentId, DomainError> {
        let now = Value::from(Timestamp::now().to_rfc3339());
        record.insert("created_at".to_string(), now.clone());
        record.insert("updated_at".to_string(), now);

        let id = DocumentId::new();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, data: record });
        Ok(id)
    }

    /// Always reports "not connected": documents here do not survive a
    /// restart, so the store must never pass for a real database.
    async fn diagnostics(&self) -> StoreDiagnostics {
        StoreDiagnostics {
            store_name: Some("in-memory".to_string()),
            ..Default::default()
        }
    }
}
