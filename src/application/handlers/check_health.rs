//! CheckHealthHandler - Query handler behind the `/test` diagnostics endpoint.

use std::sync::Arc;

use serde::Serialize;

use crate::ports::{DocumentStore, StoreDiagnostics};

/// Longest error excerpt echoed back to the caller.
const MAX_ERROR_CHARS: usize = 80;

/// Most collection names listed in the report.
const MAX_COLLECTIONS: usize = 10;

/// Query for service health.
#[derive(Debug, Clone, Default)]
pub struct CheckHealthQuery;

/// Best-effort backend and database status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl HealthReport {
    fn from_diagnostics(diagnostics: StoreDiagnostics) -> Self {
        if !diagnostics.connected {
            let database = match &diagnostics.error {
                Some(err) => format!("❌ Error: {}", truncate(err)),
                None => "⚠️ Available but not initialized".to_string(),
            };
            return Self {
                backend: "✅ Running".to_string(),
                database,
                database_url: None,
                database_name: None,
                connection_status: "Not Connected".to_string(),
                collections: Vec::new(),
            };
        }

        let database = match &diagnostics.error {
            Some(err) => format!("⚠️ Connected but Error: {}", truncate(err)),
            None => "✅ Connected & Working".to_string(),
        };
        let database_url = if diagnostics.url_configured {
            "✅ Set"
        } else {
            "❌ Not Set"
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: Some(database_url.to_string()),
            database_name: Some(
                diagnostics
                    .store_name
                    .unwrap_or_else(|| "✅ Connected".to_string()),
            ),
            connection_status: "Connected".to_string(),
            collections: diagnostics
                .collections
                .into_iter()
                .take(MAX_COLLECTIONS)
                .collect(),
        }
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Handler for health queries. Never fails.
pub struct CheckHealthHandler {
    store: Arc<dyn DocumentStore>,
}

impl CheckHealthHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: CheckHealthQuery) -> HealthReport {
        let diagnostics = self.store.diagnostics().await;
        if let Some(err) = &diagnostics.error {
            tracing::warn!(
                connected = diagnostics.connected,
                error = %err,
                "Document store diagnostics reported a problem"
            );
        }
        HealthReport::from_diagnostics(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};
    use async_trait::async_trait;
    use serde_json::{Map, Value};

    struct FixedDiagnosticsStore(StoreDiagnostics);

    #[async_trait]
    impl DocumentStore for FixedDiagnosticsStore {
        async fn create_document(
            &self,
            _collection: &str,
            _record: Map<String, Value>,
        ) -> Result<DocumentId, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "not used"))
        }

        async fn diagnostics(&self) -> StoreDiagnostics {
            self.0.clone()
        }
    }

    async fn report_for(diagnostics: StoreDiagnostics) -> HealthReport {
        CheckHealthHandler::new(Arc::new(FixedDiagnosticsStore(diagnostics)))
            .handle(CheckHealthQuery)
            .await
    }

    #[tokio::test]
    async fn healthy_store_reports_connected() {
        let report = report_for(StoreDiagnostics {
            store_name: Some("interior_studio".to_string()),
            url_configured: true,
            connected: true,
            collections: vec!["contactsubmission".to_string()],
            error: None,
        })
        .await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_url.as_deref(), Some("✅ Set"));
        assert_eq!(report.database_name.as_deref(), Some("interior_studio"));
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections, vec!["contactsubmission"]);
    }

    #[tokio::test]
    async fn unreachable_store_reports_not_connected() {
        let report = report_for(StoreDiagnostics::unreachable(true, "connection refused")).await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "❌ Error: connection refused");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, None);
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn store_without_database_is_not_initialized() {
        let report = report_for(StoreDiagnostics {
            store_name: Some("in-memory".to_string()),
            ..Default::default()
        })
        .await;

        assert_eq!(report.database, "⚠️ Available but not initialized");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_name, None);
    }

    #[tokio::test]
    async fn listing_failure_is_truncated() {
        let report = report_for(StoreDiagnostics {
            connected: true,
            error: Some("x".repeat(200)),
            ..Default::default()
        })
        .await;

        let expected = format!("⚠️ Connected but Error: {}", "x".repeat(80));
        assert_eq!(report.database, expected);
        assert_eq!(report.database_url.as_deref(), Some("❌ Not Set"));
        assert_eq!(report.database_name.as_deref(), Some("✅ Connected"));
    }

    #[tokio::test]
    async fn collections_are_capped_at_ten() {
        let report = report_for(StoreDiagnostics {
            connected: true,
            collections: (0..15).map(|i| format!("c{}", i)).collect(),
            ..Default::default()
        })
        .await;

        assert_eq!(report.collections.len(), 10);
        assert_eq!(report.collections[9], "c9");
    }
}
