//! PostgreSQL implementation of DocumentStore.
//!
//! Documents live in a single `documents` table keyed by collection, with
//! the record itself held as JSONB.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{DocumentStore, StoreDiagnostics};

/// PostgreSQL implementation of DocumentStore.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
    display_name: Option<String>,
}

impl PostgresDocumentStore {
    /// Builds a lazily-connecting pool from configuration.
    ///
    /// No connection is opened here, so the service starts even while
    /// the database is down; the first query pays the connect cost.
    pub fn connect_lazy(url: &str, config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy(url)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::StorageUnavailable,
                    format!("Invalid database configuration: {}", e),
                )
            })?;

        Ok(Self {
            pool,
            display_name: config.name.clone(),
        })
    }

    /// Applies pending schema migrations.
    pub async fn run_migrations(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Map<String, Value>,
    ) -> Result<DocumentId, DomainError> {
        let id = DocumentId::new();
        let now = Timestamp::now();
        record.insert("created_at".to_string(), Value::from(now.to_rfc3339()));
        record.insert("updated_at".to_string(), Value::from(now.to_rfc3339()));

        sqlx::query(
            r#"
            INSERT INTO documents (
                id, collection, data, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $4)
            "#,
        )
        .bind(id.as_uuid())
        .bind(collection)
        .bind(Json(&record))
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to insert document"))?;

        Ok(id)
    }

    async fn diagnostics(&self) -> StoreDiagnostics {
        let name: String = match sqlx::query_scalar("SELECT current_database()::text")
            .fetch_one(&self.pool)
            .await
        {
            Ok(name) => name,
            Err(e) => return StoreDiagnostics::unreachable(true, e.to_string()),
        };

        let mut diagnostics = StoreDiagnostics {
            store_name: Some(self.display_name.clone().unwrap_or(name)),
            url_configured: true,
            connected: true,
            ..Default::default()
        };

        match sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await
        {
            Ok(collections) => diagnostics.collections = collections,
            Err(e) => diagnostics.error = Some(e.to_string()),
        }

        diagnostics
    }
}

fn map_sqlx_error(err: sqlx::Error, context: &str) -> DomainError {
    let code = match &err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorCode::StorageUnavailable
        }
        _ => ErrorCode::DatabaseError,
    };
    DomainError::new(code, format!("{}: {}", context, err))
}
