//! Interior Studio API server.

use std::sync::Arc;

use interior_studio::adapters::http::{app_router, StudioAppState};
use interior_studio::adapters::{InMemoryDocumentStore, PostgresDocumentStore, StaticCatalog};
use interior_studio::config::{AppConfig, DatabaseConfig, LogFormat, ServerConfig};
use interior_studio::ports::DocumentStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let document_store = build_document_store(&config.database).await?;
    let state = StudioAppState::new(document_store, Arc::new(StaticCatalog::new()));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Interior Studio API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// RUST_LOG wins over the configured filter when set.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn build_document_store(
    config: &DatabaseConfig,
) -> Result<Arc<dyn DocumentStore>, Box<dyn std::error::Error>> {
    let Some(url) = config.url() else {
        tracing::warn!("No database URL configured; contact submissions are kept in memory");
        return Ok(Arc::new(InMemoryDocumentStore::new()));
    };

    let store = PostgresDocumentStore::connect_lazy(url, config)?;
    if config.run_migrations {
        if let Err(err) = store.run_migrations().await {
            // Keep serving; /test reports the database state.
            tracing::error!(error = %err, "Database migrations failed");
        }
    } else {
        tracing::warn!("Migrations disabled; the documents table must already exist");
    }

    tracing::info!(name = ?config.name, "Using PostgreSQL document store");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
