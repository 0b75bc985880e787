//! Application state shared by every HTTP handler.

use std::sync::Arc;

use crate::application::handlers::{CheckHealthHandler, SubmitContactHandler};
use crate::ports::{CatalogProvider, DocumentStore};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct StudioAppState {
    pub document_store: Arc<dyn DocumentStore>,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl StudioAppState {
    pub fn new(document_store: Arc<dyn DocumentStore>, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            document_store,
            catalog,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.document_store.clone())
    }

    pub fn check_health_handler(&self) -> CheckHealthHandler {
        CheckHealthHandler::new(self.document_store.clone())
    }
}
