//! SubmitContactHandler - Command handler for storing contact-form leads.

use std::sync::Arc;

use crate::domain::contact::{ContactError, ContactSubmission, CONTACT_COLLECTION};
use crate::domain::foundation::DocumentId;
use crate::ports::DocumentStore;

/// Command to store a contact submission.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub submission: ContactSubmission,
}

/// Result of a stored submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactResult {
    pub id: DocumentId,
}

/// Handler for contact submissions.
pub struct SubmitContactHandler {
    store: Arc<dyn DocumentStore>,
}

impl SubmitContactHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitContactCommand,
    ) -> Result<SubmitContactResult, ContactError> {
        // 1. Validate required fields
        cmd.submission.validate()?;

        // 2. Single write attempt; failures surface unchanged
        let id = self
            .store
            .create_document(CONTACT_COLLECTION, cmd.submission.to_record())
            .await
            .map_err(|err| {
                tracing::error!(
                    collection = CONTACT_COLLECTION,
                    code = %err.code,
                    error = %err.message,
                    "Failed to store contact submission"
                );
                ContactError::from(err)
            })?;

        tracing::info!(
            collection = CONTACT_COLLECTION,
            id = %id,
            project_type = %cmd.submission.project_type,
            "Stored contact submission"
        );

        Ok(SubmitContactResult { id })
    }
}
