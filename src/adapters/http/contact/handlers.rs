//! HTTP handlers for contact-form intake.

use axum::extract::{Json, State};

use crate::adapters::http::{ApiError, StudioAppState};
use crate::application::handlers::SubmitContactCommand;

use super::dto::{ContactResponse, ContactSubmission};

/// POST /api/contact - Store a contact-form lead
pub async fn submit_contact(
    State(state): State<StudioAppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactResponse>, ApiError> {
    let handler = state.submit_contact_handler();
    let result = handler.handle(SubmitContactCommand { submission }).await?;

    Ok(Json(ContactResponse::ok(result.id.to_string())))
}
