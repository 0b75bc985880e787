//! HTTP handlers for the mocked AI features.
//!
//! Both endpoints are deterministic: the chatbot fills a concept template
//! from keywords, and the redesign endpoint returns reference variants
//! without looking at the uploaded image.

use axum::extract::multipart::MultipartError;
use axum::extract::{Json, Multipart};

use crate::adapters::http::ApiError;
use crate::domain::foundation::ValidationError;
use crate::domain::recommendation::RecommendationComposer;
use crate::domain::redesign::RedesignResponder;

use super::dto::{
    RecommendationBundle, RecommendationRequest, RedesignResult, RedesignUpload, FILE_FIELD,
    STYLE_FIELD,
};

/// POST /api/chatbot - Compose a design concept from room, style and budget
pub async fn chatbot(Json(request): Json<RecommendationRequest>) -> Json<RecommendationBundle> {
    let bundle = RecommendationComposer::compose_request(&request);
    tracing::debug!(room = %request.room, title = %bundle.title, "Composed recommendation");
    Json(bundle)
}

/// POST /api/redesign - Return style variants for an uploaded room photo
pub async fn redesign(multipart: Multipart) -> Result<Json<RedesignResult>, ApiError> {
    let upload = read_upload(multipart).await?;
    if !upload.has_file {
        return Err(ValidationError::missing_field(FILE_FIELD).into());
    }

    tracing::debug!(
        filename = ?upload.filename,
        size_bytes = upload.size_bytes,
        style = ?upload.style,
        "Received redesign upload"
    );

    Ok(Json(RedesignResponder::respond(
        upload.filename,
        upload.style.as_deref(),
    )))
}

fn upload_error(err: MultipartError) -> ApiError {
    ApiError::Upload(err.status(), err.body_text())
}

/// Drains the multipart body, keeping only the metadata the response needs.
///
/// A `file` part only counts as an upload when it carries a filename;
/// a plain form field of that name is ignored.
async fn read_upload(mut multipart: Multipart) -> Result<RedesignUpload, ApiError> {
    let mut upload = RedesignUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                upload.has_file = true;
                upload.filename = Some(filename);
                let bytes = field.bytes().await.map_err(upload_error)?;
                upload.size_bytes = bytes.len();
            }
            Some(STYLE_FIELD) => {
                let style = field.text().await.map_err(upload_error)?;
                upload.style = Some(style);
            }
            _ => {}
        }
    }

    Ok(upload)
}
