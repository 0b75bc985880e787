//! Route configuration for contact endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::submit_contact;
use crate::adapters::http::StudioAppState;

/// Creates the contact router.
///
/// Routes:
/// - `POST /api/contact` - Store a contact submission
pub fn contact_routes() -> Router<StudioAppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::test_support::{
        body_json, in_memory_state, state_with, UnavailableDocumentStore,
    };
    use crate::domain::contact::CONTACT_COLLECTION;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn contact_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn lead() -> Value {
        json!({
            "name": "Asha Rao",
            "phone": "+91 98450 00000",
            "email": "asha@example.com",
            "city": "Bengaluru",
            "project_type": "2BHK full home",
            "budget_range": "10-15L"
        })
    }

    #[tokio::test]
    async fn stores_submission_and_returns_id() {
        let (state, store) = in_memory_state();
        let app = contact_routes().with_state(state);

        let response = app.oneshot(contact_request(lead())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");

        let docs = store.documents(CONTACT_COLLECTION).await;
        assert_eq!(docs.len(), 1);
        assert_eq!(body["id"], docs[0].id.to_string());
        assert_eq!(docs[0].data["name"], "Asha Rao");
        assert_eq!(docs[0].data["notes"], Value::Null);
    }

    #[tokio::test]
    async fn unavailable_store_returns_error_envelope() {
        let app = contact_routes().with_state(state_with(Arc::new(UnavailableDocumentStore)));

        let response = app.oneshot(contact_request(lead())).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"status": "error", "message": "Database not available"})
        );
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_storage() {
        let (state, store) = in_memory_state();
        let app = contact_routes().with_state(state);

        let mut body = lead();
        body["name"] = json!("   ");
        let response = app.oneshot(contact_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Field 'name' cannot be empty");
        assert_eq!(store.document_count().await, 0);
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected() {
        let (state, _) = in_memory_state();
        let app = contact_routes().with_state(state);

        let response = app
            .oneshot(contact_request(json!({"name": "Asha", "phone": "1"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
