//! HTTP DTOs for the contact endpoint.

use serde::{Deserialize, Serialize};

pub use crate::domain::contact::ContactSubmission;

/// Body returned once a submission is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: String,
    pub id: String,
}

impl ContactResponse {
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            id: id.into(),
        }
    }
}
