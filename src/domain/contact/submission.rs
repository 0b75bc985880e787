//! ContactSubmission - a lead captured from the website's contact form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::ValidationError;

/// Collection contact submissions are stored under.
pub const CONTACT_COLLECTION: &str = "contactsubmission";

/// A contact-form submission as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub city: Option<String>,
    pub project_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
}

impl ContactSubmission {
    /// Checks that every required field carries non-blank text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("project_type", &self.project_type),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(())
    }

    /// Flattens the submission into the key/value record handed to the store.
    ///
    /// Absent optional fields are kept as explicit nulls.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("name".to_string(), Value::from(self.name.clone()));
        record.insert("phone".to_string(), Value::from(self.phone.clone()));
        record.insert("email".to_string(), Value::from(self.email.clone()));
        record.insert("city".to_string(), optional(&self.city));
        record.insert(
            "project_type".to_string(),
            Value::from(self.project_type.clone()),
        );
        record.insert("notes".to_string(), optional(&self.notes));
        record.insert("summary".to_string(), optional(&self.summary));
        record.insert("budget_range".to_string(), optional(&self.budget_range));
        record
    }
}

fn optional(value: &Option<String>) -> Value {
    value.clone().map(Value::from).unwrap_or(Value::Null)
}
