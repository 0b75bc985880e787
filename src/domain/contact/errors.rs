//! Contact intake error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while taking in a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The submission is missing required content.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The document store rejected or could not accept the write.
    #[error("{message}")]
    Storage { code: ErrorCode, message: String },
}

impl ContactError {
    pub fn storage(code: ErrorCode, message: impl Into<String>) -> Self {
        ContactError::Storage {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContactError::Validation(_) => ErrorCode::ValidationFailed,
            ContactError::Storage { code, .. } => *code,
        }
    }
}

impl From<DomainError> for ContactError {
    fn from(err: DomainError) -> Self {
        ContactError::storage(err.code, err.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_passes_message_through() {
        let err: ContactError =
            DomainError::new(ErrorCode::StorageUnavailable, "Database not available").into();

        assert_eq!(err.to_string(), "Database not available");
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
    }

    #[test]
    fn validation_error_displays_field() {
        let err: ContactError = ValidationError::empty_field("name").into();

        assert_eq!(err.to_string(), "Field 'name' cannot be empty");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
