//! HTTP DTOs for the assistant endpoints.
//!
//! The domain request/response types are designed for serialization,
//! so we re-export them directly.

pub use crate::domain::recommendation::{RecommendationBundle, RecommendationRequest};
pub use crate::domain::redesign::{RedesignResult, RedesignVariant};

/// Multipart field carrying the room photo.
pub const FILE_FIELD: &str = "file";

/// Optional multipart field carrying a style hint.
pub const STYLE_FIELD: &str = "style";

/// Largest accepted redesign upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Parts of a redesign upload the service keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedesignUpload {
    /// Whether a `file` part was present at all.
    pub has_file: bool,
    pub filename: Option<String>,
    pub size_bytes: usize,
    pub style: Option<String>,
}
