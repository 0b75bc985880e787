//! Catalog provider port (read side).
//!
//! Supplies the showroom content. The content is curated by the studio,
//! so reads cannot fail.

use crate::domain::catalog::{MaterialCatalog, ProjectCatalog, RoomCatalog};

/// Read-only source of showroom content.
pub trait CatalogProvider: Send + Sync {
    /// Material library grouped by category.
    fn materials(&self) -> MaterialCatalog;

    /// Portfolio projects with optional case studies.
    fn projects(&self) -> ProjectCatalog;

    /// Rooms and their hotspot annotations.
    fn rooms(&self) -> RoomCatalog;
}
