//! Redesign module - mocked style-transfer variants for an uploaded room photo.
//!
//! No image processing happens: the upload is acknowledged by filename and
//! the same three reference variants are returned for every request.

use serde::{Deserialize, Serialize};

/// Reference variants returned for every upload, in display order.
pub const REDESIGN_VARIANTS: [(&str, &str); 3] = [
    (
        "Modern Minimal",
        "https://images.unsplash.com/photo-1505691723518-36a5ac3b2dba",
    ),
    (
        "Luxury Classic",
        "https://images.unsplash.com/photo-1484154218962-a197022b5858",
    ),
    (
        "Urban Cozy",
        "https://images.unsplash.com/photo-1519710164239-da123dc03ef4",
    ),
];

/// A single styled rendering of the client's room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedesignVariant {
    pub name: String,
    pub image: String,
}

/// Response to a redesign upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedesignResult {
    pub input_filename: Option<String>,
    pub variants: Vec<RedesignVariant>,
}

/// Produces redesign variants for an upload.
pub struct RedesignResponder;

impl RedesignResponder {
    /// Echoes the uploaded filename alongside the fixed variant catalog.
    ///
    /// The style hint is accepted for API compatibility and ignored.
    pub fn respond(input_filename: Option<String>, _style_hint: Option<&str>) -> RedesignResult {
        RedesignResult {
            input_filename,
            variants: REDESIGN_VARIANTS
                .iter()
                .map(|(name, image)| RedesignVariant {
                    name: name.to_string(),
                    image: image.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant_names(result: &RedesignResult) -> Vec<&str> {
        result.variants.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn returns_three_fixed_variants() {
        let result = RedesignResponder::respond(Some("living.jpg".to_string()), None);

        assert_eq!(
            variant_names(&result),
            vec!["Modern Minimal", "Luxury Classic", "Urban Cozy"]
        );
        assert_eq!(
            result.variants[2].image,
            "https://images.unsplash.com/photo-1519710164239-da123dc03ef4"
        );
    }

    #[test]
    fn echoes_filename() {
        let result = RedesignResponder::respond(Some("kitchen.png".to_string()), Some("boho"));
        assert_eq!(result.input_filename.as_deref(), Some("kitchen.png"));
    }

    #[test]
    fn style_hint_does_not_change_variants() {
        let plain = RedesignResponder::respond(None, None);
        let hinted = RedesignResponder::respond(None, Some("Art Deco"));
        assert_eq!(plain.variants, hinted.variants);
    }

    #[test]
    fn serializes_missing_filename_as_null() {
        let json = serde_json::to_value(RedesignResponder::respond(None, None)).unwrap();
        assert!(json["input_filename"].is_null());
        assert_eq!(json["variants"].as_array().unwrap().len(), 3);
    }
}
