//! Recommendation composer - turns a room/style/budget request into a concept bundle.

use serde::{Deserialize, Serialize};

use super::StyleCategory;

/// Turnkey and design-only cost range quoted on every concept.
pub const ESTIMATE: &str = "₹ 6–9L (turnkey) | ₹ 2–3L (design only)";

/// Delivery window quoted on every concept.
pub const TIMELINE: &str = "6–10 weeks";

/// A client's request for a design concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub room: String,
    pub style: String,
    /// Accepted but not yet used to shape the estimate.
    pub budget: String,
    #[serde(default)]
    pub measurements: Option<String>,
}

/// A composed design concept returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub title: String,
    pub recommendations: Vec<String>,
    pub estimate: String,
    pub timeline: String,
    pub palette: Vec<String>,
}

/// Stateless composer for design concepts.
pub struct RecommendationComposer;

impl RecommendationComposer {
    /// Composes a bundle for the given room, style text and budget.
    ///
    /// Never fails; empty inputs produce a Boho concept for an unnamed room.
    pub fn compose(room: &str, style: &str, _budget: &str) -> RecommendationBundle {
        let category = StyleCategory::from_style(style);

        RecommendationBundle {
            title: format!("Concept for {} — {}", room, category),
            recommendations: vec![
                format!("Space planning for {} with functional zones", room),
                format!("Material palette aligned to {} sensibility", category),
                "Lighting plan with dimmable scenes".to_string(),
                "3D visualization + 2 revisions".to_string(),
            ],
            estimate: ESTIMATE.to_string(),
            timeline: TIMELINE.to_string(),
            palette: category.palette().iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Composes a bundle for a full request.
    pub fn compose_request(request: &RecommendationRequest) -> RecommendationBundle {
        Self::compose(&request.room, &request.style, &request.budget)
    }
}
