//! Catalog module - showroom content served to the website.
//!
//! Materials, portfolio projects and room hotspots. These are read-only
//! view models; the content itself comes from a [`crate::ports::CatalogProvider`].

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Materials
// ════════════════════════════════════════════════════════════════════════════════

/// All material categories shown in the material library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    pub categories: Vec<MaterialCategory>,
}

/// A group of related materials (woods, marbles, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCategory {
    pub name: String,
    pub items: Vec<Material>,
}

/// A single finish or material with its selling points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub title: String,
    pub look: String,
    #[serde(rename = "use")]
    pub usage: String,
    pub durability: String,
    /// Relative price band, `$` to `$$$$`.
    pub budget: String,
    pub alternatives: Vec<String>,
    pub image: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Projects
// ════════════════════════════════════════════════════════════════════════════════

/// Portfolio of completed projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    pub projects: Vec<Project>,
}

/// A before/after portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub before: String,
    pub after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<ProjectStory>,
}

/// Case-study narrative attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStory {
    pub challenge: String,
    pub moodboard: Vec<String>,
    pub sketch: String,
    pub materials: Vec<String>,
    pub testimonial: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Rooms
// ════════════════════════════════════════════════════════════════════════════════

/// Rooms available in the interactive room explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCatalog {
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub hotspots: Vec<Hotspot>,
}

/// A clickable annotation on a room photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub title: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_usage_serializes_as_use() {
        let material = Material {
            title: "Oak".to_string(),
            look: "Warm".to_string(),
            usage: "Flooring".to_string(),
            durability: "High".to_string(),
            budget: "$$".to_string(),
            alternatives: vec!["Ash".to_string()],
            image: "https://example.com/oak".to_string(),
        };

        let json = serde_json::to_value(&material).unwrap();
        assert_eq!(json["use"], "Flooring");
        assert!(json.get("usage").is_none());
    }

    #[test]
    fn project_without_story_omits_the_key() {
        let project = Project {
            id: "p2".to_string(),
            title: "Kitchen".to_string(),
            before: "b".to_string(),
            after: "a".to_string(),
            story: None,
        };

        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("story").is_none());
    }
}
