//! Static catalog adapter.
//!
//! Serves the studio's curated showroom content from in-process fixtures.

use once_cell::sync::Lazy;

use crate::domain::catalog::{
    Hotspot, Material, MaterialCatalog, MaterialCategory, Project, ProjectCatalog, ProjectStory,
    Room, RoomCatalog,
};
use crate::ports::CatalogProvider;

static MATERIALS: Lazy<MaterialCatalog> = Lazy::new(|| MaterialCatalog {
    categories: vec![
        MaterialCategory {
            name: "Woods".to_string(),
            items: vec![
                material(
                    "Walnut",
                    "Rich, deep brown with straight grain",
                    "Cabinetry, feature walls",
                    "High",
                    "$$$",
                    &["Teak", "Oak"],
                    "https://images.unsplash.com/photo-1616628188460-20b6b3f5ad5b",
                ),
                material(
                    "Oak",
                    "Warm beige-brown, visible grain",
                    "Flooring, furniture",
                    "High",
                    "$$",
                    &["Ash", "Maple"],
                    "https://images.unsplash.com/photo-1533090368676-1fd25485db88",
                ),
            ],
        },
        MaterialCategory {
            name: "Marbles".to_string(),
            items: vec![material(
                "Calacatta",
                "Bold veining on white base",
                "Countertops, bathroom",
                "Medium",
                "$$$$",
                &["Carrara", "Quartz"],
                "https://images.unsplash.com/photo-1523419409543-8ce8a06673f6",
            )],
        },
        MaterialCategory {
            name: "Fabrics".to_string(),
            items: vec![material(
                "Bouclé",
                "Soft looped texture",
                "Sofas, ottomans",
                "Medium",
                "$$$",
                &["Chenille", "Velvet"],
                "https://images.unsplash.com/photo-1610312275356-8e9aa9e8cf9e",
            )],
        },
        MaterialCategory {
            name: "Lighting".to_string(),
            items: vec![material(
                "Linear LED",
                "Minimal continuous glow",
                "Cove, task lighting",
                "High",
                "$$",
                &["COB Strip", "Track"],
                "https://images.unsplash.com/photo-1550226891-ef816aed4a47",
            )],
        },
    ],
});

static PROJECTS: Lazy<ProjectCatalog> = Lazy::new(|| ProjectCatalog {
    projects: vec![
        Project {
            id: "p1".to_string(),
            title: "Skyline Living Room".to_string(),
            before: "https://images.unsplash.com/photo-1505692794403-34d4982fa0bd".to_string(),
            after: "https://images.unsplash.com/photo-1505691938895-1758d7feb511".to_string(),
            story: Some(ProjectStory {
                challenge: "Dark, cramped living area lacking identity.".to_string(),
                moodboard: strings(&[
                    "https://images.unsplash.com/photo-1493666438817-866a91353ca9",
                    "https://images.unsplash.com/photo-1524758631624-e2822e304c36",
                ]),
                sketch: "https://images.unsplash.com/photo-1529088743536-4bc3ee39c1ff".to_string(),
                materials: strings(&["Walnut", "Calacatta Marble", "Matte Black"]),
                testimonial: "They turned our apartment into a sanctuary in the sky.".to_string(),
            }),
        },
        Project {
            id: "p2".to_string(),
            title: "Minimal Chef Kitchen".to_string(),
            before: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267".to_string(),
            after: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4".to_string(),
            story: None,
        },
    ],
});

static ROOMS: Lazy<RoomCatalog> = Lazy::new(|| RoomCatalog {
    rooms: vec![
        Room {
            name: "Living Room".to_string(),
            hotspots: vec![
                hotspot("Material Used", "Walnut wood + linen fabric"),
                hotspot("Lighting Technique", "Layered: cove + accent + task"),
                hotspot("Color Theme", "Warm neutrals with matte black"),
            ],
        },
        Room {
            name: "Bedroom".to_string(),
            hotspots: vec![hotspot("Material Used", "Bouclé headboard + oak floor")],
        },
    ],
});

fn material(
    title: &str,
    look: &str,
    usage: &str,
    durability: &str,
    budget: &str,
    alternatives: &[&str],
    image: &str,
) -> Material {
    Material {
        title: title.to_string(),
        look: look.to_string(),
        usage: usage.to_string(),
        durability: durability.to_string(),
        budget: budget.to_string(),
        alternatives: strings(alternatives),
        image: image.to_string(),
    }
}

fn hotspot(title: &str, text: &str) -> Hotspot {
    Hotspot {
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Catalog backed by compiled-in fixtures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogProvider for StaticCatalog {
    fn materials(&self) -> MaterialCatalog {
        MATERIALS.clone()
    }

    fn projects(&self) -> ProjectCatalog {
        PROJECTS.clone()
    }

    fn rooms(&self) -> RoomCatalog {
        ROOMS.clone()
    }
}
