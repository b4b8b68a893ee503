//! The plant catalog: an immutable, ordered list of plants.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::plant::{Plant, PlantId, Sunlight, Water};

/// Fixed, ordered set of plants available for placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate identifiers.
    pub fn new(plants: Vec<Plant>) -> CoreResult<Self> {
        if plants.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for plant in &plants {
            if !seen.insert(&plant.id) {
                return Err(CoreError::DuplicatePlantId {
                    id: plant.id.to_string(),
                });
            }
        }

        Ok(Self { plants })
    }

    /// Parse a catalog from a JSON array of plants.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let plants: Vec<Plant> = serde_json::from_str(json)?;
        Self::new(plants)
    }

    /// The built-in six-plant catalog.
    pub fn seed() -> Self {
        Self {
            plants: seed_plants(),
        }
    }

    /// Look up a plant by identifier.
    pub fn get(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| &p.id == id)
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plant> {
        self.plants.iter()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[allow(clippy::too_many_arguments)]
fn plant(
    id: &str,
    name: &str,
    scientific_name: &str,
    category: &str,
    sunlight: Sunlight,
    water: Water,
    pet_safe: bool,
    low_maintenance: bool,
    description: &str,
) -> Plant {
    Plant {
        id: PlantId::from(id),
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        category: category.to_string(),
        sunlight,
        water,
        pet_safe,
        low_maintenance,
        description: description.to_string(),
    }
}

fn seed_plants() -> Vec<Plant> {
    vec![
        plant(
            "1",
            "Lavender",
            "Lavandula angustifolia",
            "Perennial",
            Sunlight::Full,
            Water::Low,
            true,
            true,
            "Fragrant purple flowers, drought-tolerant",
        ),
        plant(
            "2",
            "Rose Bush",
            "Rosa hybrid",
            "Shrub",
            Sunlight::Full,
            Water::Medium,
            false,
            false,
            "Classic flowering shrub with thorns",
        ),
        plant(
            "3",
            "Hosta",
            "Hosta plantaginea",
            "Perennial",
            Sunlight::Shade,
            Water::Medium,
            true,
            true,
            "Large leafy plant perfect for shade areas",
        ),
        plant(
            "4",
            "Japanese Maple",
            "Acer palmatum",
            "Tree",
            Sunlight::Partial,
            Water::Medium,
            true,
            false,
            "Beautiful ornamental tree with colorful foliage",
        ),
        plant(
            "5",
            "Succulent Garden",
            "Various species",
            "Succulent",
            Sunlight::Full,
            Water::Low,
            false,
            true,
            "Low-water plants in various shapes and colors",
        ),
        plant(
            "6",
            "Fern",
            "Pteridium aquilinum",
            "Perennial",
            Sunlight::Shade,
            Water::High,
            true,
            true,
            "Lush green foliage for shaded areas",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_order() {
        let catalog = Catalog::seed();
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Lavender",
                "Rose Bush",
                "Hosta",
                "Japanese Maple",
                "Succulent Garden",
                "Fern"
            ]
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get(&PlantId::from("4")).unwrap().name, "Japanese Maple");
        assert!(catalog.get(&PlantId::from("42")).is_none());
    }

    #[test]
    fn test_from_json_round_trips_seed() {
        let seed = Catalog::seed();
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), seed);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut plants = Catalog::seed().plants().to_vec();
        plants[1].id = PlantId::from("1");
        assert!(matches!(
            Catalog::new(plants),
            Err(CoreError::DuplicatePlantId { id }) if id == "1"
        ));
    }

    #[test]
    fn test_empty_and_malformed_rejected() {
        assert!(matches!(Catalog::from_json("[]"), Err(CoreError::EmptyCatalog)));
        assert!(matches!(
            Catalog::from_json(r#"[{"id": "1"}]"#),
            Err(CoreError::Json(_))
        ));
    }
}
