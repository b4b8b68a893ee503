//! Plant records and their care requirements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Feature flag value for pet-safe plants.
pub const PET_SAFE: &str = "petSafe";

/// Feature flag value for low-maintenance plants.
pub const LOW_MAINTENANCE: &str = "lowMaintenance";

/// Stable identifier of a catalog plant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub String);

impl PlantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// How much direct sun a plant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sunlight {
    Full,
    Partial,
    Shade,
}

impl Sunlight {
    /// All values in display order.
    pub const ALL: [Sunlight; 3] = [Sunlight::Full, Sunlight::Partial, Sunlight::Shade];

    /// Filter value used by the catalog filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sunlight::Full => "full",
            Sunlight::Partial => "partial",
            Sunlight::Shade => "shade",
        }
    }
}

impl fmt::Display for Sunlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Sunlight {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Sunlight::Full),
            "partial" => Ok(Sunlight::Partial),
            "shade" => Ok(Sunlight::Shade),
            _ => Err(CoreError::UnknownSunlight(s.to_string())),
        }
    }
}

/// How much watering a plant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Water {
    Low,
    Medium,
    High,
}

impl Water {
    /// All values in display order.
    pub const ALL: [Water; 3] = [Water::Low, Water::Medium, Water::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Water::Low => "low",
            Water::Medium => "medium",
            Water::High => "high",
        }
    }
}

impl fmt::Display for Water {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Water {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Water::Low),
            "medium" => Ok(Water::Medium),
            "high" => Ok(Water::High),
            _ => Err(CoreError::UnknownWater(s.to_string())),
        }
    }
}

/// A catalog entry. Never mutated once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    /// Common name shown on cards and canvas labels.
    pub name: String,
    pub scientific_name: String,
    pub category: String,
    pub sunlight: Sunlight,
    pub water: Water,
    pub pet_safe: bool,
    pub low_maintenance: bool,
    pub description: String,
}

impl Plant {
    /// Whether the plant carries the given feature flag.
    ///
    /// Unknown feature names are never carried.
    pub fn has_feature(&self, feature: &str) -> bool {
        match feature {
            PET_SAFE => self.pet_safe,
            LOW_MAINTENANCE => self.low_maintenance,
            _ => false,
        }
    }

    /// Human-readable tags shown on catalog cards.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.sunlight.as_str(), self.water.as_str()];
        if self.pet_safe {
            tags.push("Pet Safe");
        }
        if self.low_maintenance {
            tags.push("Low Maintenance");
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunlight_parse_is_case_insensitive() {
        assert_eq!("Shade".parse::<Sunlight>().unwrap(), Sunlight::Shade);
        assert_eq!("FULL".parse::<Sunlight>().unwrap(), Sunlight::Full);
        assert!(matches!(
            "dappled".parse::<Sunlight>(),
            Err(CoreError::UnknownSunlight(v)) if v == "dappled"
        ));
    }

    #[test]
    fn test_water_parse() {
        assert_eq!("medium".parse::<Water>().unwrap(), Water::Medium);
        assert!("soggy".parse::<Water>().is_err());
    }

    #[test]
    fn test_plant_serde_uses_camel_case() {
        let json = r#"{
            "id": "9",
            "name": "Yarrow",
            "scientificName": "Achillea millefolium",
            "category": "Perennial",
            "sunlight": "full",
            "water": "low",
            "petSafe": false,
            "lowMaintenance": true,
            "description": "Flat flower clusters"
        }"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.id, PlantId::from("9"));
        assert_eq!(plant.sunlight, Sunlight::Full);
        assert!(plant.low_maintenance);

        let value = serde_json::to_value(&plant).unwrap();
        assert_eq!(value["scientificName"], "Achillea millefolium");
        assert_eq!(value["water"], "low");
    }

    #[test]
    fn test_tags_and_features() {
        let json = r#"{"id":"1","name":"a","scientificName":"b","category":"c",
            "sunlight":"partial","water":"high","petSafe":true,"lowMaintenance":false,
            "description":""}"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.tags(), vec!["partial", "high", "Pet Safe"]);
        assert!(plant.has_feature(PET_SAFE));
        assert!(!plant.has_feature(LOW_MAINTENANCE));
        assert!(!plant.has_feature("thornless"));
    }
}
