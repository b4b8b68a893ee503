//! Catalog search and filter chips.
//!
//! Filters combine with OR inside a category and AND across categories. An
//! empty category imposes no constraint.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::plant::{Plant, LOW_MAINTENANCE, PET_SAFE};

/// One of the three filter chip groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Sunlight,
    Water,
    Features,
}

impl FilterCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::Sunlight => "Sunlight",
            FilterCategory::Water => "Water Needs",
            FilterCategory::Features => "Features",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterCategory::Sunlight => "sunlight",
            FilterCategory::Water => "water",
            FilterCategory::Features => "features",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunlight" | "sun" => Ok(FilterCategory::Sunlight),
            "water" => Ok(FilterCategory::Water),
            "features" | "feature" => Ok(FilterCategory::Features),
            _ => Err(CoreError::UnknownFilterCategory(s.to_string())),
        }
    }
}

/// Currently selected filter chips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    pub sunlight: BTreeSet<String>,
    pub water: BTreeSet<String>,
    pub features: BTreeSet<String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, category: FilterCategory) -> &BTreeSet<String> {
        match category {
            FilterCategory::Sunlight => &self.sunlight,
            FilterCategory::Water => &self.water,
            FilterCategory::Features => &self.features,
        }
    }

    fn set_mut(&mut self, category: FilterCategory) -> &mut BTreeSet<String> {
        match category {
            FilterCategory::Sunlight => &mut self.sunlight,
            FilterCategory::Water => &mut self.water,
            FilterCategory::Features => &mut self.features,
        }
    }

    /// Flip membership of `value` in `category`. Returns whether it is now active.
    ///
    /// Any string is accepted; the other categories are left untouched.
    pub fn toggle(&mut self, category: FilterCategory, value: &str) -> bool {
        let set = self.set_mut(category);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn is_active(&self, category: FilterCategory, value: &str) -> bool {
        self.set(category).contains(value)
    }

    /// True when no chip is selected in any category.
    pub fn is_empty(&self) -> bool {
        self.sunlight.is_empty() && self.water.is_empty() && self.features.is_empty()
    }

    pub fn clear(&mut self) {
        self.sunlight.clear();
        self.water.clear();
        self.features.clear();
    }

    /// Check every active predicate against a single plant.
    pub fn matches(&self, plant: &Plant) -> bool {
        if !self.sunlight.is_empty() && !self.sunlight.contains(plant.sunlight.as_str()) {
            return false;
        }
        if !self.water.is_empty() && !self.water.contains(plant.water.as_str()) {
            return false;
        }
        if self.features.contains(PET_SAFE) && !plant.pet_safe {
            return false;
        }
        if self.features.contains(LOW_MAINTENANCE) && !plant.low_maintenance {
            return false;
        }
        true
    }
}

/// Case-insensitive substring match on name or scientific name.
///
/// An empty search matches every plant.
pub fn matches_search(plant: &Plant, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    plant.name.to_lowercase().contains(&needle)
        || plant.scientific_name.to_lowercase().contains(&needle)
}

/// Run search and filters over the catalog, preserving catalog order.
pub fn filter_catalog<'a>(
    catalog: &'a Catalog,
    search: &str,
    filters: &ActiveFilters,
) -> Vec<&'a Plant> {
    catalog
        .iter()
        .filter(|plant| matches_search(plant, search) && filters.matches(plant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(plants: &[&'a Plant]) -> Vec<&'a str> {
        plants.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_full_catalog() {
        let catalog = Catalog::seed();
        let result = filter_catalog(&catalog, "", &ActiveFilters::new());
        assert_eq!(result.len(), 6);
        assert_eq!(result[0].name, "Lavender");
        assert_eq!(result[5].name, "Fern");
    }

    #[test]
    fn test_shade_filter() {
        let catalog = Catalog::seed();
        let mut filters = ActiveFilters::new();
        filters.toggle(FilterCategory::Sunlight, "shade");
        let result = filter_catalog(&catalog, "", &filters);
        assert_eq!(names(&result), vec!["Hosta", "Fern"]);
    }

    #[test]
    fn test_or_within_category() {
        let catalog = Catalog::seed();
        let mut filters = ActiveFilters::new();
        filters.toggle(FilterCategory::Sunlight, "shade");
        filters.toggle(FilterCategory::Sunlight, "partial");
        let result = filter_catalog(&catalog, "", &filters);
        assert_eq!(names(&result), vec!["Hosta", "Japanese Maple", "Fern"]);
    }

    #[test]
    fn test_and_across_categories() {
        let catalog = Catalog::seed();
        let mut filters = ActiveFilters::new();
        filters.toggle(FilterCategory::Sunlight, "full");
        filters.toggle(FilterCategory::Water, "low");
        filters.toggle(FilterCategory::Features, PET_SAFE);
        let result = filter_catalog(&catalog, "", &filters);
        assert_eq!(names(&result), vec!["Lavender"]);
    }

    #[test]
    fn test_low_maintenance_feature() {
        let catalog = Catalog::seed();
        let mut filters = ActiveFilters::new();
        filters.toggle(FilterCategory::Features, LOW_MAINTENANCE);
        let result = filter_catalog(&catalog, "", &filters);
        assert_eq!(
            names(&result),
            vec!["Lavender", "Hosta", "Succulent Garden", "Fern"]
        );
    }

    #[test]
    fn test_search_matches_scientific_name_case_insensitive() {
        let catalog = Catalog::seed();
        let filters = ActiveFilters::new();
        assert_eq!(names(&filter_catalog(&catalog, "ACER", &filters)), vec!["Japanese Maple"]);
        assert_eq!(names(&filter_catalog(&catalog, "ros", &filters)), vec!["Rose Bush"]);
        assert!(filter_catalog(&catalog, "cactus", &filters).is_empty());
    }

    #[test]
    fn test_search_property_holds_for_every_result() {
        let catalog = Catalog::seed();
        let filters = ActiveFilters::new();
        for search in ["", "a", "hosta", "SPECIES", "an", "zz"] {
            for plant in filter_catalog(&catalog, search, &filters) {
                let needle = search.to_lowercase();
                assert!(
                    plant.name.to_lowercase().contains(&needle)
                        || plant.scientific_name.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut filters = ActiveFilters::new();
        filters.toggle(FilterCategory::Water, "high");
        let before = filters.clone();

        assert!(filters.toggle(FilterCategory::Sunlight, "full"));
        assert!(!filters.toggle(FilterCategory::Sunlight, "full"));
        assert_eq!(filters, before);
    }

    #[test]
    fn test_toggle_accepts_unknown_values() {
        let catalog = Catalog::seed();
        let mut filters = ActiveFilters::new();
        filters.toggle(FilterCategory::Features, "thornless");
        assert!(filters.is_active(FilterCategory::Features, "thornless"));
        assert!(filters.sunlight.is_empty() && filters.water.is_empty());
        // Unknown feature names do not constrain the result.
        assert_eq!(filter_catalog(&catalog, "", &filters).len(), 6);

        filters.toggle(FilterCategory::Sunlight, "moonlight");
        assert!(filter_catalog(&catalog, "", &filters).is_empty());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Sunlight".parse::<FilterCategory>().unwrap(), FilterCategory::Sunlight);
        assert_eq!("features".parse::<FilterCategory>().unwrap(), FilterCategory::Features);
        assert!("soil".parse::<FilterCategory>().is_err());
    }
}
