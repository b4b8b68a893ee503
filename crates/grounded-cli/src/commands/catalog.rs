//! Catalog command implementation.
//!
//! Runs the same search and filter chips the canvas uses and prints the
//! matching plants in catalog order.

use anyhow::Result;
use clap::ValueEnum;
use grounded_core::{
    filter_catalog, ActiveFilters, Catalog, FilterCategory, Plant, Sunlight, Water,
    LOW_MAINTENANCE, PET_SAFE,
};

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Filter arguments collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub sunlight: Vec<String>,
    pub water: Vec<String>,
    pub pet_safe: bool,
    pub low_maintenance: bool,
}

impl CatalogQuery {
    /// Validate chip values and build the active filter set.
    pub fn filters(&self) -> Result<ActiveFilters> {
        let mut filters = ActiveFilters::new();
        for value in &self.sunlight {
            let sunlight: Sunlight = value.parse()?;
            if !filters.is_active(FilterCategory::Sunlight, sunlight.as_str()) {
                filters.toggle(FilterCategory::Sunlight, sunlight.as_str());
            }
        }
        for value in &self.water {
            let water: Water = value.parse()?;
            if !filters.is_active(FilterCategory::Water, water.as_str()) {
                filters.toggle(FilterCategory::Water, water.as_str());
            }
        }
        if self.pet_safe {
            filters.toggle(FilterCategory::Features, PET_SAFE);
        }
        if self.low_maintenance {
            filters.toggle(FilterCategory::Features, LOW_MAINTENANCE);
        }
        Ok(filters)
    }
}

/// Execute the catalog command.
pub fn execute(catalog: &Catalog, query: &CatalogQuery, format: OutputFormat) -> Result<()> {
    let filters = query.filters()?;
    let search = query.search.as_deref().unwrap_or("");
    let plants = filter_catalog(catalog, search, &filters);

    tracing::debug!(
        search,
        matched = plants.len(),
        total = catalog.len(),
        "Filtered catalog"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plants)?);
        }
        OutputFormat::Text => print_table(&plants, catalog.len()),
    }

    Ok(())
}

fn print_table(plants: &[&Plant], total: usize) {
    println!("🌿 Plant Catalog ({} of {})", plants.len(), total);
    println!("{:─<72}", "");

    if plants.is_empty() {
        println!("No plants match the current filters");
        return;
    }

    for plant in plants {
        println!(
            "{:<18} {:<24} {:<8} {:<7} {}",
            plant.name,
            plant.scientific_name,
            plant.sunlight,
            plant.water,
            plant.category
        );
        let features: Vec<&str> = [(PET_SAFE, "Pet Safe"), (LOW_MAINTENANCE, "Low Maintenance")]
            .into_iter()
            .filter(|(flag, _)| plant.has_feature(flag))
            .map(|(_, label)| label)
            .collect();
        if features.is_empty() {
            println!("   {}", plant.description);
        } else {
            println!("   {} [{}]", plant.description, features.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builds_filters() {
        let query = CatalogQuery {
            sunlight: vec!["Shade".into(), "shade".into(), "partial".into()],
            water: vec!["high".into()],
            pet_safe: true,
            ..Default::default()
        };
        let filters = query.filters().unwrap();
        assert_eq!(filters.sunlight.len(), 2);
        assert!(filters.is_active(FilterCategory::Sunlight, "shade"));
        assert!(filters.is_active(FilterCategory::Water, "high"));
        assert!(filters.is_active(FilterCategory::Features, PET_SAFE));
        assert!(!filters.is_active(FilterCategory::Features, LOW_MAINTENANCE));

        let catalog = Catalog::seed();
        let names: Vec<_> = filter_catalog(&catalog, "", &filters)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fern"]);
    }

    #[test]
    fn test_query_rejects_unknown_values() {
        let query = CatalogQuery {
            water: vec!["soggy".into()],
            ..Default::default()
        };
        assert!(query.filters().is_err());
    }
}
