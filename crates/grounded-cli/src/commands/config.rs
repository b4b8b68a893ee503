//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::{parse_bool, parse_growth_year, parse_theme, Config};

const VALID_KEYS: &str = "growth-year, clamp-drops, dark-mode, catalog";

fn theme_label(dark_mode: Option<bool>) -> &'static str {
    match dark_mode {
        None => "auto",
        Some(true) => "dark",
        Some(false) => "light",
    }
}

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("Grounded CLI Configuration");
    println!("{:-<40}", "");

    println!("Growth Year:   {}", config.growth_year.get());
    println!("Clamp Drops:   {}", config.clamp_drops);
    println!("Theme:         {}", theme_label(config.dark_mode));
    println!(
        "Catalog:       {}",
        config
            .catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "growth-year" | "year" => {
            config.growth_year = parse_growth_year(value)?;
            println!("Set growth-year to: {}", config.growth_year.get());
        }
        "clamp-drops" | "clamp" => {
            config.clamp_drops = parse_bool(value)?;
            println!("Set clamp-drops to: {}", config.clamp_drops);
        }
        "dark-mode" | "theme" => {
            config.dark_mode = parse_theme(value)?;
            println!("Set dark-mode to: {}", theme_label(config.dark_mode));
        }
        "catalog" => {
            config.catalog = match value {
                "" | "none" | "builtin" => None,
                path => Some(PathBuf::from(path)),
            };
            // Fail early rather than on the next launch.
            config.load_catalog()?;
            println!(
                "Set catalog to: {}",
                config
                    .catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string())
            );
        }
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, VALID_KEYS);
        }
    }

    config.save()?;
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "growth-year" | "year" => config.growth_year.get().to_string(),
        "clamp-drops" | "clamp" => config.clamp_drops.to_string(),
        "dark-mode" | "theme" => theme_label(config.dark_mode).to_string(),
        "catalog" => config
            .catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string()),
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, VALID_KEYS);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
