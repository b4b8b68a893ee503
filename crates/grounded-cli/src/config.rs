//! CLI configuration management.
//!
//! Supports loading configuration from environment variables, config files,
//! and CLI arguments with proper precedence.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use grounded_core::{Catalog, GrowthYear, SessionSettings};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "GROUNDED_CONFIG";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Growth year the slider starts at.
    pub growth_year: GrowthYear,

    /// Clamp drop positions into the canvas.
    pub clamp_drops: bool,

    /// Force a light or dark theme; `None` follows the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,

    /// JSON catalog to load instead of the built-in plants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            growth_year: GrowthYear::default(),
            clamp_drops: true,
            dark_mode: None,
            catalog: None,
        }
    }
}

impl Config {
    /// Load the effective configuration: the config file with environment
    /// overrides applied on top.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env();
        Ok(config)
    }

    /// Load only what is stored in the config file, or defaults if there is
    /// none. This is what `config set` edits and writes back.
    pub fn load_file() -> Result<Self> {
        let Some(config_path) = Self::config_file_path() else {
            return Ok(Self::default());
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
        let config = serde_json::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file {} (run `grounded config reset` to restore defaults)",
                config_path.display()
            )
        })?;
        debug!(path = %config_path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply `GROUNDED_*` environment overrides. Invalid values are ignored.
    pub fn apply_env(&mut self) {
        if let Ok(year) = std::env::var("GROUNDED_GROWTH_YEAR") {
            match parse_growth_year(&year) {
                Ok(year) => self.growth_year = year,
                Err(err) => warn!(value = %year, "Ignoring GROUNDED_GROWTH_YEAR: {}", err),
            }
        }
        if let Ok(clamp) = std::env::var("GROUNDED_CLAMP_DROPS") {
            match parse_bool(&clamp) {
                Ok(clamp) => self.clamp_drops = clamp,
                Err(err) => warn!(value = %clamp, "Ignoring GROUNDED_CLAMP_DROPS: {}", err),
            }
        }
        if let Ok(dark) = std::env::var("GROUNDED_DARK_MODE") {
            match parse_theme(&dark) {
                Ok(dark) => self.dark_mode = dark,
                Err(err) => warn!(value = %dark, "Ignoring GROUNDED_DARK_MODE: {}", err),
            }
        }
        if let Ok(catalog) = std::env::var("GROUNDED_CATALOG") {
            self.catalog = Some(PathBuf::from(catalog));
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "grounded", "grounded")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load the configured catalog, or the built-in plants.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog else {
            return Ok(Catalog::seed());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
        let catalog = Catalog::from_json(&contents)
            .with_context(|| format!("Invalid catalog in {}", path.display()))?;
        debug!(path = %path.display(), plants = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            clamp_drops: self.clamp_drops,
            growth_year: self.growth_year,
        }
    }
}

pub fn parse_growth_year(value: &str) -> Result<GrowthYear> {
    let year: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("Not a number: {}", value))?;
    Ok(GrowthYear::new(year)?)
}

pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Expected true or false, got {}", value),
    }
}

/// `auto` means follow the platform theme.
pub fn parse_theme(value: &str) -> Result<Option<bool>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "auto" | "" => Ok(None),
        "dark" => Ok(Some(true)),
        "light" => Ok(Some(false)),
        other => parse_bool(other).map(Some),
    }
}
