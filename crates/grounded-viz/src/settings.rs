//! Settings structures for the canvas UI.

use grounded_core::{Catalog, SessionSettings};

/// Visual style toggles.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Radius of a placed plant at growth scale 1.0.
    pub plant_radius: f32,
    /// Draw plant names under placed plants.
    pub show_labels: bool,
    /// Outline the canvas while a drag hovers it.
    pub highlight_drop_target: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            plant_radius: 28.0,
            show_labels: true,
            highlight_drop_target: true,
        }
    }
}

/// Everything needed to start the app, supplied by the native or web runner.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub catalog: Catalog,
    pub session: SessionSettings,
    /// `None` keeps whatever theme the platform picked.
    pub dark_mode: Option<bool>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            catalog: Catalog::seed(),
            session: SessionSettings::default(),
            dark_mode: None,
        }
    }
}
