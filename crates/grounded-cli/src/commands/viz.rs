//! Native egui canvas command.
//!
//! Launches a native desktop window with the design canvas.

use anyhow::Result;
use eframe::{run_native, NativeOptions};
use grounded_viz::{AppOptions, GroundedApp};

use crate::config::Config;

/// Execute the viz command.
pub fn execute(config: &Config) -> Result<()> {
    let options = AppOptions {
        catalog: config.load_catalog()?,
        session: config.session_settings(),
        dark_mode: config.dark_mode,
    };

    println!(
        "🖼️  Launching design canvas ({} plants, {})...",
        options.catalog.len(),
        options.session.growth_year
    );
    println!("   Drag a card onto the canvas, click a plant to remove it");
    println!();

    let native_options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("Grounded - Design Canvas"),
        ..Default::default()
    };

    run_native(
        "Grounded",
        native_options,
        Box::new(move |cc| Ok(Box::new(GroundedApp::with_options(cc, options)))),
    )
    .map_err(|e| anyhow::anyhow!("Visualization error: {}", e))?;

    Ok(())
}
