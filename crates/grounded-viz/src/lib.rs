//! WASM-compatible egui design canvas for Grounded.
//!
//! This crate provides an egui front end that can run:
//! - Natively (via eframe)
//! - In the browser (via WASM)

mod app;
mod canvas;
mod catalog_panel;
mod render;
mod settings;
mod ui;

pub use app::GroundedApp;
pub use settings::{AppOptions, SettingsStyle};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Id of the `<canvas>` element the web build renders into.
#[cfg(target_arch = "wasm32")]
pub const CANVAS_ELEMENT_ID: &str = "grounded-canvas";

/// Start the app in WASM context.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use wasm_bindgen::JsCast;

    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            web_sys::console::error_1(
                &format!("No <canvas id=\"{}\"> found", CANVAS_ELEMENT_ID).into(),
            );
            return;
        };

        if let Err(err) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(GroundedApp::new(cc)))),
            )
            .await
        {
            web_sys::console::error_1(&err);
        }
    });
}
