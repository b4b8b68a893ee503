//! Main application state and frame loop.

use eframe::{App, CreationContext};
use egui::Context;
use tracing::debug;

use grounded_core::{Catalog, DesignSession, DropOutcome};

use crate::canvas::show_canvas;
use crate::catalog_panel::show_catalog_panel;
use crate::render::canvas_bounds;
use crate::settings::{AppOptions, SettingsStyle};
use crate::ui::draw_drag_ghost;

/// The landscape design canvas application.
pub struct GroundedApp {
    /// Catalog, filters, placements and drag state
    session: DesignSession,
    /// Style settings
    settings_style: SettingsStyle,
    /// Whether to show the catalog panel
    show_catalog: bool,
    /// Current dark mode state
    dark_mode: bool,
    /// Canvas rect from the last rendered frame
    canvas_rect: Option<egui::Rect>,
    /// Last known pointer position
    last_pointer: Option<egui::Pos2>,
}

impl GroundedApp {
    /// Create a new app with the built-in catalog.
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let options = AppOptions {
            catalog: Self::load_or_seed(),
            ..AppOptions::default()
        };
        Self::with_options(cc, options)
    }

    pub fn with_options(cc: &CreationContext<'_>, options: AppOptions) -> Self {
        if let Some(dark) = options.dark_mode {
            cc.egui_ctx.set_visuals(if dark {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
        }
        let dark_mode = cc.egui_ctx.style().visuals.dark_mode;

        Self {
            session: DesignSession::with_settings(options.catalog, options.session),
            settings_style: SettingsStyle::default(),
            show_catalog: true,
            dark_mode,
            canvas_rect: None,
            last_pointer: None,
        }
    }

    /// Load a catalog injected by the host page, or fall back to the seed.
    fn load_or_seed() -> Catalog {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(catalog) = Self::try_load_from_window() {
                return catalog;
            }
        }
        Catalog::seed()
    }

    #[cfg(target_arch = "wasm32")]
    fn try_load_from_window() -> Option<Catalog> {
        let window = web_sys::window()?;
        let data = js_sys::Reflect::get(&window, &"GROUNDED_CATALOG".into()).ok()?;
        let json_str = data.as_string()?;
        match Catalog::from_json(&json_str) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                web_sys::console::warn_1(&format!("Ignoring GROUNDED_CATALOG: {}", err).into());
                None
            }
        }
    }

    fn ui_style(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Display").show(ui, |ui| {
            let mut dark = ui.ctx().style().visuals.dark_mode;
            if ui.checkbox(&mut dark, "dark mode").changed() {
                if dark {
                    ui.ctx().set_visuals(egui::Visuals::dark());
                } else {
                    ui.ctx().set_visuals(egui::Visuals::light());
                }
                self.dark_mode = dark;
            }
            ui.checkbox(&mut self.settings_style.show_labels, "Plant labels");
            ui.checkbox(
                &mut self.settings_style.highlight_drop_target,
                "Highlight drop target",
            );
            ui.add(
                egui::Slider::new(&mut self.settings_style.plant_radius, 12.0..=60.0)
                    .text("plant size"),
            );
        });
    }

    /// Track hover and resolve a release for any drag in flight.
    fn resolve_drag(&mut self, ctx: &Context) {
        let (latest, released, escape) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.any_released(),
                i.key_pressed(egui::Key::Escape),
            )
        });
        // Touch and web input drop the pointer on the release frame.
        let pointer = track_pointer(latest, &mut self.last_pointer);

        if !self.session.is_dragging() {
            return;
        }

        if escape {
            self.session.cancel_drag();
            return;
        }

        let canvas = self.canvas_rect.map(canvas_bounds);
        let over_canvas = match (pointer, canvas) {
            (Some(pos), Some(canvas)) => canvas.contains(pos.x, pos.y),
            _ => false,
        };
        self.session.update_drag_hover(over_canvas);

        if released {
            let outcome = match canvas {
                Some(canvas) => self.session.release(pointer.map(|p| (p.x, p.y)), canvas),
                None => {
                    self.session.cancel_drag();
                    DropOutcome::OutsideCanvas
                }
            };
            if outcome.placed().is_none() {
                debug!(?outcome, "Release produced no placement");
            }
            return;
        }

        // Global "allowed" cursor while dragging anywhere in the window.
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        if let (Some(pos), Some(plant)) = (pointer, self.session.dragged_plant()) {
            draw_drag_ghost(ctx, pos, &plant.name, over_canvas);
        }
        ctx.request_repaint();
    }
}

/// Pointer position for this frame, falling back to the last known one.
fn track_pointer(latest: Option<egui::Pos2>, last: &mut Option<egui::Pos2>) -> Option<egui::Pos2> {
    if latest.is_some() {
        *last = latest;
    }
    *last
}

/// Tab hides the catalog unless a text field has focus or a drag is active.
fn toggles_catalog(tab_pressed: bool, typing: bool, dragging: bool) -> bool {
    tab_pressed && !typing && !dragging
}

// =============================================================================
// App Implementation
// =============================================================================

impl App for GroundedApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        let tab = ctx.input(|i| i.key_pressed(egui::Key::Tab));
        if toggles_catalog(tab, ctx.wants_keyboard_input(), self.session.is_dragging()) {
            self.show_catalog = !self.show_catalog;
        }

        if self.show_catalog {
            egui::SidePanel::right("plant_catalog")
                .default_width(320.0)
                .show(ctx, |ui| {
                    if let Some(plant_id) = show_catalog_panel(ui, &mut self.session) {
                        self.session.begin_drag(plant_id);
                    }
                    ui.separator();
                    self.ui_style(ui);
                });
        }

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let frame = show_canvas(ui, &self.session, &self.settings_style, self.dark_mode);
            self.canvas_rect = Some(frame.rect);
            clicked = frame.clicked;
        });

        if let Some(id) = clicked {
            if !self.session.is_dragging() {
                self.session.remove_placement(id);
            }
        }

        self.resolve_drag(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_survives_release_frame() {
        let mut last = None;
        let pos = egui::pos2(320.0, 240.0);
        assert_eq!(track_pointer(Some(pos), &mut last), Some(pos));
        // Pointer gone on release: the cached position is still used.
        assert_eq!(track_pointer(None, &mut last), Some(pos));

        let moved = egui::pos2(10.0, 20.0);
        assert_eq!(track_pointer(Some(moved), &mut last), Some(moved));
    }

    #[test]
    fn test_tab_ignored_while_typing() {
        assert!(toggles_catalog(true, false, false));
        assert!(!toggles_catalog(true, true, false));
        assert!(!toggles_catalog(true, false, true));
        assert!(!toggles_catalog(false, false, false));
    }
}
