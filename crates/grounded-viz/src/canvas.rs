//! The design canvas: drop target and placed-plant rendering.

use egui::{Rect, RichText, Sense, Ui, Vec2};
use grounded_core::{DesignSession, PlacementId};

use crate::render::{
    canvas_fill, placed_radius, placement_center, resolve_placed_visuals, PlacedRenderContext,
};
use crate::settings::SettingsStyle;
use crate::ui::{draw_canvas_placeholder, draw_drop_highlight, draw_placed_plant};

/// What the canvas reported back for this frame.
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame {
    /// Screen rect of the drop area.
    pub rect: Rect,
    /// Placed plant clicked for removal.
    pub clicked: Option<PlacementId>,
}

pub fn show_canvas(
    ui: &mut Ui,
    session: &DesignSession,
    style: &SettingsStyle,
    dark_mode: bool,
) -> CanvasFrame {
    ui.horizontal(|ui| {
        ui.heading("Design Canvas");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let count = session.placements().len();
            let text = match count {
                0 => "empty".to_string(),
                1 => "1 plant".to_string(),
                n => format!("{} plants", n),
            };
            ui.label(RichText::new(text).weak());
        });
    });
    ui.add_space(4.0);

    let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, canvas_fill(dark_mode));

    if session.placements().is_empty() {
        draw_canvas_placeholder(&painter, rect, dark_mode);
    }

    let scale = session.placement_scale();
    let dragging = session.is_dragging();
    let mut clicked = None;

    for placed in session.placements().iter() {
        let center = placement_center(rect, placed.position);
        let radius = placed_radius(style.plant_radius, scale);
        let hit_rect = Rect::from_center_size(center, Vec2::splat(radius * 2.0));

        let mut response = ui.interact(
            hit_rect,
            egui::Id::new(("placed_plant", placed.id.0)),
            Sense::click(),
        );
        if !dragging {
            response = response
                .on_hover_text(format!("{}: click to remove", placed.plant.name))
                .on_hover_cursor(egui::CursorIcon::PointingHand);
        }

        let visuals = resolve_placed_visuals(PlacedRenderContext {
            canvas: rect,
            position: placed.position,
            category: &placed.plant.category,
            sunlight: placed.plant.sunlight,
            base_radius: style.plant_radius,
            scale,
            hovered: response.hovered() && !dragging,
            dark_mode,
        });
        let label = style.show_labels.then_some(placed.plant.name.as_str());
        draw_placed_plant(&painter, &visuals, label, dark_mode);

        if response.clicked() {
            clicked = Some(placed.id);
        }
    }

    if style.highlight_drop_target && session.is_over_canvas() {
        draw_drop_highlight(&painter, rect, dark_mode);
    }

    CanvasFrame { rect, clicked }
}
