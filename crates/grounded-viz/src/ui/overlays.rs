//! Overlay rendering for the canvas: placeholder, drop highlight, drag ghost
//! and placed plants.

use crate::render::{drop_target_color, PlacedVisuals};

/// Draw the empty-canvas hint.
pub fn draw_canvas_placeholder(painter: &egui::Painter, rect: egui::Rect, dark_mode: bool) {
    let color = if dark_mode {
        egui::Color32::from_rgb(140, 160, 140)
    } else {
        egui::Color32::from_rgb(110, 130, 110)
    };

    painter.text(
        rect.center() - egui::vec2(0.0, 18.0),
        egui::Align2::CENTER_CENTER,
        "✿",
        egui::FontId::proportional(36.0),
        color,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        "Drag plants here to start designing",
        egui::FontId::proportional(15.0),
        color,
    );
}

/// Outline the canvas while a drag hovers it.
pub fn draw_drop_highlight(painter: &egui::Painter, rect: egui::Rect, dark_mode: bool) {
    let color = drop_target_color(dark_mode);
    painter.rect_filled(rect, 6.0, color.linear_multiply(0.08));
    painter.rect_stroke(
        rect.shrink(1.0),
        6.0,
        egui::Stroke::new(2.5, color),
        egui::StrokeKind::Inside,
    );
}

/// Draw one placed plant and, optionally, its name below it.
pub fn draw_placed_plant(
    painter: &egui::Painter,
    visuals: &PlacedVisuals,
    label: Option<&str>,
    dark_mode: bool,
) {
    painter.circle_filled(visuals.center, visuals.radius, visuals.fill);
    painter.circle_stroke(visuals.center, visuals.radius, visuals.stroke);
    painter.text(
        visuals.center,
        egui::Align2::CENTER_CENTER,
        "✿",
        egui::FontId::proportional(visuals.radius),
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
    );

    if let Some(label) = label {
        let text_color = if dark_mode {
            egui::Color32::from_rgb(230, 230, 220)
        } else {
            egui::Color32::from_rgb(30, 40, 30)
        };
        painter.text(
            visuals.center + egui::vec2(0.0, visuals.radius + 4.0),
            egui::Align2::CENTER_TOP,
            label,
            egui::FontId::proportional(visuals.label_size),
            text_color,
        );
    }
}

/// Draw the floating card that follows the pointer during a drag.
pub fn draw_drag_ghost(ctx: &egui::Context, pointer: egui::Pos2, name: &str, over_canvas: bool) {
    egui::Area::new(egui::Id::new("drag_ghost"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pointer + egui::vec2(14.0, 14.0))
        .interactable(false)
        .movable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180))
                .corner_radius(4.0)
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("✿ {}", name))
                                .color(egui::Color32::from_rgb(180, 240, 180))
                                .strong(),
                        );
                        if !over_canvas {
                            ui.label(
                                egui::RichText::new("  drop on canvas")
                                    .color(egui::Color32::GRAY)
                                    .small(),
                            );
                        }
                    });
                });
        });
}
