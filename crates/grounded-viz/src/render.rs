//! Placement rendering helpers: canvas geometry and colors.

use egui::{Color32, Pos2, Rect, Stroke};
use grounded_core::{CanvasRect, Position, Sunlight};

#[derive(Debug, Clone, Copy)]
pub struct PlacedVisuals {
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Stroke,
    pub label_size: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PlacedRenderContext<'a> {
    pub canvas: Rect,
    pub position: Position,
    pub category: &'a str,
    pub sunlight: Sunlight,
    pub base_radius: f32,
    pub scale: f32,
    pub hovered: bool,
    pub dark_mode: bool,
}

/// Convert an egui rect into the core's canvas bounds.
pub fn canvas_bounds(rect: Rect) -> CanvasRect {
    CanvasRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Screen position of a normalized placement.
pub fn placement_center(canvas: Rect, position: Position) -> Pos2 {
    let (x, y) = canvas_bounds(canvas).to_pointer(position);
    Pos2::new(x, y)
}

pub fn placed_radius(base_radius: f32, scale: f32) -> f32 {
    (base_radius * scale).max(4.0)
}

pub fn resolve_placed_visuals(ctx: PlacedRenderContext<'_>) -> PlacedVisuals {
    let radius = placed_radius(ctx.base_radius, ctx.scale);
    let fill = category_color(ctx.category, ctx.dark_mode);

    let stroke = if ctx.hovered {
        Stroke::new(3.0, removal_color(ctx.dark_mode))
    } else {
        Stroke::new(2.0, sunlight_color(ctx.sunlight, ctx.dark_mode))
    };

    PlacedVisuals {
        center: placement_center(ctx.canvas, ctx.position),
        radius,
        fill,
        stroke,
        label_size: (13.0 * ctx.scale).clamp(9.0, 14.0),
    }
}

pub fn category_color(category: &str, dark_mode: bool) -> Color32 {
    let key = category.to_ascii_lowercase();
    match key.as_str() {
        "perennial" => {
            if dark_mode {
                Color32::from_rgb(120, 200, 120)
            } else {
                Color32::from_rgb(70, 150, 70)
            }
        }
        "shrub" => {
            if dark_mode {
                Color32::from_rgb(220, 110, 140)
            } else {
                Color32::from_rgb(180, 60, 100)
            }
        }
        "tree" => {
            if dark_mode {
                Color32::from_rgb(230, 120, 60)
            } else {
                Color32::from_rgb(190, 80, 30)
            }
        }
        "succulent" => {
            if dark_mode {
                Color32::from_rgb(130, 200, 190)
            } else {
                Color32::from_rgb(60, 150, 140)
            }
        }
        _ => {
            if dark_mode {
                Color32::from_rgb(150, 170, 130)
            } else {
                Color32::from_rgb(100, 120, 80)
            }
        }
    }
}

pub fn sunlight_color(sunlight: Sunlight, dark_mode: bool) -> Color32 {
    match sunlight {
        Sunlight::Full => {
            if dark_mode {
                Color32::from_rgb(255, 210, 80)
            } else {
                Color32::from_rgb(210, 160, 20)
            }
        }
        Sunlight::Partial => {
            if dark_mode {
                Color32::from_rgb(200, 190, 150)
            } else {
                Color32::from_rgb(150, 140, 100)
            }
        }
        Sunlight::Shade => {
            if dark_mode {
                Color32::from_rgb(110, 130, 170)
            } else {
                Color32::from_rgb(70, 90, 130)
            }
        }
    }
}

pub fn canvas_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(28, 38, 30)
    } else {
        Color32::from_rgb(236, 244, 230)
    }
}

pub fn drop_target_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(120, 220, 140)
    } else {
        Color32::from_rgb(40, 150, 70)
    }
}

fn removal_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(255, 90, 90)
    } else {
        Color32::from_rgb(200, 40, 40)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 40.0), egui::vec2(800.0, 400.0))
    }

    #[test]
    fn test_placement_center_maps_percentages() {
        let center = placement_center(canvas(), Position::new(30.0, 70.0));
        assert!((center.x - 340.0).abs() < 1e-3);
        assert!((center.y - 320.0).abs() < 1e-3);
    }

    #[test]
    fn test_canvas_bounds_round_trip() {
        let bounds = canvas_bounds(canvas());
        let pos = bounds.normalize(500.0, 240.0).unwrap();
        assert!((pos.x - 50.0).abs() < 1e-3);
        assert!((pos.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_radius_follows_growth_scale() {
        assert_eq!(placed_radius(20.0, 1.0), 20.0);
        assert!((placed_radius(20.0, 0.525) - 10.5).abs() < 1e-4);
        assert_eq!(placed_radius(2.0, 0.5), 4.0);
    }

    #[test]
    fn test_hover_uses_removal_stroke() {
        let base = PlacedRenderContext {
            canvas: canvas(),
            position: Position::new(50.0, 50.0),
            category: "Tree",
            sunlight: Sunlight::Partial,
            base_radius: 28.0,
            scale: 1.0,
            hovered: false,
            dark_mode: true,
        };
        let idle = resolve_placed_visuals(base);
        let hovered = resolve_placed_visuals(PlacedRenderContext {
            hovered: true,
            ..base
        });
        assert_eq!(idle.fill, hovered.fill);
        assert_ne!(idle.stroke, hovered.stroke);
        assert_eq!(hovered.stroke.color, removal_color(true));
    }
}
