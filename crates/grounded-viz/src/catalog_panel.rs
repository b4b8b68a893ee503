//! Plant catalog side panel: search, filter chips, growth slider and the
//! draggable plant cards.

use egui::{RichText, Ui};
use grounded_core::{
    DesignSession, FilterCategory, GrowthYear, Plant, PlantId, Sunlight, Water, LOW_MAINTENANCE,
    PET_SAFE,
};

/// Render the catalog panel. Returns the plant whose card started a drag this
/// frame, if any.
pub fn show_catalog_panel(ui: &mut Ui, session: &mut DesignSession) -> Option<PlantId> {
    ui.heading("Plant Catalog");
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::singleline(session.search_mut())
            .hint_text("Search plants...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui_filters(ui, session);
    ui.separator();
    ui_growth(ui, session);
    ui.separator();

    // Cards are cloned so the session can be mutated after the loop.
    let plants: Vec<Plant> = session.filtered_plants().into_iter().cloned().collect();
    let mut drag_started = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if plants.is_empty() {
                ui.label(RichText::new("No plants match the current filters").weak());
                if ui.button("Clear filters").clicked() {
                    session.clear_filters();
                }
                return;
            }

            for plant in &plants {
                if plant_card(ui, plant) {
                    drag_started = Some(plant.id.clone());
                }
                ui.add_space(4.0);
            }
        });

    drag_started
}

fn ui_filters(ui: &mut Ui, session: &mut DesignSession) {
    let sunlight: Vec<(&str, &str)> = Sunlight::ALL
        .iter()
        .map(|s| (s.as_str(), s.as_str()))
        .collect();
    filter_group(ui, session, FilterCategory::Sunlight, &sunlight);

    let water: Vec<(&str, &str)> = Water::ALL.iter().map(|w| (w.as_str(), w.as_str())).collect();
    filter_group(ui, session, FilterCategory::Water, &water);

    filter_group(
        ui,
        session,
        FilterCategory::Features,
        &[("Pet Safe", PET_SAFE), ("Low Maintenance", LOW_MAINTENANCE)],
    );
}

/// One labelled row of toggle chips. `options` pairs a label with its value.
fn filter_group(
    ui: &mut Ui,
    session: &mut DesignSession,
    category: FilterCategory,
    options: &[(&str, &str)],
) {
    ui.label(RichText::new(category.label()).strong());
    ui.horizontal_wrapped(|ui| {
        for (label, value) in options {
            let active = session.filters().is_active(category, value);
            if ui.selectable_label(active, *label).clicked() {
                session.toggle_filter(category, value);
            }
        }
    });
    ui.add_space(2.0);
}

fn ui_growth(ui: &mut Ui, session: &mut DesignSession) {
    ui.label(RichText::new("Growth Projection").strong());
    ui.horizontal(|ui| {
        let mut year = session.growth_year().get();
        let slider = egui::Slider::new(&mut year, GrowthYear::MIN..=GrowthYear::MAX)
            .show_value(false);
        if ui.add(slider).changed() {
            session.set_growth_year(GrowthYear::saturating(year as i64));
        }
        ui.label(session.growth_year().to_string());
    });
}

/// Draw a plant card and report whether a drag started on it.
fn plant_card(ui: &mut Ui, plant: &Plant) -> bool {
    let frame = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(&plant.name).strong());
        ui.label(RichText::new(&plant.scientific_name).italics().weak());
        let tag_bg = ui.visuals().widgets.inactive.bg_fill;
        ui.horizontal_wrapped(|ui| {
            for tag in plant.tags() {
                ui.label(RichText::new(tag).small().background_color(tag_bg));
            }
        });
        ui.label(RichText::new(&plant.description).small());
    });

    let response = ui
        .interact(
            frame.response.rect,
            egui::Id::new(("plant_card", plant.id.as_str())),
            egui::Sense::drag(),
        )
        .on_hover_cursor(egui::CursorIcon::Grab);

    response.drag_started()
}
