//! A single design session: everything one open canvas screen owns.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::drag::{DragController, DragState, DropOutcome};
use crate::filter::{filter_catalog, ActiveFilters, FilterCategory};
use crate::growth::GrowthYear;
use crate::placement::{CanvasRect, PlacedPlant, PlacementId, PlacementState};
use crate::plant::{Plant, PlantId};

/// Startup options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Clamp drop positions into the canvas.
    pub clamp_drops: bool,
    /// Initial slider value.
    pub growth_year: GrowthYear,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            clamp_drops: true,
            growth_year: GrowthYear::default(),
        }
    }
}

/// Owned state of one design canvas screen.
#[derive(Debug, Clone)]
pub struct DesignSession {
    catalog: Catalog,
    search: String,
    filters: ActiveFilters,
    growth_year: GrowthYear,
    placements: PlacementState,
    drag: DragController,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

impl DesignSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_settings(catalog, SessionSettings::default())
    }

    pub fn with_settings(catalog: Catalog, settings: SessionSettings) -> Self {
        info!(
            plants = catalog.len(),
            clamp_drops = settings.clamp_drops,
            growth_year = settings.growth_year.get(),
            "Design session started"
        );
        Self {
            catalog,
            search: String::new(),
            filters: ActiveFilters::new(),
            growth_year: settings.growth_year,
            placements: PlacementState::new(),
            drag: DragController::new(settings.clamp_drops),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -------------------------------------------------------------------------
    // Search & filters
    // -------------------------------------------------------------------------

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Mutable access for text widgets that edit the search in place.
    pub fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn toggle_filter(&mut self, category: FilterCategory, value: &str) -> bool {
        let active = self.filters.toggle(category, value);
        debug!(%category, value, active, "Toggled filter");
        active
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search.clear();
    }

    /// Catalog entries that pass the current search and filters.
    pub fn filtered_plants(&self) -> Vec<&Plant> {
        filter_catalog(&self.catalog, &self.search, &self.filters)
    }

    // -------------------------------------------------------------------------
    // Growth projection
    // -------------------------------------------------------------------------

    pub fn growth_year(&self) -> GrowthYear {
        self.growth_year
    }

    pub fn set_growth_year(&mut self, year: GrowthYear) {
        self.growth_year = year;
    }

    /// Scale applied to every placed plant.
    pub fn placement_scale(&self) -> f32 {
        self.growth_year.scale()
    }

    // -------------------------------------------------------------------------
    // Drag & drop
    // -------------------------------------------------------------------------

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// True while a drag hovers the canvas and a drop would be accepted.
    pub fn is_over_canvas(&self) -> bool {
        self.drag.is_over_canvas()
    }

    /// The plant currently being dragged, if it resolves against the catalog.
    pub fn dragged_plant(&self) -> Option<&Plant> {
        self.drag
            .payload()
            .and_then(|payload| self.catalog.get(&payload.plant_id))
    }

    pub fn begin_drag(&mut self, plant_id: PlantId) {
        debug!(plant_id = %plant_id, "Drag started");
        self.drag.begin(plant_id);
    }

    /// Report whether the pointer is over the canvas during a drag.
    pub fn update_drag_hover(&mut self, over_canvas: bool) {
        if over_canvas {
            self.drag.enter_canvas();
        } else {
            self.drag.leave_canvas();
        }
    }

    pub fn cancel_drag(&mut self) {
        if self.drag.is_dragging() {
            debug!("Drag cancelled");
        }
        self.drag.cancel();
    }

    /// Release the current drag over the canvas.
    pub fn drop_on_canvas(&mut self, pointer: (f32, f32), canvas: CanvasRect) -> DropOutcome {
        let outcome =
            self.drag
                .drop_on_canvas(pointer, canvas, &self.catalog, &mut self.placements);
        match &outcome {
            DropOutcome::Placed(id) => {
                if let Some(placed) = self.placements.get(*id) {
                    info!(
                        placement = %id,
                        plant = %placed.plant.name,
                        x = placed.position.x,
                        y = placed.position.y,
                        "Placed plant"
                    );
                }
            }
            DropOutcome::UnknownPlant(plant_id) => {
                debug!(plant_id = %plant_id, "Ignored drop of unknown plant");
            }
            DropOutcome::DegenerateCanvas => {
                debug!(?canvas, "Ignored drop on zero-sized canvas");
            }
            DropOutcome::NoDrag | DropOutcome::OutsideCanvas => {}
        }
        outcome
    }

    /// Release the current drag wherever the pointer ended up.
    ///
    /// Drops when the pointer lies inside the canvas, edges included.
    /// Anywhere else, or with no known pointer, the drag is cancelled and the
    /// placements are left alone.
    pub fn release(&mut self, pointer: Option<(f32, f32)>, canvas: CanvasRect) -> DropOutcome {
        if !self.drag.is_dragging() {
            return DropOutcome::NoDrag;
        }
        match pointer {
            Some((x, y)) if canvas.contains(x, y) => self.drop_on_canvas((x, y), canvas),
            _ => {
                debug!(?pointer, "Drag released outside the canvas");
                self.drag.cancel();
                DropOutcome::OutsideCanvas
            }
        }
    }

    // -------------------------------------------------------------------------
    // Placements
    // -------------------------------------------------------------------------

    pub fn placements(&self) -> &PlacementState {
        &self.placements
    }

    /// Remove a placed plant. Unknown ids are ignored.
    pub fn remove_placement(&mut self, id: PlacementId) -> Option<PlacedPlant> {
        let removed = self.placements.remove(id);
        if let Some(placed) = &removed {
            info!(placement = %id, plant = %placed.plant.name, "Removed plant");
        }
        removed
    }
}
