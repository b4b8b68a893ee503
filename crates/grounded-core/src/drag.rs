//! Drag-and-drop state machine for moving catalog cards onto the canvas.
//!
//! The dragged plant travels as an explicit [`DragPayload`] inside the state,
//! so a drop never depends on ambient toolkit state.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::placement::{CanvasRect, PlacementId, PlacementState};
use crate::plant::PlantId;

/// Data carried by an in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub plant_id: PlantId,
}

/// Drag lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// A catalog card is being dragged outside the canvas.
    Dragging(DragPayload),
    /// The drag is hovering the canvas and a drop will be accepted.
    OverCanvas(DragPayload),
}

/// Result of releasing a drag.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Placed(PlacementId),
    /// The payload did not resolve against the catalog; nothing changed.
    UnknownPlant(PlantId),
    /// No drag was in progress.
    NoDrag,
    /// The canvas had no area.
    DegenerateCanvas,
    /// Released away from the canvas; the drag was cancelled.
    OutsideCanvas,
}

impl DropOutcome {
    pub fn placed(&self) -> Option<PlacementId> {
        match self {
            DropOutcome::Placed(id) => Some(*id),
            _ => None,
        }
    }
}

/// Owns the current [`DragState`] and applies transitions.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    clamp_drops: bool,
}

impl DragController {
    pub fn new(clamp_drops: bool) -> Self {
        Self {
            state: DragState::Idle,
            clamp_drops,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn is_over_canvas(&self) -> bool {
        matches!(self.state, DragState::OverCanvas(_))
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(p) | DragState::OverCanvas(p) => Some(p),
        }
    }

    /// Start dragging a catalog card. Replaces any drag already in flight.
    pub fn begin(&mut self, plant_id: PlantId) {
        self.state = DragState::Dragging(DragPayload { plant_id });
    }

    /// Pointer crossed into the canvas.
    pub fn enter_canvas(&mut self) {
        if let DragState::Dragging(payload) = &self.state {
            self.state = DragState::OverCanvas(payload.clone());
        }
    }

    /// Pointer left the canvas while still dragging.
    pub fn leave_canvas(&mut self) {
        if let DragState::OverCanvas(payload) = &self.state {
            self.state = DragState::Dragging(payload.clone());
        }
    }

    /// Abort the drag, or release it outside the canvas.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Release the drag over the canvas at a pointer position.
    ///
    /// Always returns to [`DragState::Idle`].
    pub fn drop_on_canvas(
        &mut self,
        pointer: (f32, f32),
        canvas: CanvasRect,
        catalog: &Catalog,
        placements: &mut PlacementState,
    ) -> DropOutcome {
        let payload = match std::mem::take(&mut self.state) {
            DragState::Idle => return DropOutcome::NoDrag,
            DragState::Dragging(p) | DragState::OverCanvas(p) => p,
        };

        let Some(plant) = catalog.get(&payload.plant_id) else {
            return DropOutcome::UnknownPlant(payload.plant_id);
        };

        let Some(mut position) = canvas.normalize(pointer.0, pointer.1) else {
            return DropOutcome::DegenerateCanvas;
        };
        if self.clamp_drops {
            position = position.clamped();
        }

        DropOutcome::Placed(placements.place(plant.clone(), position))
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(true)
    }
}
