//! Core domain model for the Grounded landscape design canvas.
//!
//! Everything here is UI-agnostic: the plant catalog, search and filter chips,
//! the placement list, the growth projection and the drag-and-drop state
//! machine. [`DesignSession`] bundles them into the state one canvas owns.

pub mod catalog;
pub mod drag;
pub mod error;
pub mod filter;
pub mod growth;
pub mod placement;
pub mod plant;
pub mod session;

pub use catalog::Catalog;
pub use drag::{DragController, DragPayload, DragState, DropOutcome};
pub use error::{CoreError, CoreResult};
pub use filter::{filter_catalog, matches_search, ActiveFilters, FilterCategory};
pub use growth::{growth_scale, GrowthYear};
pub use placement::{CanvasRect, PlacedPlant, PlacementId, PlacementState, Position};
pub use plant::{Plant, PlantId, Sunlight, Water, LOW_MAINTENANCE, PET_SAFE};
pub use session::{DesignSession, SessionSettings};
