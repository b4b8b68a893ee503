//! UI components for the design canvas.
//!
//! This module contains rendering functions for overlays and widgets.

mod overlays;

pub use overlays::{draw_canvas_placeholder, draw_drag_ghost, draw_drop_highlight, draw_placed_plant};
