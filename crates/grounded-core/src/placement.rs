//! Plants placed on the design canvas.
//!
//! Positions are percentages of the canvas size so a design survives window
//! resizes unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plant::Plant;

/// Identifier of a placed plant, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacementId(pub u64);

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "placed-{}", self.0)
    }
}

/// Normalized canvas position, each axis a percentage of the canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into `[0, 100]`.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
        }
    }

    pub fn is_within_canvas(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// Rendered bounds of the canvas in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A canvas with no area cannot receive drops.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    /// Map a pointer position to percentage offsets within this rect.
    ///
    /// Returns `None` for a degenerate rect. The result is not clamped.
    pub fn normalize(&self, pointer_x: f32, pointer_y: f32) -> Option<Position> {
        if self.is_degenerate() {
            return None;
        }
        Some(Position {
            x: (pointer_x - self.left) / self.width * 100.0,
            y: (pointer_y - self.top) / self.height * 100.0,
        })
    }

    /// Inverse of [`CanvasRect::normalize`].
    pub fn to_pointer(&self, position: Position) -> (f32, f32) {
        (
            self.left + position.x / 100.0 * self.width,
            self.top + position.y / 100.0 * self.height,
        )
    }
}

/// A catalog plant placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlant {
    pub id: PlacementId,
    pub plant: Plant,
    pub position: Position,
}

/// Ordered list of placed plants. Later entries draw on top.
#[derive(Debug, Clone, Default)]
pub struct PlacementState {
    entries: Vec<PlacedPlant>,
    next_id: u64,
}

impl PlacementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a placement and return its freshly generated identifier.
    ///
    /// Identifiers come from a monotonic counter and are never reused, even
    /// after removal.
    pub fn place(&mut self, plant: Plant, position: Position) -> PlacementId {
        let id = PlacementId(self.next_id);
        self.next_id += 1;
        self.entries.push(PlacedPlant {
            id,
            plant,
            position,
        });
        id
    }

    /// Remove the entry with `id`, if any.
    pub fn remove(&mut self, id: PlacementId) -> Option<PlacedPlant> {
        let index = self.entries.iter().position(|p| p.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: PlacementId) -> Option<&PlacedPlant> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedPlant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn lavender() -> Plant {
        Catalog::seed().plants()[0].clone()
    }

    #[test]
    fn test_contains_includes_edges() {
        let rect = CanvasRect::new(100.0, 50.0, 800.0, 400.0);
        assert!(rect.contains(500.0, 250.0));
        assert!(rect.contains(100.0, 50.0));
        assert!(rect.contains(900.0, 450.0));
        assert!(!rect.contains(99.9, 250.0));
        assert!(!rect.contains(500.0, 450.1));
    }

    #[test]
    fn test_normalize_relative_position() {
        let rect = CanvasRect::new(100.0, 50.0, 800.0, 400.0);
        let pos = rect.normalize(100.0 + 0.3 * 800.0, 50.0 + 0.7 * 400.0).unwrap();
        assert!((pos.x - 30.0).abs() < 1e-3);
        assert!((pos.y - 70.0).abs() < 1e-3);

        let (px, py) = rect.to_pointer(pos);
        assert!((px - 340.0).abs() < 1e-3);
        assert!((py - 330.0).abs() < 1e-3);
    }

    #[test]
    fn test_normalize_degenerate_rect() {
        assert!(CanvasRect::new(0.0, 0.0, 0.0, 200.0).normalize(1.0, 1.0).is_none());
        assert!(CanvasRect::new(0.0, 0.0, 10.0, f32::NAN).is_degenerate());
    }

    #[test]
    fn test_position_clamp() {
        let pos = Position::new(-4.0, 104.5).clamped();
        assert_eq!(pos, Position::new(0.0, 100.0));
        assert!(pos.is_within_canvas());
        assert!(!Position::new(100.1, 50.0).is_within_canvas());
    }

    #[test]
    fn test_place_and_remove() {
        let mut state = PlacementState::new();
        let a = state.place(lavender(), Position::new(10.0, 10.0));
        let b = state.place(lavender(), Position::new(20.0, 20.0));
        assert_ne!(a, b);
        assert_eq!(state.len(), 2);

        let removed = state.remove(a).unwrap();
        assert_eq!(removed.id, a);
        assert_eq!(state.len(), 1);
        assert!(state.get(b).is_some());

        assert!(state.remove(a).is_none());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut state = PlacementState::new();
        let a = state.place(lavender(), Position::default());
        state.remove(a);
        let b = state.place(lavender(), Position::default());
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "placed-1");
    }
}
