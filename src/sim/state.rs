//! Simulation state
//!
//! Everything the tick reads and writes. The scheduler owns one of these and
//! threads it through every tick; there is no global state.

use glam::Vec2;

use super::rect::Rectangle;

/// Active rectangle set plus the fixed parameters of the run
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    /// Active rectangles, in insertion order (survivors keep relative order)
    pub rects: Vec<Rectangle>,
    /// Viewport size; walls sit at 0 and at these coordinates
    pub bounds: Vec2,
    /// Rectangles are retired once their collision count reaches this
    pub collision_limit: u32,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

impl SimState {
    /// Build a state from already-validated rectangles.
    ///
    /// Use `Scene::into_state` for untrusted input.
    pub fn new(rects: Vec<Rectangle>, bounds: Vec2, collision_limit: u32) -> Self {
        Self {
            rects,
            bounds,
            collision_limit,
            time_ticks: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Find an active rectangle by id
    pub fn get(&self, id: u32) -> Option<&Rectangle> {
        self.rects.iter().find(|r| r.id == id)
    }
}
