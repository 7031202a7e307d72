//! Rendering module
//!
//! The core only needs two raster operations, so drawing goes through the
//! small `Surface` trait. The browser build backs it with a Canvas 2D
//! context; headless runs and tests record the calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::sim::SimState;

/// Opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `rgb(0, 0, 200)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 200)
    }
}

/// 2D raster target addressed in pixels, origin at top-left
pub trait Surface {
    /// Clear the region `(0, 0, width, height)`
    fn clear(&mut self, width: f32, height: f32);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// Redraw the whole frame: one clear, then one fill per active rectangle in
/// array order. Returns the number of rectangles drawn.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, state: &SimState, color: Color) -> usize {
    surface.clear(state.bounds.x, state.bounds.y);
    for rect in &state.rects {
        surface.fill_rect(rect.x(), rect.y(), rect.width(), rect.height(), color);
    }
    state.rects.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLLISION_LIMIT;
    use crate::scene::Scene;
    use glam::Vec2;

    #[test]
    fn test_css_string() {
        assert_eq!(Color::default().to_css(), "rgb(0, 0, 200)");
    }

    #[test]
    fn test_draw_clears_then_fills_in_order() {
        let state = Scene::classic()
            .into_state(Vec2::new(800.0, 600.0), COLLISION_LIMIT)
            .unwrap();
        let mut surface = RecordingSurface::default();
        let color = Color::rgb(1, 2, 3);

        let drawn = draw(&mut surface, &state, color);

        assert_eq!(drawn, 3);
        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Clear {
                    width: 800.0,
                    height: 600.0
                },
                DrawCommand::Fill {
                    x: 10.0,
                    y: 10.0,
                    width: 50.0,
                    height: 50.0,
                    color
                },
                DrawCommand::Fill {
                    x: 400.0,
                    y: 300.0,
                    width: 50.0,
                    height: 50.0,
                    color
                },
                DrawCommand::Fill {
                    x: 200.0,
                    y: 150.0,
                    width: 50.0,
                    height: 50.0,
                    color
                },
            ]
        );
    }

    #[test]
    fn test_draw_empty_still_clears() {
        let state = Scene::default()
            .into_state(Vec2::new(100.0, 100.0), COLLISION_LIMIT)
            .unwrap();
        let mut surface = RecordingSurface::default();
        assert_eq!(draw(&mut surface, &state, Color::default()), 0);
        assert_eq!(surface.frames(), 1);
        assert_eq!(surface.commands.len(), 1);
    }
}
