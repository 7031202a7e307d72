//! Canvas 2D surface (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface};

/// Draws onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    /// Last fill style set, so unchanged colors skip the JS call
    fill_style: Option<Color>,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`; `None` if the browser refuses it
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            context,
            fill_style: None,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.context.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if self.fill_style != Some(color) {
            self.context.set_fill_style_str(&color.to_css());
            self.fill_style = Some(color);
        }
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }
}
