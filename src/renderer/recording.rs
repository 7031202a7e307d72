//! Surface that records draw calls instead of rasterizing them

use super::{Color, Surface};

/// A single recorded surface call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Fill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// Headless surface used by the native binary and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Number of frames drawn (one clear per frame)
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    /// Commands issued since the last clear, including that clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_frame() {
        let mut s = RecordingSurface::default();
        s.clear(10.0, 10.0);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Color::default());
        s.clear(10.0, 10.0);
        s.fill_rect(2.0, 2.0, 1.0, 1.0, Color::default());

        assert_eq!(s.frames(), 2);
        assert_eq!(s.last_frame().len(), 2);
        assert!(matches!(s.last_frame()[1], DrawCommand::Fill { x, .. } if x == 2.0));

        s.reset();
        assert!(s.last_frame().is_empty());
    }
}
