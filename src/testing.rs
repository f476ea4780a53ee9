//! Helpers for inspecting what the field draws.

use crate::geometry::Point;
use crate::surface::{Rect, Rgba, Surface};

/// A surface that remembers every call.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub lines: Vec<(Point, Point, Rgba)>,
    pub ellipses: Vec<(Rect, Rgba)>,
}

impl Surface for Recorder {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, _width: f32) {
        self.lines.push((from, to, color));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Rgba) {
        self.ellipses.push((rect, color));
    }
}
