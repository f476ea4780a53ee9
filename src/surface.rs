//! The drawing primitives the field renders through.

use serde::Deserialize;

use crate::geometry::Point;

/// An opaque color, deserialized from an `[r, g, b]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.0,
            g: self.1,
            b: self.2,
            a,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Axis aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Rect {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Immediate-mode 2D target with alpha blending.
///
/// Implementations should treat degenerate geometry (zero-size ellipses,
/// zero-length lines) as a no-op rather than a failure.
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba, width: f32);

    fn fill_ellipse(&mut self, rect: Rect, color: Rgba);
}
