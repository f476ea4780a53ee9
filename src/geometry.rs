//! Plane geometry for the dot field.
//!
//! Headings are integer degrees where 0 points up and angles grow clockwise,
//! matching a surface whose y axis grows downwards.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Extent of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Bounds { width, height }
    }

    /// Whether `point` lies inside the bounds inflated by `margin` on every side.
    /// The edges of the inflated box count as inside.
    pub fn contains_with_margin(&self, point: Point, margin: f32) -> bool {
        point.x >= -margin
            && point.y >= -margin
            && point.x <= self.width + margin
            && point.y <= self.height + margin
    }
}

pub fn distance_between(p1: Point, p2: Point) -> f32 {
    let dx = (p2.x - p1.x) as f64;
    let dy = (p2.y - p1.y) as f64;
    (dx * dx + dy * dy).sqrt() as f32
}

/// Heading rotated so that 0 degrees points up, in radians.
fn screen_radians(angle: i32) -> f64 {
    ((angle - 90).rem_euclid(360) as f64).to_radians()
}

pub fn step_x(from_x: f32, delta: f32, angle: i32) -> f32 {
    from_x + delta * screen_radians(angle).cos() as f32
}

pub fn step_y(from_y: f32, delta: f32, angle: i32) -> f32 {
    from_y + delta * screen_radians(angle).sin() as f32
}

pub fn step(from: Point, delta: f32, angle: i32) -> Point {
    Point::new(step_x(from.x, delta, angle), step_y(from.y, delta, angle))
}

/// Integer heading from `from` towards `to`, in `[0, 360)`.
pub fn bearing(from: Point, to: Point) -> i32 {
    let dx = (to.x - from.x) as f64;
    let dy = (from.y - to.y) as f64;
    let degrees = dx.atan2(dy).to_degrees();
    ((degrees + 360.0) % 360.0) as i32
}
