use rand::Rng;

use crate::geometry::{self, Bounds, Point};
use crate::surface::{Rect, Rgb, Surface};

/// How far past the bounds a dot may drift before it is respawned.
pub const MARGIN: f32 = 20.0;
/// Dot diameters are drawn as integers from this range.
pub const SIZE_RANGE: std::ops::Range<u32> = 1..13;

const LINE_WIDTH: f32 = 0.5;
const LINE_ALPHA: i32 = 50;
const DOT_ALPHA: u8 = 200;

/// The field-wide values a dot needs to move and draw itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotParams {
    pub dot_distance: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub position: Point,
    /// Heading in degrees, 0 is up.
    pub angle: i32,
    pub speed: f32,
    pub size: f32,
    pub bounds: Bounds,
}

impl Dot {
    pub fn new(position: Point, angle: i32, speed: f32, size: f32, bounds: Bounds) -> Self {
        Dot {
            position,
            angle,
            speed,
            size,
            bounds,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(bounds: Bounds, params: &DotParams, rng: &mut R) -> Self {
        let mut dot = Dot::new(Point::default(), 0, 0.0, 0.0, bounds);
        dot.reset(params, rng);
        dot
    }

    /// Redraws heading, speed, size and position inside the current bounds.
    pub fn reset<R: Rng + ?Sized>(&mut self, params: &DotParams, rng: &mut R) {
        self.angle = rng.gen_range(0..360);
        self.speed = params.min_speed + rng.gen::<f32>() * (params.max_speed - params.min_speed);
        // float rounding may land exactly on the upper end
        if self.speed >= params.max_speed && params.max_speed > params.min_speed {
            self.speed = params.min_speed;
        }
        self.size = rng.gen_range(SIZE_RANGE) as f32;
        self.position = Point::new(
            coordinate(self.bounds.width, rng),
            coordinate(self.bounds.height, rng),
        );
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, params: &DotParams, rng: &mut R) {
        self.position = geometry::step(self.position, self.speed, self.angle);

        if !self.bounds.contains_with_margin(self.position, MARGIN) {
            self.reset(params, rng);
        }
    }

    /// Pushes the dot out to the edge of the pointer's reach.
    pub fn repel(&mut self, pointer: Point, dot_distance: f32) {
        let distance = geometry::distance_between(pointer, self.position);
        if distance < dot_distance {
            let angle = geometry::bearing(pointer, self.position);
            self.position = geometry::step(self.position, dot_distance - distance, angle);
        }
    }

    /// Draws a fading line to every close peer, then the dot itself.
    ///
    /// Peers at exactly this dot's position (including the dot itself) are skipped.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        color: Rgb,
        dot_distance: f32,
        peers: &[Option<Dot>],
    ) {
        for peer in peers.iter().flatten() {
            if peer.position == self.position {
                continue;
            }

            let distance = geometry::distance_between(self.position, peer.position);
            if distance < dot_distance {
                let fade = ((distance / dot_distance) * LINE_ALPHA as f32) as i32;
                let alpha = (LINE_ALPHA - fade).clamp(0, LINE_ALPHA) as u8;
                surface.draw_line(
                    self.position,
                    peer.position,
                    color.with_alpha(alpha),
                    LINE_WIDTH,
                );
            }
        }

        surface.fill_ellipse(
            Rect::centered(self.position, self.size, self.size),
            color.with_alpha(DOT_ALPHA),
        );
    }
}

fn coordinate<R: Rng + ?Sized>(extent: f32, rng: &mut R) -> f32 {
    if extent >= 1.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PARAMS: DotParams = DotParams {
        dot_distance: 100.0,
        min_speed: 0.1,
        max_speed: 1.1,
    };

    fn assert_fresh(dot: &Dot, params: &DotParams) {
        assert!(dot.position.x >= 0.0 && dot.position.x < dot.bounds.width);
        assert!(dot.position.y >= 0.0 && dot.position.y < dot.bounds.height);
        assert!(dot.size >= 1.0 && dot.size < 13.0);
        assert_eq!(dot.size.fract(), 0.0);
        assert!(dot.speed >= params.min_speed && dot.speed < params.max_speed);
        assert!(dot.angle >= 0 && dot.angle < 360);
    }

    #[test]
    fn test_reset_postconditions() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(320.0, 240.0);
        for _ in 0..500 {
            let dot = Dot::spawn(bounds, &PARAMS, &mut rng);
            assert_fresh(&dot, &PARAMS);
        }
    }

    #[test]
    fn test_equal_speed_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = DotParams {
            min_speed: 1.0,
            max_speed: 1.0,
            ..PARAMS
        };
        let dot = Dot::spawn(Bounds::new(10.0, 10.0), &params, &mut rng);
        assert_eq!(dot.speed, 1.0);
    }

    #[test]
    fn test_degenerate_bounds_place_at_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let dot = Dot::spawn(Bounds::new(0.0, 0.0), &PARAMS, &mut rng);
        assert_eq!(dot.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_advance_stays_in_margin_box() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = Bounds::new(80.0, 60.0);
        let params = DotParams {
            min_speed: 2.0,
            max_speed: 6.0,
            ..PARAMS
        };
        let mut dot = Dot::spawn(bounds, &params, &mut rng);
        for _ in 0..5000 {
            let before = dot.clone();
            dot.advance(&params, &mut rng);
            assert!(bounds.contains_with_margin(dot.position, MARGIN));

            let stepped = geometry::step(before.position, before.speed, before.angle);
            if !bounds.contains_with_margin(stepped, MARGIN) {
                assert_fresh(&dot, &params);
            }
        }
    }

    #[test]
    fn test_advance_moves_along_heading() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut dot = Dot::new(Point::new(50.0, 50.0), 90, 2.0, 4.0, Bounds::new(100.0, 100.0));
        dot.advance(&PARAMS, &mut rng);
        assert!((dot.position.x - 52.0).abs() < 1e-4);
        assert!((dot.position.y - 50.0).abs() < 1e-4);
        assert_eq!(dot.angle, 90);
    }

    #[test]
    fn test_repel_pushes_to_edge_of_reach() {
        let mut dot = Dot::new(Point::new(30.0, 0.0), 0, 0.0, 4.0, Bounds::new(200.0, 200.0));
        dot.repel(Point::new(0.0, 0.0), 100.0);
        assert!((dot.position.x - 100.0).abs() < 1e-3);
        assert!(dot.position.y.abs() < 1e-3);

        // already at the edge, out of reach
        dot.repel(Point::new(0.0, 0.0), 100.0);
        assert_eq!(dot.position, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_render_line_alpha() {
        let a = Dot::new(Point::new(0.0, 0.0), 0, 0.0, 4.0, Bounds::new(100.0, 100.0));
        let b = Dot::new(Point::new(30.0, 40.0), 0, 0.0, 6.0, Bounds::new(100.0, 100.0));
        let mut recorder = Recorder::default();

        a.render(&mut recorder, Rgb(1, 2, 3), 100.0, &[Some(a.clone()), None, Some(b.clone())]);

        assert_eq!(recorder.lines.len(), 1);
        let (from, to, color) = recorder.lines[0];
        assert_eq!(from, a.position);
        assert_eq!(to, b.position);
        // distance 50 of 100
        assert_eq!(color.a, 25);
        assert_eq!((color.r, color.g, color.b), (1, 2, 3));

        assert_eq!(recorder.ellipses.len(), 1);
        let (rect, color) = recorder.ellipses[0];
        assert_eq!(rect, Rect { x: -2.0, y: -2.0, width: 4.0, height: 4.0 });
        assert_eq!(color.a, 200);
    }

    #[test]
    fn test_render_skips_far_peers() {
        let a = Dot::new(Point::new(0.0, 0.0), 0, 0.0, 4.0, Bounds::new(200.0, 200.0));
        let b = Dot::new(Point::new(100.0, 0.0), 0, 0.0, 4.0, Bounds::new(200.0, 200.0));
        let mut recorder = Recorder::default();
        a.render(&mut recorder, Rgb(0, 0, 0), 100.0, &[Some(b)]);
        assert!(recorder.lines.is_empty());
        assert_eq!(recorder.ellipses.len(), 1);
    }

    #[test]
    fn test_render_connects_peer_sharing_one_coordinate() {
        let a = Dot::new(Point::new(10.0, 5.0), 0, 0.0, 4.0, Bounds::new(200.0, 200.0));
        let b = Dot::new(Point::new(10.0, 25.0), 0, 0.0, 4.0, Bounds::new(200.0, 200.0));
        let mut recorder = Recorder::default();
        a.render(&mut recorder, Rgb(0, 0, 0), 100.0, &[Some(b)]);
        assert_eq!(recorder.lines.len(), 1);
        assert_eq!(recorder.lines[0].2.a, 40);
    }
}
