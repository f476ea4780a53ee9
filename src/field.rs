use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dot::Dot;
use crate::error::Error;
use crate::geometry::{Bounds, Point};
use crate::options::Options;
use crate::surface::Surface;

/// Delay between two dots appearing while the field fills up.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(300);

/// Paces the staggered population of empty slots.
#[derive(Clone, Debug)]
struct Spawner {
    next_slot: usize,
    due: Instant,
}

/// A set of wandering dots joined by lines when they come close, and pushed
/// away from the pointer.
///
/// The host drives the field: `populate` on every timer tick, `on_frame` on
/// every repaint, and the `on_resize`/`on_pointer_*` methods as events arrive.
/// None of these may run concurrently with `configure`.
#[derive(Debug)]
pub struct Field {
    options: Options,
    dots: Vec<Option<Dot>>,
    bounds: Bounds,
    pointer: Option<Point>,
    spawner: Option<Spawner>,
    running: bool,
    rng: StdRng,
}

impl Field {
    pub fn new(bounds: Bounds) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: Bounds, rng: StdRng) -> Self {
        let options = Options::default();
        Field {
            dots: vec![None; options.dot_count],
            options,
            bounds,
            pointer: None,
            spawner: None,
            running: false,
            rng,
        }
    }

    /// Applies new options. Replaces every slot with an empty one and cancels
    /// any population in progress.
    pub fn configure(&mut self, options: Options) -> Result<(), Error> {
        options.validate()?;
        self.dots = vec![None; options.dot_count];
        self.spawner = None;
        self.options = options;
        Ok(())
    }

    /// Starts frame processing and the staggered population of all slots.
    /// The first dot is due at `now`.
    pub fn start(&mut self, bounds: Bounds, now: Instant) {
        self.bounds = bounds;
        self.dots = vec![None; self.options.dot_count];
        self.spawner = Some(Spawner {
            next_slot: 0,
            due: now,
        });
        self.running = true;
    }

    /// Halts population and frame processing. Dots keep their state.
    pub fn stop(&mut self) {
        self.spawner = None;
        self.running = false;
    }

    /// Restarts frame processing after `stop` without clearing any dot.
    /// Population picks up at the first empty slot, due at `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.running {
            return;
        }
        let next_slot = first_empty(&self.dots, 0);
        if next_slot < self.dots.len() {
            self.spawner = Some(Spawner {
                next_slot,
                due: now,
            });
        }
        self.running = true;
    }

    /// Fills the next empty slot if the spawn interval has elapsed.
    /// Returns whether a dot was created.
    pub fn populate(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let spawner = match self.spawner.as_mut() {
            Some(spawner) => spawner,
            None => return false,
        };
        if now < spawner.due {
            return false;
        }

        let slot = first_empty(&self.dots, spawner.next_slot);
        if slot >= self.dots.len() {
            self.spawner = None;
            return false;
        }

        let dot = Dot::spawn(self.bounds, &self.options.params(), &mut self.rng);
        self.dots[slot] = Some(dot);
        spawner.next_slot = first_empty(&self.dots, slot + 1);
        spawner.due = now + SPAWN_INTERVAL;

        if spawner.next_slot >= self.dots.len() {
            self.spawner = None;
        }
        true
    }

    /// Places `dot` into slot `index`, taking on the field's bounds.
    /// Out of range indices are ignored.
    pub fn set_dot(&mut self, index: usize, mut dot: Dot) {
        if let Some(slot) = self.dots.get_mut(index) {
            dot.bounds = self.bounds;
            *slot = Some(dot);
        }
    }

    pub fn on_resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        for dot in self.dots.iter_mut().flatten() {
            dot.bounds = bounds;
        }
    }

    pub fn on_pointer_move(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// Moves and draws every dot once.
    ///
    /// Each dot is first pushed away from the pointer, then advanced, then
    /// drawn together with its lines to the dots before it, which have
    /// already moved this frame. Every close pair is joined exactly once.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !self.running {
            return;
        }

        let params = self.options.params();
        for i in 0..self.dots.len() {
            let dot = match self.dots[i].as_mut() {
                Some(dot) => dot,
                None => continue,
            };
            if let Some(pointer) = self.pointer {
                dot.repel(pointer, params.dot_distance);
            }
            dot.advance(&params, &mut self.rng);

            let (before, rest) = self.dots.split_at(i);
            if let Some(dot) = &rest[0] {
                dot.render(surface, self.options.dot_color, params.dot_distance, before);
            }
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn dots(&self) -> &[Option<Dot>] {
        &self.dots
    }

    pub fn capacity(&self) -> usize {
        self.dots.len()
    }

    pub fn populated(&self) -> usize {
        self.dots.iter().flatten().count()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_populating(&self) -> bool {
        self.spawner.is_some()
    }
}

fn first_empty(dots: &[Option<Dot>], from: usize) -> usize {
    (from..dots.len())
        .find(|&i| dots[i].is_none())
        .unwrap_or_else(|| dots.len())
}
