//! A field of drifting dots that link up with fading lines when they pass
//! close to each other and scatter away from the pointer.
//!
//! The crate only simulates and issues draw calls; the host supplies a
//! [`Surface`], a repaint cadence, the surface size and the pointer position.
//!
//! ```ignore
//! use connected_dots::{Bounds, Field, Options};
//!
//! let mut field = Field::new(Bounds::new(800.0, 600.0));
//! field.configure(Options { dot_count: 70, ..Options::default() })?;
//! field.start(field.bounds(), Instant::now());
//!
//! // on every timer tick
//! field.populate(Instant::now());
//! // on every repaint
//! field.on_frame(&mut surface);
//! ```

pub mod dot;
pub mod error;
pub mod field;
pub mod geometry;
pub mod options;
pub mod surface;
#[doc(hidden)]
pub mod testing;

pub use dot::{Dot, DotParams};
pub use error::Error;
pub use field::Field;
pub use geometry::{Bounds, Point};
pub use options::Options;
pub use surface::{Rect, Rgb, Rgba, Surface};
