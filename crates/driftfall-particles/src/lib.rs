//! Particle animation for the driftfall terminal canvas.
//!
//! This crate provides the particle value type, random set generation, the
//! timing curves that drive the looping drift-and-fall motion, and the
//! rendering path that paints a generation onto a frame. Particles are plain
//! values; nothing here mutates shared state outside of an explicit rebuild.

mod chars;
mod color;
mod easing;
mod field;
mod particle;

pub use color::random_rgb;
pub use easing::Easing;
pub use field::{ParticleField, build_set, paint_lines};
pub use particle::{
    MAX_DURATION_SECS, MIN_DURATION_SECS, Particle, RADIUS_MAX_FRACTION, RADIUS_MIN_FRACTION,
};
