//! Particle value type.

use driftfall_core::{AnimationSpeed, Viewport};
use rand::Rng;
use ratatui::style::Color;

use crate::color::random_rgb;
use crate::easing::Easing;

/// Smallest radius, as a fraction of viewport width.
pub const RADIUS_MIN_FRACTION: f32 = 0.001;
/// Largest radius, as a fraction of viewport width.
pub const RADIUS_MAX_FRACTION: f32 = 0.005;

/// Shortest loop duration in seconds.
pub const MIN_DURATION_SECS: f32 = 3.0;
/// Longest loop duration in seconds (exclusive).
pub const MAX_DURATION_SECS: f32 = 5.0;

/// One animated circle.
///
/// A particle is a plain value: it knows its start position, its targets and
/// its timing, and can report where it sits at a given elapsed time. Painting
/// lives separately in [`crate::field`], so all of this is testable with no
/// terminal attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Start x position.
    pub x: f32,
    /// Start y position.
    pub y: f32,
    /// Circle radius.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
    /// Loop duration in seconds, before the global speed scale.
    pub duration_secs: f32,
    /// Horizontal animation target.
    pub target_x: f32,
    /// Random vertical target. Stored for every particle but not consulted
    /// by the vertical animation, which always runs to the viewport floor.
    pub target_y: f32,
    /// Snapshot of the viewport the particle was created against.
    pub viewport: Viewport,
    /// Seed for glyph selection within the size class.
    pub glyph_seed: usize,
}

impl Particle {
    /// Spawn a particle at the given position, drawing color, duration and
    /// targets from the supplied randomness source.
    pub fn spawn(x: f32, y: f32, radius: f32, viewport: Viewport, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            radius,
            color: random_rgb(rng),
            duration_secs: rng.gen_range(MIN_DURATION_SECS..MAX_DURATION_SECS),
            target_x: rng.gen_range(0.0..viewport.width),
            target_y: rng.gen_range(0.0..viewport.height),
            viewport,
            glyph_seed: rng.gen_range(0..256),
        }
    }

    /// Position of the particle `elapsed_secs` after its generation was
    /// built.
    ///
    /// The motion loops indefinitely: each cycle runs from the start position
    /// to `(target_x, viewport.height)` and snaps back. Horizontal motion is
    /// linear; vertical motion follows [`Easing::FALL`].
    pub fn position_at(&self, elapsed_secs: f32, speed: AnimationSpeed) -> (f32, f32) {
        let duration = self.duration_secs * speed.duration_scale();
        let phase = (elapsed_secs / duration).fract();
        let x = lerp(self.x, self.target_x, Easing::Linear.sample(phase));
        let y = lerp(self.y, self.viewport.height, Easing::FALL.sample(phase));
        (x, y)
    }

    /// Size class (0 = small, 1 = medium, 2 = large) relative to the largest
    /// radius possible for the originating viewport.
    pub fn size_class(&self) -> u8 {
        let max_radius = self.viewport.width * RADIUS_MAX_FRACTION;
        let t = (self.radius / max_radius).clamp(0.0, 1.0);
        if t < 0.45 {
            0
        } else if t < 0.75 {
            1
        } else {
            2
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn spawn_one(rng: &mut StdRng) -> Particle {
        let viewport = Viewport::new(800.0, 600.0);
        Particle::spawn(400.0, 300.0, 2.0, viewport, rng)
    }

    #[test]
    fn test_spawn_parameter_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let p = spawn_one(&mut rng);
            assert!(p.duration_secs >= MIN_DURATION_SECS && p.duration_secs < MAX_DURATION_SECS);
            assert!(p.target_x >= 0.0 && p.target_x < 800.0);
            assert!(p.target_y >= 0.0 && p.target_y < 600.0);
            assert!(matches!(p.color, Color::Rgb(_, _, _)));
        }
    }

    #[test]
    fn test_position_starts_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = spawn_one(&mut rng);
        assert_eq!(p.position_at(0.0, AnimationSpeed::Normal), (400.0, 300.0));
    }

    #[test]
    fn test_position_approaches_target_and_floor() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = spawn_one(&mut rng);
        let almost = p.duration_secs * 0.999;
        let (x, y) = p.position_at(almost, AnimationSpeed::Normal);
        assert!((x - p.target_x).abs() < 0.5);
        // The cycle ends on the floor, not at the stored vertical target.
        assert!((y - 600.0).abs() < 1.0);
    }

    #[test]
    fn test_position_wraps_each_cycle() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = spawn_one(&mut rng);
        let (x, y) = p.position_at(p.duration_secs, AnimationSpeed::Normal);
        assert_eq!((x, y), (400.0, 300.0));
    }

    #[test]
    fn test_speed_scale_stretches_the_cycle() {
        let mut rng = StdRng::seed_from_u64(4);
        let p = spawn_one(&mut rng);
        let normal = p.position_at(1.0, AnimationSpeed::Normal);
        let slow = p.position_at(1.6, AnimationSpeed::Slow);
        assert!((normal.0 - slow.0).abs() < 1e-3);
        assert!((normal.1 - slow.1).abs() < 1e-3);
    }

    #[test]
    fn test_size_class_buckets() {
        let viewport = Viewport::new(1000.0, 500.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::spawn(500.0, 250.0, 1.5, viewport, &mut rng);
        assert_eq!(p.size_class(), 0);
        p.radius = 3.0;
        assert_eq!(p.size_class(), 1);
        p.radius = 4.5;
        assert_eq!(p.size_class(), 2);
    }
}
