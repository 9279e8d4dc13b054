//! Particle set building and frame rendering.

use driftfall_core::{AnimationSpeed, Viewport};
use rand::Rng;
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::CIRCLE_CHARS;
use crate::particle::{Particle, RADIUS_MAX_FRACTION, RADIUS_MIN_FRACTION};

/// Build a fresh particle set: `count` particles, all starting at the
/// viewport center, with parameters drawn independently per particle.
pub fn build_set(count: usize, viewport: Viewport, rng: &mut impl Rng) -> Vec<Particle> {
    let (center_x, center_y) = viewport.center();
    (0..count)
        .map(|_| {
            let radius = rng.gen_range(
                viewport.width * RADIUS_MIN_FRACTION..viewport.width * RADIUS_MAX_FRACTION,
            );
            Particle::spawn(center_x, center_y, radius, viewport, rng)
        })
        .collect()
}

/// Rasterize the particle set into one styled line per terminal row.
///
/// Particles are painted in sequence order; a later particle sharing a cell
/// with an earlier one overwrites it, so insertion order is paint order.
pub fn paint_lines(
    particles: &[Particle],
    viewport: Viewport,
    elapsed_ms: u64,
    speed: AnimationSpeed,
) -> Vec<Line<'static>> {
    let width = viewport.width as usize;
    let height = viewport.height as usize;
    let mut cells: Vec<Option<(char, Color)>> = vec![None; width * height];

    let elapsed_secs = elapsed_ms as f32 / 1000.0;
    for particle in particles {
        let (x, y) = particle.position_at(elapsed_secs, speed);
        let col = x.round() as isize;
        let row = y.round() as isize;
        if col < 0 || row < 0 || col >= width as isize || row >= height as isize {
            continue;
        }
        cells[row as usize * width + col as usize] = Some((glyph_for(particle), particle.color));
    }

    (0..height)
        .map(|row| {
            let spans: Vec<Span> = (0..width)
                .map(|col| match cells[row * width + col] {
                    Some((glyph, color)) => {
                        Span::styled(glyph.to_string(), Style::new().fg(color))
                    }
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Pick the circle glyph for a particle from its size class and seed.
fn glyph_for(particle: &Particle) -> char {
    let char_idx = match particle.size_class() {
        0 => particle.glyph_seed % 3,
        1 => 3 + particle.glyph_seed % 3,
        _ => 6 + particle.glyph_seed % 3,
    };
    CIRCLE_CHARS[char_idx % CIRCLE_CHARS.len()]
}

/// The current particle generation and its animation epoch.
#[derive(Debug)]
pub struct ParticleField {
    /// Particles of the current generation, in paint order.
    particles: Vec<Particle>,
    /// Viewport the generation was built against.
    viewport: Viewport,
    /// Number of particles per generation.
    count: usize,
    /// Global speed setting.
    speed: AnimationSpeed,
    /// Elapsed-time stamp at which the generation was built.
    epoch_ms: u64,
}

impl ParticleField {
    /// Create an empty field; the first `render` builds the initial set.
    pub fn new(count: usize, speed: AnimationSpeed) -> Self {
        Self {
            particles: Vec::new(),
            viewport: Viewport::default(),
            count,
            speed,
            epoch_ms: 0,
        }
    }

    /// Particles of the current generation, in paint order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Viewport of the current generation.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Discard the current generation and rebuild it against new dimensions.
    ///
    /// Every in-flight animation vanishes with its particle; the replacement
    /// generation starts at phase zero.
    pub fn resize(&mut self, viewport: Viewport, now_ms: u64, rng: &mut impl Rng) {
        self.viewport = viewport;
        self.epoch_ms = now_ms;
        self.particles = build_set(self.count, viewport, rng);
    }

    /// Paint the current generation onto the frame over a black backdrop.
    ///
    /// Rebuilds first when the frame area no longer matches the stored
    /// viewport (the first frame, or a resize the event loop did not see).
    pub fn render(&mut self, frame: &mut Frame, now_ms: u64, rng: &mut impl Rng) {
        let area = frame.area();
        let viewport = Viewport::from_cells(area.width, area.height);

        if self.particles.is_empty() || viewport != self.viewport {
            self.resize(viewport, now_ms, rng);
        }

        let elapsed_ms = now_ms.saturating_sub(self.epoch_ms);
        let lines = paint_lines(&self.particles, self.viewport, elapsed_ms, self.speed);
        frame.render_widget(
            Paragraph::new(lines).style(Style::new().bg(Color::Black)),
            area,
        );
    }
}
