//! Color utilities for particle rendering.

use rand::Rng;
use ratatui::style::Color;

/// Generate a fill color with three independently drawn channels.
pub fn random_rgb(rng: &mut impl Rng) -> Color {
    Color::Rgb(
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}
