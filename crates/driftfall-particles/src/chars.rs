//! Character constants for particle rendering.

/// Circle glyphs by size class: three small, three medium, three large.
pub const CIRCLE_CHARS: &[char] = &['·', '∙', '◦', '•', '○', '◎', '●', '⬤', '◉'];
