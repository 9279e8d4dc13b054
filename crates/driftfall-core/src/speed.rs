//! Global animation speed setting.

use serde::{Deserialize, Serialize};

/// Animation speed selected in the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to particle loop durations.
    pub fn duration_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 1.6,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 0.6,
        }
    }
}
