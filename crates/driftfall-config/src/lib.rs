//! Configuration loading for the driftfall animation.
//!
//! Settings live in a TOML file under the platform config directory. A
//! missing or unreadable file falls back to the defaults, so the binary
//! always starts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use driftfall_core::AnimationSpeed;
use serde::{Deserialize, Serialize};

/// Number of particles per generation when not configured.
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Render tick rate when not configured.
pub const DEFAULT_FPS: u32 = 30;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of particles per generation.
    pub particle_count: usize,
    /// Global animation speed.
    pub speed: AnimationSpeed,
    /// Render tick rate in frames per second.
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            speed: AnimationSpeed::default(),
            fps: DEFAULT_FPS,
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Returns the defaults if the file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load the configuration from a specific path.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save the configuration to a specific path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, content)
    }

    /// Default config file path, if a config directory exists on this
    /// platform.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "driftfall").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Interval between render ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.clamp(1, 240)))
    }
}
