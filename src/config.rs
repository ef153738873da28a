//! User configuration
//!
//! Loaded from `<config dir>/anime-presenter/config.toml`. Every field has a
//! default, so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
}

/// Playback loop tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Render passes after a seek before pausing again
    pub redraw_passes: u32,
    /// Delay after each render pass, in milliseconds
    pub frame_wait_ms: u64,
    /// Frame rate of the terminal preview clock
    pub preview_fps: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            redraw_passes: 6,
            frame_wait_ms: 16,
            preview_fps: 25.0,
        }
    }
}

impl PlayerConfig {
    pub fn frame_wait(&self) -> Duration {
        Duration::from_millis(self.frame_wait_ms)
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("anime-presenter").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        let fps = config.player.preview_fps;
        if !fps.is_finite() || fps <= 0.0 {
            anyhow::bail!("player.preview_fps must be a positive finite number, got {}", fps);
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
