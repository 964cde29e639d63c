//! User preferences, stored as JSON in the platform config directory.

use calccore::storage::{self, config_dir, StorageError};
use calccore::CalcTheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Window width in logical points
    pub window_width: f32,
    /// Window height in logical points
    pub window_height: f32,
    /// Font size of the result line
    pub display_font_size: f32,
    /// Font size of the expression trail
    pub trail_font_size: f32,
    /// Font size of the key labels
    pub button_font_size: f32,
    /// Lighten keys under the pointer
    pub hover_effects: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            window_width: 350.0,
            window_height: 550.0,
            display_font_size: 32.0,
            trail_font_size: 12.0,
            button_font_size: 16.0,
            hover_effects: true,
        }
    }
}

impl CalcConfig {
    pub fn default_path() -> PathBuf {
        config_dir("calcpro").join("config.json")
    }

    /// Load from `path`, falling back to defaults.
    ///
    /// A missing file is normal (first run). Anything else that goes wrong
    /// is logged and the defaults are used.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<Self>(path) {
            Ok(config) => config.sanitized(),
            Err(StorageError::NotFound(_)) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(self, path)
    }

    /// Replace sizes that are not positive and finite with their defaults.
    fn sanitized(self) -> Self {
        let defaults = Self::default();
        let fix = |name: &str, value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                warn!(field = name, value, "invalid size in config, using default");
                fallback
            }
        };
        Self {
            window_width: fix("window_width", self.window_width, defaults.window_width),
            window_height: fix("window_height", self.window_height, defaults.window_height),
            display_font_size: fix("display_font_size", self.display_font_size, defaults.display_font_size),
            trail_font_size: fix("trail_font_size", self.trail_font_size, defaults.trail_font_size),
            button_font_size: fix("button_font_size", self.button_font_size, defaults.button_font_size),
            hover_effects: self.hover_effects,
        }
    }

    pub fn theme(&self) -> CalcTheme {
        CalcTheme {
            font_size_display: self.display_font_size,
            font_size_trail: self.trail_font_size,
            font_size_button: self.button_font_size,
            ..CalcTheme::default()
        }
    }
}
