//! Game settings and variant selection
//!
//! Loaded from an optional JSON file, then overridden from the command line.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_TICK_HZ, DEFAULT_WIDTH};

/// Game variants, each adding features on top of the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Sky, ground, water and ducks
    Classic,
    /// Hills, clouds, reeds, fullscreen toggle and bobbing ducks
    Scenery,
    /// Scenery geometry built once per window size
    Buffered,
    /// Adds the decorative sun
    #[default]
    Sunny,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Classic,
        Variant::Scenery,
        Variant::Buffered,
        Variant::Sunny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Scenery => "scenery",
            Variant::Buffered => "buffered",
            Variant::Sunny => "sunny",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "1" => Some(Variant::Classic),
            "scenery" | "2" => Some(Variant::Scenery),
            "buffered" | "vbo" | "3" => Some(Variant::Buffered),
            "sunny" | "sun" | "4" => Some(Variant::Sunny),
            _ => None,
        }
    }

    /// Hills, clouds and reeds behind the water
    pub fn scenery(&self) -> bool {
        !matches!(self, Variant::Classic)
    }

    /// F toggles fullscreen
    pub fn fullscreen_toggle(&self) -> bool {
        !matches!(self, Variant::Classic)
    }

    /// Ducks bob up and down while flying
    pub fn bobbing(&self) -> bool {
        !matches!(self, Variant::Classic)
    }

    /// Reuse static scenery geometry between frames
    pub fn cached_scenery(&self) -> bool {
        matches!(self, Variant::Buffered | Variant::Sunny)
    }

    /// Decorative sun with rotate/scale controls
    pub fn sun(&self) -> bool {
        matches!(self, Variant::Sunny)
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    /// Initial window size in pixels
    pub width: u32,
    pub height: u32,
    /// Simulation rate in ticks per second
    pub tick_hz: u32,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
    /// Show an FPS counter in the HUD
    pub show_fps: bool,
    /// Start in fullscreen (only where the variant supports it)
    pub start_fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_hz: DEFAULT_TICK_HZ,
            seed: None,
            show_fps: false,
            start_fullscreen: false,
        }
    }
}

impl Settings {
    /// Create settings for a variant with everything else defaulted
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the game loop cannot run with
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.width > 0 && self.height > 0, "window size must be non-zero");
        anyhow::ensure!(
            (1..=1000).contains(&self.tick_hz),
            "tick_hz must be between 1 and 1000, got {}",
            self.tick_hz
        );
        Ok(())
    }

    /// Fixed simulation step in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    /// Fullscreen at startup, honoured only by variants with the toggle
    pub fn effective_start_fullscreen(&self) -> bool {
        self.start_fullscreen && self.variant.fullscreen_toggle()
    }

    /// Window title for the current variant
    pub fn title(&self) -> String {
        format!("Duck Shooter ({})", self.variant.as_str())
    }
}
