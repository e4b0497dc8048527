//! Duck Shooter - a shoot-the-duck arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, hit tests, game state)
//! - `app`: Fixed timestep driver that maps host events to game actions
//! - `renderer`: Scene tessellation and the WebGPU pipeline
//! - `platform`: Host abstraction (desktop window, headless recorder)
//! - `settings`: Variant selection and tunable runtime options

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::{Settings, Variant};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default simulation rate (the classic 16 ms timer)
    pub const DEFAULT_TICK_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame delta is clamped to this before it reaches the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default window size in pixels
    pub const DEFAULT_WIDTH: u32 = 960;
    pub const DEFAULT_HEIGHT: u32 = 540;

    /// Player starts with this many lives
    pub const START_LIVES: u32 = 3;
    /// Ducks in the opening wave
    pub const START_WAVE_SIZE: usize = 4;
    /// Simultaneous duck cap for later waves
    pub const MAX_WAVE_SIZE: usize = 12;
    /// Points per duck shot down
    pub const SCORE_PER_HIT: u32 = 10;

    /// Duck radius range (hitbox and draw size)
    pub const DUCK_RADIUS_MIN: f32 = 14.0;
    pub const DUCK_RADIUS_MAX: f32 = 22.0;
    /// Ducks enter this far outside the side edges
    pub const SPAWN_SIDE_OFFSET: f32 = 40.0;
    /// Vertical spawn band (game space, bottom-left origin)
    pub const SPAWN_Y_MIN: f32 = 40.0;
    pub const SPAWN_Y_MAX: f32 = 140.0;
    /// Base speed range before wave scaling (pixels/s)
    pub const SPEED_MIN: f32 = 120.0;
    pub const SPEED_MAX: f32 = 210.0;
    /// Launch angle range (radians above horizontal)
    pub const ANGLE_MIN: f32 = 0.25;
    pub const ANGLE_MAX: f32 = 0.6;

    /// Ducks turn around once this far past a side edge
    pub const BOUNCE_MARGIN: f32 = 60.0;
    /// Ducks escape once this far above the top edge
    pub const ESCAPE_MARGIN: f32 = 40.0;
    /// Hitbox scale relative to the drawn radius
    pub const HITBOX_SCALE: f32 = 1.0;

    /// Cosmetic bobbing: per-tick vertical nudge and its angular frequency
    pub const BOB_STEP: f32 = 0.3;
    pub const BOB_FREQUENCY: f32 = 2.0;

    /// Decorative sun controls
    pub const SUN_ROTATE_STEP_DEG: f32 = 15.0;
    pub const SUN_SCALE_STEP: f32 = 0.1;
    pub const SUN_SCALE_MIN: f32 = 0.5;
    pub const SUN_SCALE_MAX: f32 = 2.5;

    /// Scenery bands (heights in pixels from the bottom)
    pub const GROUND_HEIGHT: f32 = 80.0;
    pub const WATER_TOP: f32 = 110.0;

    /// Where the window goes when leaving fullscreen
    pub const WINDOWED_POSITION: (i32, i32) = (100, 100);
}

/// Flip a window-relative point (origin top-left) into game space (origin bottom-left)
#[inline]
pub fn window_to_game(x: f32, y: f32, height: f32) -> Vec2 {
    Vec2::new(x, height - y)
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}
