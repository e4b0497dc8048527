//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod shoot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use shoot::{ShotOutcome, shoot_at};
pub use spawn::{advance_wave, spawn_duck, spawn_wave, wave_size};
pub use state::{Duck, GameEvent, GameState, Sun};
pub use tick::tick;
