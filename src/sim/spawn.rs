//! Duck spawner
//!
//! Ducks enter just outside the left or right edge, low in the sky, and fly
//! up and across. Speed scales with the wave number.

use glam::Vec2;
use rand::Rng;

use super::state::{Duck, GameState};
use crate::consts::*;

/// Wave-scaled speed multiplier
#[inline]
pub fn speed_scale(wave: u32) -> f32 {
    0.6 + 0.1 * wave as f32
}

/// Ducks spawned when `wave` begins through progression
#[inline]
pub fn wave_size(wave: u32) -> usize {
    (3 + wave as usize).min(MAX_WAVE_SIZE)
}

/// Spawn one duck with randomized size, side, height and heading
pub fn spawn_duck(state: &mut GameState) {
    let id = state.next_entity_id();
    let rng = &mut state.rng;

    let radius = rng.random_range(DUCK_RADIUS_MIN..=DUCK_RADIUS_MAX);
    let from_left = rng.random_bool(0.5);
    let x = if from_left {
        -SPAWN_SIDE_OFFSET
    } else {
        state.width + SPAWN_SIDE_OFFSET
    };
    let y = rng.random_range(SPAWN_Y_MIN..=SPAWN_Y_MAX);

    let speed = rng.random_range(SPEED_MIN..=SPEED_MAX) * speed_scale(state.wave);
    let angle = rng.random_range(ANGLE_MIN..=ANGLE_MAX);
    let dir = if from_left { 1.0 } else { -1.0 };

    state.ducks.push(Duck {
        id,
        pos: Vec2::new(x, y),
        vel: Vec2::new(angle.cos() * speed * dir, angle.sin() * speed),
        radius,
        alive: true,
    });
}

/// Spawn `n` ducks
pub fn spawn_wave(state: &mut GameState, n: usize) {
    for _ in 0..n {
        spawn_duck(state);
    }
}

/// Advance to the next wave: bump the counter, drop the cleared ducks, spawn the batch
pub fn advance_wave(state: &mut GameState) -> usize {
    state.wave += 1;
    let count = wave_size(state.wave);
    state.ducks.clear();
    spawn_wave(state, count);
    count
}
