//! Fixed timestep simulation tick
//!
//! Core game loop that advances the flock, applies the side bounce and escape
//! rules, and rolls over to the next wave once the sky is clear.

use super::spawn::advance_wave;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, dt: f32) {
    // Don't tick if paused or game over
    if state.paused || state.game_over {
        return;
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    let left_limit = -BOUNCE_MARGIN;
    let right_limit = state.width + BOUNCE_MARGIN;
    let escape_y = state.height + ESCAPE_MARGIN;

    for duck in state.ducks.iter_mut().filter(|d| d.alive) {
        duck.pos += duck.vel * dt;

        if state.bobbing {
            duck.pos.y += (state.elapsed * BOB_FREQUENCY + duck.bob_phase()).sin() * BOB_STEP;
        }

        // Turn around only while still heading outward
        if duck.pos.x < left_limit && duck.vel.x < 0.0 {
            duck.vel.x = -duck.vel.x;
        }
        if duck.pos.x > right_limit && duck.vel.x > 0.0 {
            duck.vel.x = -duck.vel.x;
        }

        if duck.pos.y > escape_y {
            duck.alive = false;
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::DuckEscaped {
                id: duck.id,
                lives_left: state.lives,
            });

            if state.lives == 0 && !state.game_over {
                state.game_over = true;
                state.events.push(GameEvent::GameOver { score: state.score });
            }
        }
    }

    if !state.game_over && state.alive_count() == 0 {
        let ducks = advance_wave(state);
        state.events.push(GameEvent::WaveStarted {
            wave: state.wave,
            ducks,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Duck;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn lone_duck(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(12345, 960.0, 540.0);
        state.ducks.clear();
        state.drain_events();
        let id = state.next_entity_id();
        state.ducks.push(Duck {
            id,
            pos,
            vel,
            radius: 18.0,
            alive: true,
        });
        state
    }

    #[test]
    fn test_tick_integrates_velocity() {
        let mut state = lone_duck(Vec2::new(100.0, 100.0), Vec2::new(60.0, 30.0));
        tick(&mut state, DT);
        let duck = &state.ducks[0];
        assert!((duck.pos.x - 101.0).abs() < 1e-4);
        assert!((duck.pos.y - 100.5).abs() < 1e-4);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = lone_duck(Vec2::new(100.0, 100.0), Vec2::new(60.0, 30.0));
        state.toggle_pause();
        tick(&mut state, DT);
        assert_eq!(state.ducks[0].pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.time_ticks, 0);

        state.toggle_pause();
        tick(&mut state, DT);
        assert!(state.ducks[0].pos.x > 100.0);
    }

    #[test]
    fn test_bounce_left_wall() {
        let mut state = lone_duck(Vec2::new(-59.0, 100.0), Vec2::new(-120.0, 10.0));
        tick(&mut state, DT);
        assert!(state.ducks[0].vel.x > 0.0);

        // Already heading back in: no second flip
        tick(&mut state, DT);
        assert!(state.ducks[0].vel.x > 0.0);
    }

    #[test]
    fn test_bounce_right_wall() {
        let mut state = lone_duck(Vec2::new(1019.0, 100.0), Vec2::new(120.0, 10.0));
        tick(&mut state, DT);
        assert!(state.ducks[0].vel.x < 0.0);
    }

    #[test]
    fn test_no_bounce_when_moving_inward() {
        // Fresh spawn outside the right edge flying left keeps its heading
        let mut state = lone_duck(Vec2::new(1030.0, 100.0), Vec2::new(-150.0, 10.0));
        tick(&mut state, DT);
        assert!(state.ducks[0].vel.x < 0.0);
    }

    #[test]
    fn test_escape_costs_one_life_once() {
        let mut state = lone_duck(Vec2::new(400.0, 579.0), Vec2::new(0.0, 120.0));
        // Keep the wave from clearing so the same duck list is observed
        let id = state.next_entity_id();
        state.ducks.push(Duck {
            id,
            pos: Vec2::new(200.0, 100.0),
            vel: Vec2::ZERO,
            radius: 18.0,
            alive: true,
        });

        tick(&mut state, DT);
        assert!(!state.ducks[0].alive);
        assert_eq!(state.lives, START_LIVES - 1);

        for _ in 0..10 {
            tick(&mut state, DT);
        }
        assert_eq!(state.lives, START_LIVES - 1);
        assert!(
            state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::DuckEscaped { .. }))
                .count()
                == 1
        );
    }

    #[test]
    fn test_last_life_ends_game_and_freezes() {
        let mut state = lone_duck(Vec2::new(400.0, 579.0), Vec2::new(0.0, 120.0));
        state.lives = 1;
        tick(&mut state, DT);
        assert!(state.game_over);
        assert_eq!(state.lives, 0);

        // No wave rollover while game over
        let wave = state.wave;
        let ticks = state.time_ticks;
        for _ in 0..30 {
            tick(&mut state, DT);
        }
        assert_eq!(state.wave, wave);
        assert_eq!(state.alive_count(), 0);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_game_over_freezes_ducks() {
        let mut state = lone_duck(Vec2::new(400.0, 200.0), Vec2::new(50.0, 50.0));
        state.game_over = true;
        let before = state.ducks[0].pos;
        tick(&mut state, DT);
        assert_eq!(state.ducks[0].pos, before);
    }

    #[test]
    fn test_lives_never_underflow() {
        let mut state = lone_duck(Vec2::new(400.0, 579.0), Vec2::new(0.0, 120.0));
        let id = state.next_entity_id();
        state.ducks.push(Duck {
            id,
            pos: Vec2::new(500.0, 579.0),
            vel: Vec2::new(0.0, 120.0),
            radius: 18.0,
            alive: true,
        });
        state.lives = 1;
        tick(&mut state, DT);
        assert_eq!(state.lives, 0);
        assert!(state.game_over);
    }

    #[test]
    fn test_cleared_wave_rolls_over() {
        let mut state = GameState::new(77, 960.0, 540.0);
        for duck in &mut state.ducks {
            duck.alive = false;
        }
        state.drain_events();

        tick(&mut state, DT);
        assert_eq!(state.wave, 2);
        assert_eq!(state.alive_count(), 5);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::WaveStarted { wave: 2, ducks: 5 }]
        );
    }

    #[test]
    fn test_bobbing_keeps_velocity() {
        let mut state = lone_duck(Vec2::new(100.0, 100.0), Vec2::new(60.0, 30.0));
        state.bobbing = true;
        for _ in 0..20 {
            tick(&mut state, DT);
        }
        assert_eq!(state.ducks[0].vel, Vec2::new(60.0, 30.0));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, 960.0, 540.0);
        let mut state2 = GameState::new(99999, 960.0, 540.0);
        state1.bobbing = true;
        state2.bobbing = true;

        for _ in 0..600 {
            tick(&mut state1, DT);
            tick(&mut state2, DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.wave, state2.wave);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.ducks, state2.ducks);
    }
}
