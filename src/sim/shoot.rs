//! Shooting: point-vs-circle hit test over the living ducks

use glam::Vec2;

use super::state::{GameEvent, GameState};
use crate::consts::SCORE_PER_HIT;

/// What a single shot did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotOutcome {
    /// Ducks brought down by this shot
    pub hits: u32,
    /// False when the shot was ignored (game over)
    pub fired: bool,
}

impl ShotOutcome {
    pub fn is_miss(&self) -> bool {
        self.fired && self.hits == 0
    }
}

/// Fire at `point` (game space). Every living duck under the point goes down.
pub fn shoot_at(state: &mut GameState, point: Vec2) -> ShotOutcome {
    if state.game_over {
        return ShotOutcome::default();
    }

    let mut hits = 0;
    for duck in state.ducks.iter_mut().filter(|d| d.alive) {
        if duck.contains(point) {
            duck.alive = false;
            hits += 1;
        }
    }

    if hits > 0 {
        state.score += hits * SCORE_PER_HIT;
        state.events.push(GameEvent::DucksShot { count: hits });
    } else {
        state.misses += 1;
        state.events.push(GameEvent::Missed);
    }

    ShotOutcome { hits, fired: true }
}
