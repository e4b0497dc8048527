//! Game state and core simulation types
//!
//! Everything the update step, the hit test and the renderer read lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::wrap_degrees;

/// Notable things that happened during a tick or an input action.
///
/// The driver drains these for logging; gameplay never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new wave was spawned
    WaveStarted { wave: u32, ducks: usize },
    /// A living duck left through the top edge
    DuckEscaped { id: u32, lives_left: u32 },
    /// One shot brought down this many ducks
    DucksShot { count: u32 },
    /// The shot hit nothing
    Missed,
    /// Lives reached zero
    GameOver { score: u32 },
}

/// A duck entity
#[derive(Debug, Clone, PartialEq)]
pub struct Duck {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Hitbox and draw radius
    pub radius: f32,
    pub alive: bool,
}

impl Duck {
    /// True when `point` lies inside the hitbox (boundary inclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let r = self.radius * HITBOX_SCALE;
        self.pos.distance_squared(point) <= r * r
    }

    /// +1 when flying right, -1 when flying left
    #[inline]
    pub fn facing(&self) -> f32 {
        if self.vel.x > 0.0 { 1.0 } else { -1.0 }
    }

    /// Stable per-duck phase offset for cosmetic bobbing
    #[inline]
    pub fn bob_phase(&self) -> f32 {
        self.id as f32
    }
}

/// Decorative sun. Purely cosmetic, survives restarts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    /// Rotation in degrees, kept in [0, 360)
    pub rotation_deg: f32,
    /// Size multiplier, kept in [SUN_SCALE_MIN, SUN_SCALE_MAX]
    pub scale: f32,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl Sun {
    /// Rotate by one fixed step
    pub fn rotate_step(&mut self) {
        self.rotation_deg = wrap_degrees(self.rotation_deg + SUN_ROTATE_STEP_DEG);
    }

    /// Change scale by `steps` increments (negative shrinks)
    pub fn adjust_scale(&mut self, steps: f32) {
        self.scale = (self.scale + steps * SUN_SCALE_STEP).clamp(SUN_SCALE_MIN, SUN_SCALE_MAX);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner randomness
    pub(crate) rng: Pcg32,
    /// Ducks of the current wave (dead ones stay until the wave clears)
    pub ducks: Vec<Duck>,
    pub score: u32,
    /// Shots that hit nothing
    pub misses: u32,
    pub lives: u32,
    /// Current wave (1-based)
    pub wave: u32,
    pub paused: bool,
    pub game_over: bool,
    /// Crosshair position in game space
    pub crosshair: Vec2,
    /// Arena size (matches the drawable size in pixels)
    pub width: f32,
    pub height: f32,
    /// Simulated seconds while running (drives bobbing)
    pub elapsed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Apply cosmetic bobbing in the update step
    pub bobbing: bool,
    pub sun: Sun,
    /// Pending events for the driver
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh game for an arena of the given size and spawn the opening wave
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ducks: Vec::with_capacity(MAX_WAVE_SIZE),
            score: 0,
            misses: 0,
            lives: START_LIVES,
            wave: 1,
            paused: false,
            game_over: false,
            crosshair: Vec2::new(width / 2.0, height / 2.0),
            width,
            height,
            elapsed: 0.0,
            time_ticks: 0,
            bobbing: false,
            sun: Sun::default(),
            events: Vec::new(),
            next_id: 1,
        };

        state.restart();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Clear the run: no ducks, score/misses zeroed, full lives, wave 1, unpaused
    pub fn reset(&mut self) {
        self.ducks.clear();
        self.score = 0;
        self.misses = 0;
        self.lives = START_LIVES;
        self.wave = 1;
        self.game_over = false;
        self.paused = false;
    }

    /// Reset and spawn the opening wave
    pub fn restart(&mut self) {
        self.reset();
        super::spawn::spawn_wave(self, START_WAVE_SIZE);
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave,
            ducks: START_WAVE_SIZE,
        });
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Track a new arena size (window resize or fullscreen switch)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Number of ducks still flying
    pub fn alive_count(&self) -> usize {
        self.ducks.iter().filter(|d| d.alive).count()
    }

    /// Take pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duck_at(x: f32, y: f32, radius: f32) -> Duck {
        Duck {
            id: 1,
            pos: Vec2::new(x, y),
            vel: Vec2::new(100.0, 50.0),
            radius,
            alive: true,
        }
    }

    #[test]
    fn test_new_game_spawns_opening_wave() {
        let state = GameState::new(7, 960.0, 540.0);
        assert_eq!(state.ducks.len(), START_WAVE_SIZE);
        assert_eq!(state.alive_count(), START_WAVE_SIZE);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.wave, 1);
        assert_eq!(state.crosshair, Vec2::new(480.0, 270.0));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(7, 960.0, 540.0);
        state.score = 120;
        state.misses = 4;
        state.lives = 0;
        state.wave = 6;
        state.game_over = true;
        state.paused = true;

        state.reset();
        assert!(state.ducks.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.misses, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.wave, 1);
        assert!(!state.game_over);
        assert!(!state.paused);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1, 960.0, 540.0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
        let mut ids: Vec<u32> = state.ducks.iter().map(|d| d.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), START_WAVE_SIZE);
    }

    #[test]
    fn test_duck_contains_is_boundary_inclusive() {
        let duck = duck_at(100.0, 100.0, 20.0);
        assert!(duck.contains(Vec2::new(100.0, 100.0)));
        assert!(duck.contains(Vec2::new(120.0, 100.0)));
        assert!(!duck.contains(Vec2::new(120.5, 100.0)));
        assert!(!duck.contains(Vec2::new(115.0, 115.0)));
    }

    #[test]
    fn test_duck_facing() {
        let mut duck = duck_at(0.0, 0.0, 15.0);
        assert_eq!(duck.facing(), 1.0);
        duck.vel.x = -3.0;
        assert_eq!(duck.facing(), -1.0);
    }

    #[test]
    fn test_sun_rotation_wraps() {
        let mut sun = Sun::default();
        for _ in 0..24 {
            sun.rotate_step();
        }
        assert!(sun.rotation_deg.abs() < 1e-3);
        sun.rotate_step();
        assert!((sun.rotation_deg - 15.0).abs() < 1e-3);
    }

    #[test]
    fn test_sun_scale_is_clamped() {
        let mut sun = Sun::default();
        sun.adjust_scale(100.0);
        assert_eq!(sun.scale, SUN_SCALE_MAX);
        sun.adjust_scale(-100.0);
        assert_eq!(sun.scale, SUN_SCALE_MIN);
        sun.adjust_scale(1.0);
        assert!((sun.scale - (SUN_SCALE_MIN + SUN_SCALE_STEP)).abs() < 1e-5);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(3, 960.0, 540.0);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::WaveStarted {
                wave: 1,
                ducks: START_WAVE_SIZE
            }]
        );
        assert!(state.drain_events().is_empty());
    }
}
