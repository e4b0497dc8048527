//! Game driver
//!
//! Owns the game state and the scene builder, turns [`HostEvent`]s into game
//! actions and runs the fixed-timestep loop once per presented frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::platform::{FullscreenRequest, Host, HostEvent, Key, MouseButton};
use crate::renderer::{HudInfo, Scene, colors};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, ShotOutcome, shoot_at, tick};
use crate::window_to_game;

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

pub struct App {
    state: GameState,
    settings: Settings,
    scene: Scene,
    /// Fixed simulation step in seconds
    sim_dt: f32,
    accumulator: f32,
    /// Wall time seen by `frame`, in seconds
    clock: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
    fullscreen: bool,
    /// Window size to restore when leaving fullscreen
    windowed_size: (u32, u32),
}

impl App {
    pub fn new(settings: Settings, seed: u64, width: u32, height: u32) -> Self {
        let mut state = GameState::new(seed, width as f32, height as f32);
        state.bobbing = settings.variant.bobbing();

        log::info!(
            "Starting {} variant, seed {}, {}x{} at {} Hz",
            settings.variant.as_str(),
            seed,
            width,
            height,
            settings.tick_hz
        );

        Self {
            state,
            sim_dt: settings.tick_dt(),
            scene: Scene::new(settings.variant),
            settings,
            accumulator: 0.0,
            clock: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
            fullscreen: false,
            windowed_size: (width, height),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// One-time host setup once the window exists
    pub fn start(&mut self, host: &mut impl Host) {
        host.set_cursor_visible(false);
        if self.settings.effective_start_fullscreen() {
            self.toggle_fullscreen(host);
        }
        self.log_events();
    }

    /// React to a single input or window event
    pub fn handle_event(&mut self, event: &HostEvent, host: &mut impl Host) {
        let variant = self.settings.variant;

        match *event {
            HostEvent::PointerMoved { x, y } => {
                self.state.crosshair = window_to_game(x, y, self.state.height);
            }
            HostEvent::PointerPressed { button, x, y } => {
                let point = window_to_game(x, y, self.state.height);
                self.state.crosshair = point;
                match button {
                    MouseButton::Left => {
                        let outcome = self.shoot(point);
                        log::debug!("Shot at ({:.0}, {:.0}): {:?}", point.x, point.y, outcome);
                    }
                    MouseButton::Right if variant.sun() => self.state.sun.rotate_step(),
                    _ => {}
                }
            }
            HostEvent::Scroll { notches } => {
                if variant.sun() && notches != 0.0 {
                    self.state.sun.adjust_scale(notches);
                }
            }
            HostEvent::KeyPressed { key, repeat } => self.handle_key(key, repeat, host),
            HostEvent::Resized { width, height } => {
                if width > 0 && height > 0 {
                    self.state.resize(width as f32, height as f32);
                }
            }
        }

        self.log_events();
    }

    fn handle_key(&mut self, key: Key, repeat: bool, host: &mut impl Host) {
        let variant = self.settings.variant;

        match key {
            Key::Escape => {
                log::info!("Quit requested");
                host.request_exit();
            }
            Key::F if !repeat && variant.fullscreen_toggle() => self.toggle_fullscreen(host),
            Key::P if !repeat => {
                self.state.toggle_pause();
                log::info!("{}", if self.state.paused { "Paused" } else { "Resumed" });
            }
            Key::R if !repeat => self.restart(),
            Key::W | Key::ArrowUp if variant.sun() => self.state.sun.adjust_scale(1.0),
            Key::S | Key::ArrowDown if variant.sun() => self.state.sun.adjust_scale(-1.0),
            _ => {}
        }
    }

    /// Fire at a game-space point
    pub fn shoot(&mut self, point: glam::Vec2) -> ShotOutcome {
        shoot_at(&mut self.state, point)
    }

    /// Start over from wave 1
    pub fn restart(&mut self) {
        self.state.restart();
        self.accumulator = 0.0;
        log::info!("Game restarted");
    }

    fn toggle_fullscreen(&mut self, host: &mut impl Host) {
        if self.fullscreen {
            let (width, height) = self.windowed_size;
            host.set_fullscreen(FullscreenRequest::Exit { width, height });
            log::info!("Leaving fullscreen, restoring {}x{}", width, height);
        } else {
            self.windowed_size = host.size();
            host.set_fullscreen(FullscreenRequest::Enter);
            log::info!("Entering fullscreen");
        }
        self.fullscreen = !self.fullscreen;
    }

    /// Advance by `dt` seconds of wall time and present a frame
    pub fn frame(&mut self, dt: f32, host: &mut impl Host) -> anyhow::Result<()> {
        self.update(dt);
        self.render(host)
    }

    /// Run as many fixed ticks as the accumulated time allows
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, self.sim_dt);
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop whatever backlog the substep cap left behind
            self.accumulator = self.accumulator.min(self.sim_dt);
        }

        self.track_fps(dt);
        self.log_events();
        substeps
    }

    fn track_fps(&mut self, dt: f32) {
        self.clock += dt as f64;
        self.frame_times[self.frame_index] = self.clock;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample sits at the slot we write next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = self.clock - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }

    fn render(&mut self, host: &mut impl Host) -> anyhow::Result<()> {
        let hud = HudInfo {
            fullscreen_hint: self.settings.variant.fullscreen_toggle(),
            fps: self.settings.show_fps.then_some(self.fps),
        };

        let layers = self.scene.build(&self.state, hud);
        host.draw(layers.background);
        host.draw(layers.foreground);
        host.present(colors::SKY)
    }

    fn log_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::WaveStarted { wave, ducks } => {
                    log::info!("Wave {} started with {} ducks", wave, ducks)
                }
                GameEvent::DuckEscaped { id, lives_left } => {
                    log::debug!("Duck {} escaped, {} lives left", id, lives_left)
                }
                GameEvent::DucksShot { count } => log::debug!("Shot down {} duck(s)", count),
                GameEvent::Missed => log::debug!("Missed"),
                GameEvent::GameOver { score } => log::info!("Game over, final score {}", score),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::headless::HeadlessHost;
    use crate::settings::Variant;

    fn app(variant: Variant) -> (App, HeadlessHost) {
        let app = App::new(Settings::for_variant(variant), 42, 960, 540);
        (app, HeadlessHost::new(960, 540))
    }

    fn key(key: Key) -> HostEvent {
        HostEvent::KeyPressed { key, repeat: false }
    }

    #[test]
    fn test_start_hides_cursor() {
        let (mut app, mut host) = app(Variant::Classic);
        app.start(&mut host);
        assert!(!host.cursor_visible);
        assert!(host.fullscreen_requests.is_empty());
    }

    #[test]
    fn test_start_fullscreen_only_where_supported() {
        let mut settings = Settings::for_variant(Variant::Scenery);
        settings.start_fullscreen = true;
        let mut app = App::new(settings.clone(), 1, 960, 540);
        let mut host = HeadlessHost::new(960, 540);
        app.start(&mut host);
        assert!(app.is_fullscreen());

        settings.variant = Variant::Classic;
        let mut app = App::new(settings, 1, 960, 540);
        let mut host = HeadlessHost::new(960, 540);
        app.start(&mut host);
        assert!(!app.is_fullscreen());
    }

    #[test]
    fn test_bobbing_follows_variant() {
        assert!(!app(Variant::Classic).0.state().bobbing);
        assert!(app(Variant::Buffered).0.state().bobbing);
    }

    #[test]
    fn test_accumulator_runs_expected_ticks() {
        let (mut app, _) = app(Variant::Classic);
        let dt = app.settings().tick_dt();

        assert_eq!(app.update(dt * 0.5), 0);
        assert_eq!(app.update(dt * 0.6), 1);
        assert_eq!(app.state().time_ticks, 1);

        // 0.1 s clamp at 60 Hz leaves room for six ticks
        assert_eq!(app.update(5.0), 6);
        assert_eq!(app.state().time_ticks, 7);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut settings = Settings::for_variant(Variant::Classic);
        settings.tick_hz = 1000;
        let mut app = App::new(settings, 1, 960, 540);
        assert_eq!(app.update(0.1), MAX_SUBSTEPS);
        assert_eq!(app.update(0.0), 1);
    }

    #[test]
    fn test_pointer_moves_crosshair_with_flipped_y() {
        let (mut app, mut host) = app(Variant::Classic);
        app.handle_event(&HostEvent::PointerMoved { x: 100.0, y: 40.0 }, &mut host);
        assert_eq!(app.state().crosshair, glam::Vec2::new(100.0, 500.0));
    }

    #[test]
    fn test_left_click_hits_duck_under_cursor() {
        let (mut app, mut host) = app(Variant::Classic);
        let duck = app.state().ducks[0].clone();
        let (x, y) = (duck.pos.x, app.state().height - duck.pos.y);

        app.handle_event(
            &HostEvent::PointerPressed {
                button: MouseButton::Left,
                x,
                y,
            },
            &mut host,
        );
        assert!(app.state().score >= SCORE_PER_HIT);
        assert!(!app.state().ducks[0].alive);
        assert_eq!(app.state().misses, 0);
    }

    #[test]
    fn test_pause_key_halts_ticks() {
        let (mut app, mut host) = app(Variant::Classic);
        let before: Vec<_> = app.state().ducks.iter().map(|d| d.pos).collect();

        app.handle_event(&key(Key::P), &mut host);
        assert!(app.state().paused);
        app.update(0.05);
        let after: Vec<_> = app.state().ducks.iter().map(|d| d.pos).collect();
        assert_eq!(before, after);

        // Held key repeats do not flip it back
        app.handle_event(&HostEvent::KeyPressed { key: Key::P, repeat: true }, &mut host);
        assert!(app.state().paused);
    }

    #[test]
    fn test_restart_key_resets_run() {
        let (mut app, mut host) = app(Variant::Classic);
        app.shoot(glam::Vec2::new(-500.0, -500.0));
        assert_eq!(app.state().misses, 1);

        app.handle_event(&key(Key::R), &mut host);
        assert_eq!(app.state().misses, 0);
        assert_eq!(app.state().alive_count(), START_WAVE_SIZE);
        assert_eq!(app.state().wave, 1);
    }

    #[test]
    fn test_escape_requests_exit() {
        let (mut app, mut host) = app(Variant::Classic);
        app.handle_event(&key(Key::Escape), &mut host);
        assert!(host.exit_requested);
    }

    #[test]
    fn test_fullscreen_restores_recorded_size() {
        let (mut app, mut host) = app(Variant::Scenery);
        host.set_size(800, 600);

        app.handle_event(&key(Key::F), &mut host);
        assert!(app.is_fullscreen());
        host.set_size(1920, 1080);
        app.handle_event(&key(Key::F), &mut host);
        assert!(!app.is_fullscreen());

        assert_eq!(
            host.fullscreen_requests,
            vec![
                FullscreenRequest::Enter,
                FullscreenRequest::Exit {
                    width: 800,
                    height: 600
                }
            ]
        );
    }

    #[test]
    fn test_classic_ignores_fullscreen_and_sun_keys() {
        let (mut app, mut host) = app(Variant::Classic);
        app.handle_event(&key(Key::F), &mut host);
        app.handle_event(&key(Key::W), &mut host);
        app.handle_event(
            &HostEvent::PointerPressed {
                button: MouseButton::Right,
                x: 0.0,
                y: 0.0,
            },
            &mut host,
        );
        assert!(host.fullscreen_requests.is_empty());
        assert_eq!(app.state().sun, crate::sim::Sun::default());
    }

    #[test]
    fn test_sun_controls() {
        let (mut app, mut host) = app(Variant::Sunny);
        app.handle_event(
            &HostEvent::PointerPressed {
                button: MouseButton::Right,
                x: 0.0,
                y: 0.0,
            },
            &mut host,
        );
        assert_eq!(app.state().sun.rotation_deg, SUN_ROTATE_STEP_DEG);
        assert_eq!(app.state().misses, 0);

        app.handle_event(&key(Key::ArrowUp), &mut host);
        assert!((app.state().sun.scale - 1.1).abs() < 1e-5);
        app.handle_event(&HostEvent::Scroll { notches: -2.0 }, &mut host);
        assert!((app.state().sun.scale - 0.9).abs() < 1e-5);

        for _ in 0..30 {
            app.handle_event(&key(Key::S), &mut host);
        }
        assert_eq!(app.state().sun.scale, SUN_SCALE_MIN);
    }

    #[test]
    fn test_resize_updates_arena() {
        let (mut app, mut host) = app(Variant::Classic);
        app.handle_event(&HostEvent::Resized { width: 1280, height: 720 }, &mut host);
        assert_eq!((app.state().width, app.state().height), (1280.0, 720.0));

        // Minimised windows report zero; keep the last real size
        app.handle_event(&HostEvent::Resized { width: 0, height: 0 }, &mut host);
        assert_eq!((app.state().width, app.state().height), (1280.0, 720.0));
    }

    #[test]
    fn test_frame_presents_sky_with_two_layers() {
        let (mut app, mut host) = app(Variant::Buffered);
        app.frame(1.0 / 60.0, &mut host).unwrap();

        let frame = host.last_frame().unwrap();
        assert_eq!(frame.clear, colors::SKY);
        assert_eq!(frame.draw_calls, 2);
        assert!(!frame.vertices.is_empty());
    }

    #[test]
    fn test_fps_settles_near_frame_rate() {
        let (mut app, mut host) = app(Variant::Classic);
        for _ in 0..120 {
            app.frame(1.0 / 50.0, &mut host).unwrap();
        }
        assert_eq!(app.fps(), 50);
    }

    #[test]
    fn test_events_are_drained_each_frame() {
        let (mut app, mut host) = app(Variant::Classic);
        app.frame(0.0, &mut host).unwrap();
        assert!(app.state().events.is_empty());
    }
}
