//! Scene building
//!
//! Turns a `GameState` into triangle lists in game space (pixels, origin
//! bottom-left). Output is split in two layers: the static background
//! (ground, water and scenery, which only depends on the window size) and the
//! per-frame foreground (sun, ducks, HUD, crosshair, overlay).

use glam::Vec2;

use super::shapes::{circle, ellipse, line, point, rect, ring, triangle};
use super::text::{draw_text, text_width};
use super::vertex::{Vertex, colors};
use crate::consts::{GROUND_HEIGHT, WATER_TOP};
use crate::settings::Variant;
use crate::sim::{Duck, GameState, Sun};

const CIRCLE_SEGMENTS: u32 = 24;
const HUD_SCALE: f32 = 2.0;
const HUD_MARGIN: f32 = 10.0;
const SUN_RADIUS: f32 = 36.0;
const SUN_RAYS: u32 = 12;
const CROSSHAIR_ARM: f32 = 12.0;
const CROSSHAIR_RING: f32 = 14.0;

/// HUD details that come from the driver rather than the game state
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo {
    /// Show the "press F" hint
    pub fullscreen_hint: bool,
    /// Frames per second, when the counter is enabled
    pub fps: Option<u32>,
}

/// Both layers of a built frame
pub struct SceneLayers<'a> {
    pub background: &'a [Vertex],
    pub foreground: &'a [Vertex],
}

/// Reusable scene builder
pub struct Scene {
    variant: Variant,
    background: Vec<Vertex>,
    /// Size the background was last built for
    background_size: Option<(u32, u32)>,
    foreground: Vec<Vertex>,
    /// How many times the background has been tessellated
    pub background_builds: u64,
}

impl Scene {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            background: Vec::new(),
            background_size: None,
            foreground: Vec::new(),
            background_builds: 0,
        }
    }

    /// Build both layers for the current state
    pub fn build(&mut self, state: &GameState, hud: HudInfo) -> SceneLayers<'_> {
        let size = (state.width as u32, state.height as u32);
        let stale = self.background_size != Some(size);
        if stale || !self.variant.cached_scenery() {
            self.background.clear();
            background(&mut self.background, state.width, state.height, self.variant);
            self.background_size = Some(size);
            self.background_builds += 1;
        }

        self.foreground.clear();
        let out = &mut self.foreground;

        if self.variant.sun() {
            sun(out, &state.sun, state.width, state.height);
        }
        for duck in state.ducks.iter().filter(|d| d.alive) {
            self::duck(out, duck);
        }
        self::hud(out, state, hud);
        crosshair(out, state.crosshair);
        if state.game_over {
            game_over(out, state);
        }

        SceneLayers {
            background: &self.background,
            foreground: &self.foreground,
        }
    }
}

/// Ground and water strips, plus hills, clouds and reeds for scenery variants
pub fn background(out: &mut Vec<Vertex>, width: f32, height: f32, variant: Variant) {
    if variant.scenery() {
        clouds(out, width, height);
        hills(out, width);
    }

    rect(out, 0.0, 0.0, width, GROUND_HEIGHT, colors::GROUND);
    rect(out, 0.0, GROUND_HEIGHT, width, WATER_TOP - GROUND_HEIGHT, colors::WATER);

    if variant.scenery() {
        water_glints(out, width);
        reeds(out, width);
    }
}

fn clouds(out: &mut Vec<Vertex>, width: f32, height: f32) {
    // Kept to the left two thirds so the sun corner stays clear
    for &(fx, fy, size) in &[(0.12, 0.78, 1.0), (0.38, 0.88, 0.8), (0.6, 0.74, 1.15)] {
        let c = Vec2::new(width * fx, height * fy);
        let r = 22.0 * size;
        circle(out, c, r, colors::CLOUD, CIRCLE_SEGMENTS);
        circle(out, c + Vec2::new(-r * 1.1, -r * 0.3), r * 0.75, colors::CLOUD, CIRCLE_SEGMENTS);
        circle(out, c + Vec2::new(r * 1.1, -r * 0.25), r * 0.8, colors::CLOUD, CIRCLE_SEGMENTS);
    }
}

fn hills(out: &mut Vec<Vertex>, width: f32) {
    // Lower halves end up hidden behind the water strip
    ellipse(
        out,
        Vec2::new(width * 0.2, WATER_TOP),
        Vec2::new(width * 0.35, 90.0),
        colors::HILL_FAR,
        48,
    );
    ellipse(
        out,
        Vec2::new(width * 0.78, WATER_TOP),
        Vec2::new(width * 0.3, 70.0),
        colors::HILL_FAR,
        48,
    );
    ellipse(
        out,
        Vec2::new(width * 0.5, WATER_TOP),
        Vec2::new(width * 0.28, 45.0),
        colors::HILL_NEAR,
        48,
    );
}

fn water_glints(out: &mut Vec<Vertex>, width: f32) {
    let mut x = 30.0;
    let mut i = 0u32;
    while x < width {
        let y = GROUND_HEIGHT + 8.0 + (i % 3) as f32 * 7.0;
        line(out, Vec2::new(x, y), Vec2::new(x + 18.0, y), 2.0, colors::WATER_GLINT);
        x += 90.0 + (i * 37 % 41) as f32;
        i += 1;
    }
}

fn reeds(out: &mut Vec<Vertex>, width: f32) {
    let mut x = 18.0;
    let mut i = 0u32;
    while x < width {
        let top = WATER_TOP + 14.0 + (i * 53 % 29) as f32;
        let base = Vec2::new(x, GROUND_HEIGHT - 6.0);
        let tip = Vec2::new(x + 3.0, top);
        line(out, base, tip, 2.5, colors::REED);
        ellipse(out, tip, Vec2::new(3.0, 8.0), colors::REED_TIP, 12);
        x += 55.0 + (i * 71 % 47) as f32;
        i += 1;
    }
}

/// Sun disc with a ring of rays in the top right corner
pub fn sun(out: &mut Vec<Vertex>, sun: &Sun, width: f32, height: f32) {
    let radius = SUN_RADIUS * sun.scale;
    let center = Vec2::new(width - 60.0 - radius, height - 60.0 - radius);
    let base_angle = sun.rotation_deg.to_radians();
    let half_width = std::f32::consts::PI / SUN_RAYS as f32 * 0.45;

    for i in 0..SUN_RAYS {
        let theta = base_angle + i as f32 * std::f32::consts::TAU / SUN_RAYS as f32;
        let at = |angle: f32, r: f32| center + Vec2::new(angle.cos(), angle.sin()) * r;
        triangle(
            out,
            at(theta - half_width, radius * 1.1),
            at(theta, radius * 1.6),
            at(theta + half_width, radius * 1.1),
            colors::SUN_RAY,
        );
    }
    circle(out, center, radius, colors::SUN, CIRCLE_SEGMENTS * 2);
}

/// Body, head, beak and wing, facing the direction of travel
pub fn duck(out: &mut Vec<Vertex>, duck: &Duck) {
    let Duck { pos, radius: r, .. } = *duck;
    let dir = duck.facing();
    let at = |dx: f32, dy: f32| pos + Vec2::new(dir * dx * r, dy * r);

    circle(out, pos, r, colors::DUCK_BODY, CIRCLE_SEGMENTS);
    circle(out, at(0.9, 0.4), r * 0.55, colors::DUCK_HEAD, CIRCLE_SEGMENTS);
    triangle(out, at(1.5, 0.45), at(2.1, 0.35), at(1.9, 0.55), colors::DUCK_BEAK);
    triangle(out, at(0.0, 0.2), at(-0.8, 0.0), at(0.3, -0.9), colors::DUCK_WING);
}

/// Status lines along the top left, pause marker and optional FPS
pub fn hud(out: &mut Vec<Vertex>, state: &GameState, info: HudInfo) {
    let line_height = 24.0;
    let mut y = state.height - HUD_MARGIN - 18.0;

    if info.fullscreen_hint {
        draw_text(out, HUD_MARGIN, y, "Press F to fullscreen", HUD_SCALE, colors::HUD_TEXT);
        y -= line_height;
    }

    let stats = format!(
        "Score: {}   Misses: {}   Lives: {}   Wave: {}",
        state.score, state.misses, state.lives, state.wave
    );
    draw_text(out, HUD_MARGIN, y, &stats, HUD_SCALE, colors::HUD_TEXT);

    if state.paused {
        let label = "[PAUSED]";
        let x = (state.width - text_width(label, HUD_SCALE)) / 2.0;
        draw_text(out, x, y - line_height, label, HUD_SCALE, colors::HUD_TEXT);
    }

    if let Some(fps) = info.fps {
        let label = format!("FPS: {fps}");
        let x = state.width - HUD_MARGIN - text_width(&label, HUD_SCALE);
        draw_text(out, x, HUD_MARGIN, &label, HUD_SCALE, colors::HUD_TEXT);
    }
}

/// Cross with a ring around it
pub fn crosshair(out: &mut Vec<Vertex>, at: Vec2) {
    let c = colors::CROSSHAIR;
    line(out, at - Vec2::X * CROSSHAIR_ARM, at + Vec2::X * CROSSHAIR_ARM, 1.5, c);
    line(out, at - Vec2::Y * CROSSHAIR_ARM, at + Vec2::Y * CROSSHAIR_ARM, 1.5, c);
    ring(out, at, CROSSHAIR_RING, 1.5, c, CIRCLE_SEGMENTS);
    point(out, at, 2.0, c);
}

/// Opaque overlay with the final score
pub fn game_over(out: &mut Vec<Vertex>, state: &GameState) {
    rect(out, 0.0, 0.0, state.width, state.height, colors::OVERLAY);

    let title = "GAME OVER";
    let title_scale = HUD_SCALE * 2.0;
    let x = (state.width - text_width(title, title_scale)) / 2.0;
    draw_text(out, x, state.height / 2.0 + 10.0, title, title_scale, colors::HUD_TEXT);

    let detail = format!("Final score: {}  (press R to restart)", state.score);
    let x = (state.width - text_width(&detail, HUD_SCALE)) / 2.0;
    draw_text(out, x, state.height / 2.0 - 24.0, &detail, HUD_SCALE, colors::HUD_TEXT);
}
