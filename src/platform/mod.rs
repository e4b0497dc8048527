//! Platform abstraction layer
//!
//! The game talks to a window through the [`Host`] trait and receives
//! [`HostEvent`]s from it. Window creation and event polling live in each
//! platform's runner:
//! - `desktop`: winit window + wgpu renderer
//! - `headless`: in-memory recorder for tests and tooling

pub mod desktop;
pub mod headless;

use anyhow::Result;

use crate::renderer::Vertex;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    F,
    P,
    R,
    W,
    S,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Input and window events, in window coordinates (origin top-left, pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMoved { x: f32, y: f32 },
    PointerPressed { button: MouseButton, x: f32, y: f32 },
    /// Scroll in notches, positive is away from the user
    Scroll { notches: f32 },
    KeyPressed { key: Key, repeat: bool },
    Resized { width: u32, height: u32 },
}

/// Fullscreen transition requested by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    /// Leave fullscreen and restore this windowed size
    Exit { width: u32, height: u32 },
}

/// Services a platform provides to the game
pub trait Host {
    /// Current drawable size in pixels
    fn size(&self) -> (u32, u32);

    /// Queue filled triangles (game-space pixels, origin bottom-left)
    fn draw(&mut self, vertices: &[Vertex]);

    /// Submit queued geometry over a cleared background and show the frame
    fn present(&mut self, clear: [f32; 4]) -> Result<()>;

    fn set_fullscreen(&mut self, request: FullscreenRequest);

    fn set_cursor_visible(&mut self, visible: bool);

    /// Ask the runner to close the window and leave the event loop
    fn request_exit(&mut self);
}
