//! Desktop platform: winit window + wgpu renderer

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use super::{FullscreenRequest, Host, HostEvent, Key, MouseButton};
use crate::app::App;
use crate::consts::WINDOWED_POSITION;
use crate::renderer::{RenderState, SurfaceErrorAction, Vertex};
use crate::settings::Settings;

/// Trackpad pixels that count as one wheel notch
const PIXELS_PER_NOTCH: f32 = 40.0;

/// Open a window and run the game until it closes
pub fn run(settings: Settings, seed: u64) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut runner = Runner {
        settings,
        seed,
        session: None,
        clock: FrameClock::default(),
        pointer: (0.0, 0.0),
        error: None,
    };

    event_loop
        .run_app(&mut runner)
        .context("winit event loop terminated with error")?;

    match runner.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Host backed by a real window
pub struct DesktopHost {
    window: Arc<Window>,
    renderer: RenderState,
    pending: Vec<Vertex>,
    exit_requested: bool,
}

impl Host for DesktopHost {
    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn draw(&mut self, vertices: &[Vertex]) {
        self.pending.extend_from_slice(vertices);
    }

    fn present(&mut self, clear: [f32; 4]) -> Result<()> {
        let result = self.renderer.render(&self.pending, clear);
        self.pending.clear();

        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                let reason = format!("{err:?}");
                match self.renderer.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => {
                        log::warn!("Surface {}, reconfigured", reason);
                        Ok(())
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::warn!("Render error: {}", reason);
                        Ok(())
                    }
                    SurfaceErrorAction::Fatal => {
                        log::error!("Out of memory!");
                        Err(anyhow!("surface error: {reason}"))
                    }
                }
            }
        }
    }

    fn set_fullscreen(&mut self, request: FullscreenRequest) {
        match request {
            FullscreenRequest::Enter => {
                self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
            FullscreenRequest::Exit { width, height } => {
                self.window.set_fullscreen(None);
                let _ = self.window.request_inner_size(PhysicalSize::new(width, height));
                let (x, y) = WINDOWED_POSITION;
                self.window.set_outer_position(PhysicalPosition::new(x, y));
            }
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

/// Wall-clock frame delta
#[derive(Default)]
struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// Seconds since the previous call (zero on the first)
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last = Some(now);
        dt
    }
}

struct Session {
    app: App,
    host: DesktopHost,
}

struct Runner {
    settings: Settings,
    seed: u64,
    session: Option<Session>,
    clock: FrameClock,
    /// Last cursor position, window pixels
    pointer: (f32, f32),
    error: Option<anyhow::Error>,
}

impl Runner {
    fn create_session(&self, event_loop: &ActiveEventLoop) -> Result<Session> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.title())
            .with_inner_size(PhysicalSize::new(self.settings.width, self.settings.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(RenderState::new(window.clone()))
            .context("GPU initialization failed")?;
        let (width, height) = renderer.size;

        let mut host = DesktopHost {
            window,
            renderer,
            pending: Vec::new(),
            exit_requested: false,
        };
        let mut app = App::new(self.settings.clone(), self.seed, width, height);
        app.start(&mut host);

        Ok(Session { app, host })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for Runner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() {
            return;
        }

        match self.create_session(event_loop) {
            Ok(session) => {
                session.host.window.request_redraw();
                self.session = Some(session);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if let Some(session) = &self.session {
            session.host.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let host_event = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                session.host.renderer.resize(size.width, size.height);
                Some(HostEvent::Resized {
                    width: size.width,
                    height: size.height,
                })
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = (position.x as f32, position.y as f32);
                Some(HostEvent::PointerMoved {
                    x: self.pointer.0,
                    y: self.pointer.1,
                })
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Some(HostEvent::PointerPressed {
                button: map_mouse_button(button),
                x: self.pointer.0,
                y: self.pointer.1,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_NOTCH,
                };
                Some(HostEvent::Scroll { notches })
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Some(HostEvent::KeyPressed {
                    key: map_key(event.physical_key),
                    repeat: event.repeat,
                })
            }
            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();
                if let Err(err) = session.app.frame(dt, &mut session.host) {
                    self.fail(event_loop, err);
                    return;
                }
                None
            }
            _ => None,
        };

        if let Some(ev) = host_event {
            session.app.handle_event(&ev, &mut session.host);
        }

        if session.host.exit_requested {
            event_loop.exit();
        }
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyS => Key::S,
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            _ => Key::Other,
        },
        PhysicalKey::Unidentified(_) => Key::Other,
    }
}
