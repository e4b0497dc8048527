//! Headless host
//!
//! Keeps every presented frame in memory instead of showing it. Used by the
//! test suite and handy for driving the game without a GPU.

use anyhow::Result;

use super::{FullscreenRequest, Host};
use crate::renderer::Vertex;

/// A presented frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub clear: [f32; 4],
    pub vertices: Vec<Vertex>,
    /// Number of `draw` calls that went into the frame
    pub draw_calls: usize,
}

/// In-memory host
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    size: (u32, u32),
    pending: Vec<Vertex>,
    pending_calls: usize,
    pub frames: Vec<Frame>,
    pub fullscreen_requests: Vec<FullscreenRequest>,
    pub cursor_visible: bool,
    pub exit_requested: bool,
    /// Keep at most this many frames (oldest dropped first)
    max_frames: usize,
}

impl HeadlessHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            pending: Vec::new(),
            pending_calls: 0,
            frames: Vec::new(),
            fullscreen_requests: Vec::new(),
            cursor_visible: true,
            exit_requested: false,
            max_frames: 16,
        }
    }

    /// Simulate the window changing size
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Host for HeadlessHost {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn draw(&mut self, vertices: &[Vertex]) {
        self.pending.extend_from_slice(vertices);
        self.pending_calls += 1;
    }

    fn present(&mut self, clear: [f32; 4]) -> Result<()> {
        let frame = Frame {
            clear,
            vertices: std::mem::take(&mut self.pending),
            draw_calls: std::mem::take(&mut self.pending_calls),
        };
        self.frames.push(frame);
        if self.frames.len() > self.max_frames {
            self.frames.remove(0);
        }
        Ok(())
    }

    fn set_fullscreen(&mut self, request: FullscreenRequest) {
        self.fullscreen_requests.push(request);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}
