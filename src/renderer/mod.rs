//! WebGPU rendering module
//!
//! Scenes are tessellated on the CPU into flat-colored triangles and drawn
//! with a single pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::{RenderState, SurfaceErrorAction};
pub use scene::{HudInfo, Scene};
pub use vertex::{Vertex, colors};
