//! Rendering module
//!
//! Frames are turned into a backend-neutral draw list (`shapes`), which a
//! backend then rasterizes. Renderers only ever see snapshots.

pub mod shapes;
pub mod text;

pub use shapes::{DrawList, draw_list};
pub use text::TextRenderer;

use crate::sim::Frame;

/// A presentation backend
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}
