//! Frame renderers
//!
//! Renderers only read a [`Frame`](crate::sim::Frame); nothing flows back
//! into the simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use text::TextRenderer;

use crate::sim::Frame;

/// Render collaborator: draws one frame per tick
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}
