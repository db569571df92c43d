//! Bloom Render - CPU framebuffer renderer
//!
//! Pure consumer of the garden simulation: `Canvas` is an RGBA8 render
//! target with alpha-blended fills and affine sprite blits, and `Renderer`
//! draws one frame of a `Garden` onto it. Nothing here mutates simulation
//! state.

mod canvas;
mod renderer;

pub use canvas::Canvas;
pub use renderer::Renderer;
