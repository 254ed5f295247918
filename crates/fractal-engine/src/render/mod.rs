//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and build them
//! lazily for the current surface format.

mod ctx;
mod fractal;

pub use ctx::{RenderCtx, RenderTarget};
pub use fractal::FractalRenderer;
