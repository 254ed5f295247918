//! Shader parameters and the named-uniform binding path.
//!
//! Host code never touches byte offsets directly:
//! - `FractalParams` is the per-session parameter record (plain data, serde)
//! - `FrameUniforms` combines it with per-frame matrices and binds everything by name
//! - `UniformSink` is the binding interface ("set float `u_power` to 12.0")
//! - `UniformBlock` implements the sink over a CPU byte buffer whose layout
//!   (`UniformLayout`) follows WGSL uniform address-space rules
//!
//! The WGSL struct declaration is generated from the same layout, so host and
//! shader cannot disagree about field order or padding.

mod block;
mod frame;
mod layout;
mod params;

use glam::{Mat4, Vec2, Vec3, Vec4};

pub use block::UniformBlock;
pub use frame::FrameUniforms;
pub use layout::{UniformField, UniformKind, UniformLayout};
pub use params::FractalParams;

/// Named uniform binding interface.
///
/// Implementations decide what happens with names they do not know; the
/// engine's `UniformBlock` ignores them (with a one-time warning).
pub trait UniformSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_vec2(&mut self, name: &str, value: Vec2);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_vec4(&mut self, name: &str, value: Vec4);
    fn set_mat4(&mut self, name: &str, value: Mat4);
}
