//! Fractal engine crate.
//!
//! Camera, shader parameters and the platform + GPU runtime used by the
//! viewer binary.

pub mod camera;
pub mod config;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod uniforms;
pub mod window;
