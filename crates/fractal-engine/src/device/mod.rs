//! GPU device and surface management.
//!
//! Creates the wgpu adapter/device/queue, configures the window surface and
//! hands out one `GpuFrame` per rendered frame.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
