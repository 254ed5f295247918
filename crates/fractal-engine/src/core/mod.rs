//! Contract between the runtime loop and applications.
//!
//! Applications implement [`App`] and receive a [`FrameCtx`] per frame; they
//! never see the event loop or the ouroboros-held window state.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
