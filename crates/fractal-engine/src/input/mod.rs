//! Input subsystem.
//!
//! The public API does not expose winit types. The runtime translates window
//! events through `platform::winit` and feeds them to `InputState`.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, MouseWheelDelta};
