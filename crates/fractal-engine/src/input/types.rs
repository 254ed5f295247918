use std::fmt;

/// Keyboard key identifier.
///
/// Only the keys the viewer binds get their own variant. Everything else maps
/// to `Key::Unknown` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,

    W,
    A,
    S,
    D,
    P,
    R,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` comes from notched wheels; `Pixel` from touchpads and other
/// high-precision devices (physical pixels).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical delta in wheel lines (positive = away from the user).
    pub fn lines_y(self, pixels_per_line: f32) -> f32 {
        match self {
            MouseWheelDelta::Line { y, .. } => y,
            MouseWheelDelta::Pixel { y, .. } => {
                if pixels_per_line > 0.0 { y / pixels_per_line } else { 0.0 }
            }
        }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True for auto-repeat presses.
        repeat: bool,
    },

    /// Absolute cursor position in physical pixels, origin top-left.
    CursorMoved { x: f64, y: f64 },

    /// Cursor left the window surface.
    CursorLeft,

    MouseWheel(MouseWheelDelta),

    /// Window focus change.
    Focused(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_delta_passes_through() {
        assert_eq!(MouseWheelDelta::Line { x: 0.0, y: -2.0 }.lines_y(20.0), -2.0);
    }

    #[test]
    fn pixel_delta_scales_to_lines() {
        assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: 40.0 }.lines_y(20.0), 2.0);
        assert_eq!(MouseWheelDelta::Pixel { x: 0.0, y: 40.0 }.lines_y(0.0), 0.0);
    }
}
