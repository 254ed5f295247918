//! First-person camera.
//!
//! Orientation lives in two angles (yaw/pitch, degrees). The front/right/up
//! basis is derived from them and rebuilt from scratch after every change, so
//! it never accumulates drift.
//!
//! Input integration is split in two:
//! - `Camera` turns movement/look/scroll deltas into state
//! - `CursorTracker` turns absolute cursor positions into look deltas

mod cursor;
mod fly;

pub use cursor::CursorTracker;
pub use fly::{
    Camera,
    CameraMovement,
    DEFAULT_MOUSE_SENSITIVITY,
    DEFAULT_MOVEMENT_SPEED,
    DEFAULT_PITCH,
    DEFAULT_YAW,
    DEFAULT_ZOOM,
    PITCH_LIMIT,
    ZOOM_MAX,
    ZOOM_MIN,
};
