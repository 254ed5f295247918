use glam::{Mat4, Vec3};

/// Initial yaw in degrees. Points the front vector along -Z.
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
/// World units per second.
pub const DEFAULT_MOVEMENT_SPEED: f32 = 2.5;
/// Degrees per unit of look offset.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
/// Vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch bound (degrees) applied when pitch is constrained.
///
/// Keeps `front.y` away from ±1, where `front × world_up` degenerates.
pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 90.0;

/// Discrete movement direction for keyboard navigation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Yaw/pitch fly camera.
///
/// Invariants:
/// - `front`, `right`, `up` are orthonormal, with
///   `right = normalize(front × world_up)` and `up = normalize(right × front)`
/// - `zoom` stays within `[ZOOM_MIN, ZOOM_MAX]`
///
/// None of the mutators validate their input. Non-finite deltas propagate into
/// the state unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,
    zoom: f32,

    /// World units travelled per second of keyboard input.
    pub movement_speed: f32,

    /// Scale applied to look offsets before they reach yaw/pitch.
    pub mouse_sensitivity: f32,
}

impl Camera {
    /// Creates a camera and derives its basis from `yaw`/`pitch` (degrees).
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            world_up,
            yaw,
            pitch,
            zoom: DEFAULT_ZOOM,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        };
        camera.update_basis();
        camera
    }

    /// Scalar-component form of [`Camera::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Camera at `position` with +Y up and the default orientation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[inline]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Sets the field of view, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Right-handed look-at transform from `position` towards `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Right-handed perspective projection using `zoom` as the vertical FOV.
    ///
    /// Depth maps to `[0, 1]`.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    /// Moves along `front` or `right` by `movement_speed * dt`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a look offset.
    ///
    /// Offsets are scaled by `mouse_sensitivity` and added to yaw/pitch. With
    /// `constrain_pitch`, pitch is clamped to `±PITCH_LIMIT`. Yaw is never
    /// wrapped; the trig in the basis derivation is periodic.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// [`process_mouse_movement`](Self::process_mouse_movement) with pitch constrained.
    #[inline]
    pub fn look(&mut self, x_offset: f32, y_offset: f32) {
        self.process_mouse_movement(x_offset, y_offset, true);
    }

    /// Narrows (positive) or widens (negative) the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.set_zoom(self.zoom - y_offset);
    }

    fn update_basis(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
