use glam::{Mat4, Vec2, Vec3};

use fractal_engine::camera::{Camera, CameraMovement, CursorTracker};
use fractal_engine::config::{ControlsConfig, ViewerConfig};
use fractal_engine::core::{App, AppControl, FrameCtx};
use fractal_engine::input::{InputEvent, InputFrame, InputState, Key};
use fractal_engine::render::FractalRenderer;
use fractal_engine::uniforms::{FractalParams, FrameUniforms};

const CLEAR_COLOR: wgpu::Color = wgpu::Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 };

/// Held keys driving each movement direction.
const MOVE_BINDINGS: [(CameraMovement, [Key; 2]); 4] = [
    (CameraMovement::Forward, [Key::W, Key::ArrowUp]),
    (CameraMovement::Backward, [Key::S, Key::ArrowDown]),
    (CameraMovement::Left, [Key::A, Key::ArrowLeft]),
    (CameraMovement::Right, [Key::D, Key::ArrowRight]),
];

// ── Navigation ────────────────────────────────────────────────────────────

/// Camera, cursor tracking and scene spin, updated from one frame of input.
pub struct Navigation {
    camera: Camera,
    start: Camera,
    cursor: CursorTracker,
    controls: ControlsConfig,

    /// Scene rotation about normalize(1, 1, 0), degrees.
    spin: f32,
    paused: bool,
}

impl Navigation {
    pub fn new(camera: Camera, controls: ControlsConfig) -> Self {
        Self {
            camera,
            start: camera,
            cursor: CursorTracker::new(),
            controls,
            spin: 0.0,
            paused: false,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Applies one frame of input. `dt` is the unscaled frame time in seconds.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32) -> AppControl {
        if frame.was_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        if frame.was_pressed(Key::P) {
            self.paused = !self.paused;
            log::info!("auto-rotation {}", if self.paused { "paused" } else { "resumed" });
        }

        if frame.was_pressed(Key::R) {
            self.camera = self.start;
            self.cursor.reset();
            log::info!("camera reset");
        }

        let step = dt * self.controls.time_scale;
        for (direction, keys) in MOVE_BINDINGS {
            if keys.iter().any(|k| input.key_down(*k)) {
                self.camera.process_keyboard(direction, step);
            }
        }

        for event in &frame.events {
            match event {
                InputEvent::CursorMoved { x, y } => {
                    let (dx, dy) = self.cursor.offset(*x, *y);
                    let scale = self.controls.cursor_scale;
                    self.camera
                        .process_mouse_movement(dx as f32 * scale, dy as f32 * scale, true);
                }
                // Re-entry must not produce a jump.
                InputEvent::CursorLeft | InputEvent::Focused(false) => self.cursor.reset(),
                InputEvent::MouseWheel(delta) => {
                    self.camera
                        .process_mouse_scroll(delta.lines_y(self.controls.scroll_pixels_per_line));
                }
                _ => {}
            }
        }

        AppControl::Continue
    }

    /// Camera view with the scene spin applied on the object side.
    pub fn view_matrix(&self) -> Mat4 {
        let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
        self.camera.view_matrix() * Mat4::from_axis_angle(axis, self.spin.to_radians())
    }

    /// Advances the spin by one frame's worth unless paused.
    pub fn advance_spin(&mut self) {
        if !self.paused {
            self.spin += self.controls.auto_rotate_speed;
        }
    }
}

// ── FractalApp ────────────────────────────────────────────────────────────

pub struct FractalApp {
    nav: Navigation,
    params: FractalParams,
    near_plane: f32,
    far_plane: f32,
    renderer: FractalRenderer,
}

impl FractalApp {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            nav: Navigation::new(config.camera.build(), config.controls.clone()),
            params: config.params.clone(),
            near_plane: config.camera.near_plane,
            far_plane: config.camera.far_plane,
            renderer: FractalRenderer::new(),
        }
    }

    fn frame_uniforms(&self, screen_size: Vec2, aspect: f32, time: f32) -> FrameUniforms {
        let camera = self.nav.camera();
        FrameUniforms {
            model: Mat4::IDENTITY,
            view: self.nav.view_matrix(),
            projection: camera.projection_matrix(aspect, self.near_plane, self.far_plane),
            near_plane: self.near_plane,
            far_plane: self.far_plane,
            time,
            screen_size,
            camera_position: camera.position(),
        }
    }
}

impl App for FractalApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.nav.update(ctx.input, ctx.input_frame, ctx.time.dt) == AppControl::Exit {
            log::info!("escape pressed; exiting");
            return AppControl::Exit;
        }

        let size = ctx.gpu.size();
        let screen_size = Vec2::new(size.width as f32, size.height as f32);
        let frame = self.frame_uniforms(screen_size, ctx.window.aspect(), ctx.time.elapsed);
        frame.bind(&self.params, self.renderer.uniforms_mut());
        self.nav.advance_spin();

        let renderer = &mut self.renderer;
        ctx.render(CLEAR_COLOR, |rctx, target| renderer.render(rctx, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_engine::input::{KeyState, MouseWheelDelta};

    const EPS: f32 = 1.0e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    fn nav() -> Navigation {
        Navigation::new(Camera::at(Vec3::new(0.0, 0.0, 3.0)), ControlsConfig::default())
    }

    /// Feeds `events` through a fresh input state and returns it with the frame.
    fn input(events: &[InputEvent]) -> (InputState, InputFrame) {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for ev in events {
            state.apply_event(&mut frame, ev.clone());
        }
        (state, frame)
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    // ── keys ──

    #[test]
    fn escape_exits() {
        let mut n = nav();
        let (s, f) = input(&[press(Key::Escape)]);
        assert_eq!(n.update(&s, &f, 0.016), AppControl::Exit);
    }

    #[test]
    fn held_w_moves_forward_with_scaled_dt() {
        let mut n = nav();
        let (s, f) = input(&[press(Key::W)]);
        n.update(&s, &f, 1.0);
        // speed 2.5 * dt 1.0 * time_scale 0.1 along -Z
        assert!(approx(n.camera().position().z, 3.0 - 0.25));
    }

    #[test]
    fn arrow_keys_mirror_wasd() {
        let mut n = nav();
        let (s, f) = input(&[press(Key::ArrowLeft)]);
        n.update(&s, &f, 1.0);
        assert!(approx(n.camera().position().x, -0.25));
    }

    #[test]
    fn p_toggles_spin() {
        let mut n = nav();
        n.advance_spin();
        assert!(approx(n.spin(), 0.1));

        let (s, f) = input(&[press(Key::P)]);
        n.update(&s, &f, 0.0);
        assert!(n.is_paused());
        n.advance_spin();
        assert!(approx(n.spin(), 0.1));
    }

    #[test]
    fn r_resets_camera() {
        let mut n = nav();
        let (s, f) = input(&[press(Key::S), InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 10.0 })]);
        n.update(&s, &f, 1.0);
        assert!(n.camera().zoom() < 45.0);

        let (s, f) = input(&[press(Key::R)]);
        n.update(&s, &f, 1.0);
        assert_eq!(n.camera().position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(n.camera().zoom(), 45.0);
    }

    // ── cursor ──

    #[test]
    fn first_cursor_sample_is_baseline() {
        let mut n = nav();
        let (s, f) = input(&[InputEvent::CursorMoved { x: 400.0, y: 300.0 }]);
        n.update(&s, &f, 0.0);
        assert_eq!(n.camera().yaw(), -90.0);
        assert_eq!(n.camera().pitch(), 0.0);
    }

    #[test]
    fn cursor_motion_turns_camera() {
        let mut n = nav();
        let (s, f) = input(&[
            InputEvent::CursorMoved { x: 400.0, y: 300.0 },
            InputEvent::CursorMoved { x: 500.0, y: 200.0 },
        ]);
        n.update(&s, &f, 0.0);
        // 100 px * cursor_scale 0.1 * sensitivity 0.1
        assert!(approx(n.camera().yaw(), -89.0));
        assert!(approx(n.camera().pitch(), 1.0));
    }

    #[test]
    fn cursor_leave_resets_baseline() {
        let mut n = nav();
        let (s, f) = input(&[
            InputEvent::CursorMoved { x: 0.0, y: 0.0 },
            InputEvent::CursorLeft,
            InputEvent::CursorMoved { x: 900.0, y: 900.0 },
        ]);
        n.update(&s, &f, 0.0);
        assert_eq!(n.camera().yaw(), -90.0);
    }

    // ── scroll / view ──

    #[test]
    fn pixel_scroll_converted_to_lines() {
        let mut n = nav();
        let (s, f) = input(&[InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 40.0 })]);
        n.update(&s, &f, 0.0);
        assert!(approx(n.camera().zoom(), 43.0));
    }

    #[test]
    fn zero_spin_view_is_camera_view() {
        let n = nav();
        assert!(n.view_matrix().abs_diff_eq(n.camera().view_matrix(), EPS));
    }

    #[test]
    fn spin_rotates_scene_not_camera_origin() {
        let mut n = nav();
        for _ in 0..900 {
            n.advance_spin();
        }
        let v = n.view_matrix();
        // The origin stays where the camera looks at it.
        let origin_in_view = v.transform_point3(Vec3::ZERO);
        assert!(origin_in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1.0e-4));
        assert!(!v.abs_diff_eq(n.camera().view_matrix(), 1.0e-3));
    }

    #[test]
    fn frame_uniforms_follow_camera() {
        let app = FractalApp::new(&ViewerConfig::default());
        let fu = app.frame_uniforms(Vec2::new(1000.0, 500.0), 2.0, 1.5);
        assert_eq!(fu.camera_position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(fu.near_plane, 0.1);
        assert_eq!(fu.far_plane, 100.0);
        assert_eq!(fu.screen_ratio(), 2.0);
        assert!(approx(fu.projection.x_axis.x * 2.0, fu.projection.y_axis.y));
    }
}
