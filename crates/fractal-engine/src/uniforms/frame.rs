use glam::{Mat4, Vec2, Vec3, Vec4};

use super::layout::{UniformKind, UniformLayout};
use super::params::FractalParams;
use super::UniformSink;

/// Values that change every frame, alongside the parameter record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Seconds since startup.
    pub time: f32,
    /// Drawable size in physical pixels.
    pub screen_size: Vec2,
    pub camera_position: Vec3,
}

impl FrameUniforms {
    /// Uniform block layout expected by the fractal shader.
    ///
    /// Matrices and vec4s first, then vec3s each followed by a scalar that
    /// fills its tail, then the remaining scalars.
    pub fn layout() -> UniformLayout {
        use UniformKind as K;

        UniformLayout::new()
            .with("model", K::Mat4)
            .with("view", K::Mat4)
            .with("projection", K::Mat4)
            .with("u_orbitStrength", K::Vec4)
            .with("u_juliaC", K::Vec3)
            .with("u_power", K::Float)
            .with("u_color0", K::Vec3)
            .with("u_otDist0to1", K::Float)
            .with("u_color1", K::Vec3)
            .with("u_otDist1to2", K::Float)
            .with("u_color2", K::Vec3)
            .with("u_otDist2to3", K::Float)
            .with("u_color3", K::Vec3)
            .with("u_otDist3to0", K::Float)
            .with("u_colorBase", K::Vec3)
            .with("u_baseColorStrength", K::Float)
            .with("u_lightPos", K::Vec3)
            .with("u_shadowBrightness", K::Float)
            .with("u_bgColor", K::Vec3)
            .with("u_glowFactor", K::Float)
            .with("u_glowColor", K::Vec3)
            .with("u_otCycleIntensity", K::Float)
            .with("u_CameraPos", K::Vec3)
            .with("u_otPaletteOffset", K::Float)
            .with("u_screenSize", K::Vec2)
            .with("u_nearPlane", K::Float)
            .with("u_farPlane", K::Float)
            .with("u_time", K::Float)
            .with("u_screenRatio", K::Float)
            .with("u_maxRaySteps", K::Float)
            .with("u_minDistance", K::Float)
            .with("u_fractalIters", K::Int)
            .with("u_bailLimit", K::Float)
            .with("u_mandelbulbOn", K::Bool)
            .with("u_derivativeBias", K::Int)
            .with("u_julia", K::Bool)
            .with("u_tetraFactor", K::Int)
            .with("u_tetraScale", K::Float)
            .with("u_shadowRayMinStepsTaken", K::Int)
            .with("u_lightSource", K::Bool)
            .with("u_phongShadingMixFactor", K::Float)
            .with("u_showBgGradient", K::Bool)
            .with("u_noiseFactor", K::Float)
            .with("u_fudgeFactor", K::Float)
            .with("u_ambientIntensity", K::Float)
            .with("u_diffuseIntensity", K::Float)
            .with("u_specularIntensity", K::Float)
            .with("u_shininess", K::Float)
            .with("u_gammaCorrection", K::Bool)
    }

    /// Width over height; 1.0 for a degenerate (zero-height) surface.
    pub fn screen_ratio(&self) -> f32 {
        if self.screen_size.y > 0.0 { self.screen_size.x / self.screen_size.y } else { 1.0 }
    }

    /// Binds every shader uniform from `self` and `params` into `sink`.
    pub fn bind(&self, params: &FractalParams, sink: &mut dyn UniformSink) {
        let p = params;

        sink.set_mat4("model", self.model);
        sink.set_mat4("view", self.view);
        sink.set_mat4("projection", self.projection);
        sink.set_float("u_nearPlane", self.near_plane);
        sink.set_float("u_farPlane", self.far_plane);
        sink.set_float("u_time", self.time);
        sink.set_float("u_screenRatio", self.screen_ratio());
        sink.set_vec2("u_screenSize", self.screen_size);
        sink.set_vec3("u_CameraPos", self.camera_position);

        sink.set_float("u_maxRaySteps", p.max_ray_steps);
        sink.set_float("u_minDistance", p.min_distance);
        sink.set_int("u_fractalIters", p.fractal_iters);
        sink.set_float("u_bailLimit", p.bail_limit);

        sink.set_bool("u_mandelbulbOn", p.mandelbulb_on);
        sink.set_int("u_derivativeBias", p.derivative_bias);
        sink.set_float("u_power", p.power);
        sink.set_bool("u_julia", p.julia);
        sink.set_vec3("u_juliaC", Vec3::from_array(p.julia_c));

        sink.set_int("u_tetraFactor", p.effective_tetra_factor());
        sink.set_float("u_tetraScale", p.tetra_scale);

        sink.set_vec4("u_orbitStrength", Vec4::from_array(p.orbit_strength));
        sink.set_vec3("u_color0", Vec3::from_array(p.ot_color0));
        sink.set_vec3("u_color1", Vec3::from_array(p.ot_color1));
        sink.set_vec3("u_color2", Vec3::from_array(p.ot_color2));
        sink.set_vec3("u_color3", Vec3::from_array(p.ot_color3));
        sink.set_vec3("u_colorBase", Vec3::from_array(p.ot_color_base));
        sink.set_float("u_baseColorStrength", p.ot_base_strength);
        sink.set_float("u_otDist0to1", p.ot_dist0to1);
        sink.set_float("u_otDist1to2", p.ot_dist1to2);
        sink.set_float("u_otDist2to3", p.ot_dist2to3);
        sink.set_float("u_otDist3to0", p.ot_dist3to0);
        sink.set_float("u_otCycleIntensity", p.ot_cycle_intensity);
        sink.set_float("u_otPaletteOffset", p.ot_palette_offset);

        sink.set_int("u_shadowRayMinStepsTaken", p.shadow_ray_min_steps_taken);
        sink.set_bool("u_lightSource", p.light_source);
        sink.set_float("u_phongShadingMixFactor", p.phong_shading_mix_factor);
        sink.set_vec3("u_lightPos", Vec3::from_array(p.light_pos));
        sink.set_float("u_shadowBrightness", p.shadow_brightness);

        sink.set_vec3("u_bgColor", Vec3::from_array(p.bg_color));
        sink.set_vec3("u_glowColor", Vec3::from_array(p.glow_color));
        sink.set_float("u_glowFactor", p.glow_factor);
        sink.set_bool("u_showBgGradient", p.show_bg_gradient);
        sink.set_float("u_noiseFactor", p.noise_factor);
        sink.set_float("u_fudgeFactor", p.fudge_factor);
        sink.set_float("u_ambientIntensity", p.ambient_intensity);
        sink.set_float("u_diffuseIntensity", p.diffuse_intensity);
        sink.set_float("u_specularIntensity", p.specular_intensity);
        sink.set_float("u_shininess", p.shininess);
        sink.set_bool("u_gammaCorrection", p.gamma_correction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::UniformBlock;

    /// Records every binding call as `(name, kind)`.
    #[derive(Default)]
    struct Recorder(Vec<(String, UniformKind)>);

    impl UniformSink for Recorder {
        fn set_float(&mut self, name: &str, _: f32) {
            self.0.push((name.to_string(), UniformKind::Float));
        }
        fn set_int(&mut self, name: &str, _: i32) {
            self.0.push((name.to_string(), UniformKind::Int));
        }
        fn set_bool(&mut self, name: &str, _: bool) {
            self.0.push((name.to_string(), UniformKind::Bool));
        }
        fn set_vec2(&mut self, name: &str, _: Vec2) {
            self.0.push((name.to_string(), UniformKind::Vec2));
        }
        fn set_vec3(&mut self, name: &str, _: Vec3) {
            self.0.push((name.to_string(), UniformKind::Vec3));
        }
        fn set_vec4(&mut self, name: &str, _: Vec4) {
            self.0.push((name.to_string(), UniformKind::Vec4));
        }
        fn set_mat4(&mut self, name: &str, _: Mat4) {
            self.0.push((name.to_string(), UniformKind::Mat4));
        }
    }

    fn frame() -> FrameUniforms {
        FrameUniforms {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            near_plane: 0.1,
            far_plane: 100.0,
            time: 2.5,
            screen_size: Vec2::new(1600.0, 800.0),
            camera_position: Vec3::new(0.0, 0.0, 3.0),
        }
    }

    #[test]
    fn bind_covers_layout_exactly() {
        let mut rec = Recorder::default();
        frame().bind(&FractalParams::default(), &mut rec);

        let layout = FrameUniforms::layout();
        assert_eq!(rec.0.len(), layout.fields().len());
        for (name, kind) in &rec.0 {
            let field = layout.field(name).unwrap_or_else(|| panic!("`{name}` not in layout"));
            assert_eq!(field.kind, *kind, "kind of `{name}`");
        }
    }

    #[test]
    fn layout_size_is_16_aligned() {
        assert_eq!(FrameUniforms::layout().size() % 16, 0);
    }

    #[test]
    fn screen_ratio_handles_zero_height() {
        let mut f = frame();
        assert_eq!(f.screen_ratio(), 2.0);
        f.screen_size = Vec2::new(640.0, 0.0);
        assert_eq!(f.screen_ratio(), 1.0);
    }

    #[test]
    fn tetra_factor_bound_through_toggle() {
        let mut block = UniformBlock::new(FrameUniforms::layout());
        let params = FractalParams { tetra_factor: 3, ..Default::default() };
        frame().bind(&params, &mut block);
        let v: i32 = bytemuck::pod_read_unaligned(block.member_bytes("u_tetraFactor").unwrap());
        assert_eq!(v, 0);

        let params = FractalParams { recursive_tetra_on: true, ..params };
        frame().bind(&params, &mut block);
        let v: i32 = bytemuck::pod_read_unaligned(block.member_bytes("u_tetraFactor").unwrap());
        assert_eq!(v, 3);
    }

    #[test]
    fn shadow_brightness_keeps_fraction() {
        let mut block = UniformBlock::new(FrameUniforms::layout());
        frame().bind(&FractalParams::default(), &mut block);
        let v: f32 = bytemuck::pod_read_unaligned(block.member_bytes("u_shadowBrightness").unwrap());
        assert_eq!(v, 0.2);
    }
}
