use serde::{Deserialize, Serialize};

/// Fractal shader parameters.
///
/// Plain record; values are passed to the shader unchanged. Every field has a
/// default, and `#[serde(default)]` lets a TOML file override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    // Renderer
    pub max_ray_steps: f32,
    pub base_min_distance: f32,
    pub min_distance: f32,
    pub min_distance_factor: i32,
    pub fractal_iters: i32,
    pub bail_limit: f32,

    // Mandelbulb
    pub power: f32,
    pub derivative_bias: i32,
    pub julia: bool,
    pub julia_c: [f32; 3],
    pub mandelbulb_on: bool,

    // Recursive tetrahedron
    pub tetra_factor: i32,
    pub tetra_scale: f32,
    pub recursive_tetra_on: bool,

    pub fudge_factor: f32,
    pub noise_factor: f32,

    // Background / glow
    pub bg_color: [f32; 3],
    pub glow_color: [f32; 3],
    pub glow_factor: f32,
    pub show_bg_gradient: bool,

    // Orbit trap coloring
    pub orbit_strength: [f32; 4],
    pub ot_color0: [f32; 3],
    pub ot_color1: [f32; 3],
    pub ot_color2: [f32; 3],
    pub ot_color3: [f32; 3],
    pub ot_color_base: [f32; 3],
    pub ot_base_strength: f32,
    pub ot_dist0to1: f32,
    pub ot_dist1to2: f32,
    pub ot_dist2to3: f32,
    pub ot_dist3to0: f32,
    pub ot_cycle_intensity: f32,
    pub ot_palette_offset: f32,

    // Lighting
    pub shadow_ray_min_steps_taken: i32,
    pub light_pos: [f32; 3],
    pub shadow_brightness: f32,
    pub light_source: bool,
    pub phong_shading_mix_factor: f32,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    pub specular_intensity: f32,
    pub shininess: f32,
    pub gamma_correction: bool,
}

impl FractalParams {
    /// Tetrahedron fold count as seen by the shader: zero unless the recursive
    /// tetrahedron is switched on.
    pub fn effective_tetra_factor(&self) -> i32 {
        if self.recursive_tetra_on { self.tetra_factor } else { 0 }
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        let base_min_distance = 0.00001;
        Self {
            max_ray_steps: 1000.0,
            base_min_distance,
            min_distance: base_min_distance,
            min_distance_factor: 0,
            fractal_iters: 100,
            bail_limit: 5.0,

            power: 12.0,
            derivative_bias: 1,
            julia: false,
            julia_c: [0.86, 0.23, -0.5],
            mandelbulb_on: true,

            tetra_factor: 1,
            tetra_scale: 1.0,
            recursive_tetra_on: false,

            fudge_factor: 1.0,
            noise_factor: 0.9,

            bg_color: [0.8, 0.85, 1.0],
            glow_color: [0.75, 0.9, 1.0],
            glow_factor: 1.0,
            show_bg_gradient: true,

            orbit_strength: [-1.0, -1.8, -1.4, 1.3],
            ot_color0: [0.3, 0.5, 0.2],
            ot_color1: [0.6, 0.2, 0.5],
            ot_color2: [0.25, 0.7, 0.9],
            ot_color3: [0.2, 0.45, 0.25],
            ot_color_base: [0.3, 0.6, 0.76],
            ot_base_strength: 0.5,
            ot_dist0to1: 0.3,
            ot_dist1to2: 1.0,
            ot_dist2to3: 0.4,
            ot_dist3to0: 0.2,
            ot_cycle_intensity: 5.0,
            ot_palette_offset: 0.0,

            shadow_ray_min_steps_taken: 5,
            light_pos: [3.0, 3.0, 10.0],
            shadow_brightness: 0.2,
            light_source: false,
            phong_shading_mix_factor: 1.0,
            ambient_intensity: 1.0,
            diffuse_intensity: 1.0,
            specular_intensity: 1.0,
            shininess: 32.0,
            gamma_correction: false,
        }
    }
}
