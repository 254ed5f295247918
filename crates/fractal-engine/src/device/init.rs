/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when true, a linear one otherwise.
    ///
    /// The fractal shader applies its own optional gamma curve, so the default
    /// is a linear surface that presents shader output unchanged.
    pub prefer_srgb: bool,

    /// FIFO presentation when true; the lowest-latency supported mode otherwise.
    pub vsync: bool,

    /// Raymarching is fragment-bound, so the discrete GPU is preferred.
    pub power_preference: wgpu::PowerPreference,

    pub required_limits: wgpu::Limits,

    /// Hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
