/// Initialization parameters for the wgpu rendering context.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO throttles presentation to the display refresh, which paces the
    /// animation loop.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Mobile GPUs favor the low-power adapter.
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// Defaults to the downlevel WebGL2 limits so GLES-class devices qualify.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    pub desired_maximum_frame_latency: u32,

    /// Background color at angle zero.
    pub clear_color: wgpu::Color,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
            desired_maximum_frame_latency: 2,
            // Sky blue.
            clear_color: wgpu::Color {
                r: 0.5,
                g: 0.69,
                b: 1.0,
                a: 1.0,
            },
        }
    }
}
