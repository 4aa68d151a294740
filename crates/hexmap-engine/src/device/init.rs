/// Surface and device preferences applied when the window's GPU context is built.
///
/// The defaults target a plain 2D map: an sRGB swapchain, vsync, and no
/// optional features.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick `*Srgb` swapchain formats first so premultiplied colors blend linearly.
    pub prefer_srgb: bool,
    pub present_mode: wgpu::PresentMode,
    /// Ignored if the surface does not list it; the first listed mode is used instead.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,
    pub features: wgpu::Features,
    pub limits: wgpu::Limits,
    /// Frames the presentation engine may queue ahead.
    pub frame_latency: u32,
}

impl GpuInit {
    pub fn with_present_mode(mut self, mode: wgpu::PresentMode) -> Self {
        self.present_mode = mode;
        self
    }

    pub fn with_frame_latency(mut self, frames: u32) -> Self {
        self.frame_latency = frames.max(1);
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            features: wgpu::Features::empty(),
            limits: wgpu::Limits::default(),
            frame_latency: 2,
        }
    }
}
