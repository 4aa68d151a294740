//! wgpu device, queue and window surface.

mod gpu;
mod init;
mod surface;

pub use gpu::Gpu;
pub use init::GpuInit;

/// One acquired swapchain image plus the encoder recording into it.
///
/// Drop or submit it before the next `begin_frame`: the surface hands out one image at a time.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the frame loop should do after `get_current_texture` failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated; the surface was configured again.
    Reconfigured,
    /// Timeout or other transient failure.
    SkipFrame,
    /// Out of memory. The runtime exits.
    Fatal,
}
