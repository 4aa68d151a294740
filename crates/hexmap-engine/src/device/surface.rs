//! Swapchain format selection, (re)configuration and error triage.

use winit::dpi::PhysicalSize;

use super::{GpuInit, SurfaceErrorAction};

const SRGB_FORMATS: [wgpu::TextureFormat; 2] = [
    wgpu::TextureFormat::Bgra8UnormSrgb,
    wgpu::TextureFormat::Rgba8UnormSrgb,
];

pub(crate) fn pick_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = SRGB_FORMATS
        .into_iter()
        .find(|f| prefer_srgb && caps.formats.contains(f));
    srgb.or_else(|| caps.formats.first().copied())
}

pub(crate) fn pick_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    match requested {
        Some(m) if caps.alpha_modes.contains(&m) => m,
        _ => caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto),
    }
}

/// First configuration for a freshly created surface.
pub(crate) fn initial_config(
    caps: &wgpu::SurfaceCapabilities,
    init: &GpuInit,
    size: PhysicalSize<u32>,
) -> Option<wgpu::SurfaceConfiguration> {
    Some(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: pick_format(caps, init.prefer_srgb)?,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: init.present_mode,
        alpha_mode: pick_alpha_mode(caps, init.alpha_mode),
        view_formats: Vec::new(),
        desired_maximum_frame_latency: init.frame_latency,
    })
}

/// Stores `new_size` and reconfigures, unless the window is minimized (0x0),
/// which wgpu refuses to configure.
pub(crate) fn resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    new_size: PhysicalSize<u32>,
) -> bool {
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }
    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
    true
}

pub(crate) fn triage_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    drawable: bool,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    use wgpu::SurfaceError as E;

    match err {
        E::Lost | E::Outdated => {
            if drawable {
                surface.configure(device, config);
            }
            log::debug!("surface {err:?}; reconfigured");
            SurfaceErrorAction::Reconfigured
        }
        E::OutOfMemory => {
            log::error!("surface out of memory");
            SurfaceErrorAction::Fatal
        }
        E::Timeout | E::Other => {
            log::warn!("surface {err:?}; frame skipped");
            SurfaceErrorAction::SkipFrame
        }
    }
}
