//! Pieces every shape pipeline shares.

use bytemuck::{Pod, Zeroable};

/// Source-over for premultiplied colors, on both color and alpha.
pub(super) const PREMULTIPLIED_OVER: wgpu::BlendState = wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING;

/// `@group(0) @binding(0)` in every shape shader. Padded to 16 bytes for uniform layout rules.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

impl ViewportUniform {
    pub const SIZE: wgpu::BufferSize = match wgpu::BufferSize::new(size_of::<Self>() as u64) {
        Some(size) => size,
        None => panic!("ViewportUniform is zero-sized"),
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { size: [width.max(1.0), height.max(1.0)], _pad: [0.0; 2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_sixteen_bytes() {
        assert_eq!(ViewportUniform::SIZE.get(), 16);
    }

    #[test]
    fn degenerate_viewport_is_clamped() {
        assert_eq!(ViewportUniform::new(0.0, 600.0).size, [1.0, 600.0]);
    }
}
