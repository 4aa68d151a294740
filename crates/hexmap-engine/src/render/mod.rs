//! wgpu renderers for scene draw lists.
//!
//! Each renderer lazily builds and owns its pipeline and buffers. Geometry
//! arrives in logical px; the vertex stage maps it to NDC with a viewport
//! uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
