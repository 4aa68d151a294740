//! Screen-space geometry.
//!
//! All CPU-side positions are logical pixels with the origin at the top-left
//! corner, +X to the right and +Y down. Only the shaders know about NDC.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
