//! The winit event loop, the single map window and its GPU context.

mod runtime;
mod translate;

pub use runtime::{Runtime, RuntimeConfig};
