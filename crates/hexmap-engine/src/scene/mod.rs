//! Renderer-independent draw commands, recorded per frame and replayed by `render`.

mod cmd;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::ZIndex;
pub use list::{DrawItem, DrawList};
