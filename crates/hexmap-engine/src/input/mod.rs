//! Platform-independent mouse and focus input.
//!
//! The window runtime translates winit events into [`InputEvent`]s; nothing
//! here depends on winit.

mod state;
mod types;

pub(crate) use state::InputState;
pub use types::{
    InputEvent, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    PointerMoveEvent,
};
