use crate::coords::Viewport;
use crate::input::InputEvent;

use super::ctx::FrameCtx;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What the runtime drives. Input and resize arrive between frames, in order.
pub trait App {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Logical size changed; also called once right after the window opens.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
