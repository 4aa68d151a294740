use crate::coords::Vec2;

use super::types::InputEvent;

/// What the runtime remembers between window events.
///
/// winit reports button edges without a position, so the last cursor
/// position is kept here and stamped onto them.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    /// `None` until the first cursor event. Kept when the cursor leaves the
    /// window, so a release outside it still lands at the last known spot.
    pub pointer_pos: Option<Vec2>,
}

impl InputState {
    pub fn track(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(m) => self.pointer_pos = Some(m.position()),
            InputEvent::PointerButton(b) => self.pointer_pos = Some(b.position()),
            InputEvent::PointerLeft | InputEvent::MouseWheel { .. } | InputEvent::Focused(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

    #[test]
    fn moves_and_buttons_update_position() {
        let mut state = InputState::default();
        assert_eq!(state.pointer_pos, None);

        state.track(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        assert_eq!(state.pointer_pos, Some(Vec2::new(1.0, 2.0)));

        state.track(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 10.0,
            y: 20.0,
        }));
        assert_eq!(state.pointer_pos, Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn pointer_left_keeps_last_position() {
        let mut state = InputState::default();
        state.track(&InputEvent::PointerMoved(PointerMoveEvent { x: 150.0, y: 100.0 }));
        state.track(&InputEvent::PointerLeft);
        state.track(&InputEvent::Focused(true));
        assert_eq!(state.pointer_pos, Some(Vec2::new(150.0, 100.0)));
    }
}
