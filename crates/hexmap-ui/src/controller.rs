//! Mouse gesture state machine.
//!
//! Turns raw pointer events into [`MapAction`]s. The controller owns no map
//! state; it only reads the view to convert screen motion into world motion.

use hexmap_engine::coords::Vec2;
use hexmap_engine::input::{InputEvent, MouseButton, MouseButtonState};

use crate::view::{wrap_delta, ViewTransform};

/// Manhattan distance (logical px) a left press must travel before it becomes a pan.
pub const DRAG_THRESHOLD: f32 = 3.0;
/// Zoom multiplier per wheel line scrolled up.
pub const ZOOM_IN_STEP: f32 = 1.05;
/// Zoom multiplier per wheel line scrolled down.
pub const ZOOM_OUT_STEP: f32 = 0.95;

/// Current gesture.
///
/// Transitions:
/// - `Idle` --left down--> `Pressed`
/// - `Pressed` --move beyond threshold--> `Panning`
/// - `Pressed` --left up--> `Idle` (emits a click)
/// - `Panning` --left up--> `Idle`
/// - `Idle` --right down--> `Rotating` --right up--> `Idle`
/// - any --focus lost--> `Idle`
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    /// Left button is down and the pointer has not left the click slop yet.
    Pressed { origin: Vec2 },
    Panning { last: Vec2 },
    Rotating { last_angle: f32 },
}

/// Edit requested by a gesture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MapAction {
    /// Left click released at this screen point.
    Click(Vec2),
    /// World-space pan offset.
    Pan(Vec2),
    /// Rotation delta in radians.
    Rotate(f32),
    /// Zoom multiplier.
    Zoom(f32),
    Reset,
}

#[derive(Debug, Clone)]
pub struct InputController {
    gesture: Gesture,
    drag_threshold: f32,
    zoom_in_step: f32,
    zoom_out_step: f32,
}

impl InputController {
    pub fn new(drag_threshold: f32, zoom_in_step: f32, zoom_out_step: f32) -> Self {
        Self {
            gesture: Gesture::Idle,
            drag_threshold,
            zoom_in_step,
            zoom_out_step,
        }
    }

    #[inline]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: &InputEvent, view: &ViewTransform) -> Option<MapAction> {
        match *event {
            InputEvent::PointerButton(b) => self.on_button(b.button, b.state, b.position(), view),
            InputEvent::PointerMoved(m) => self.on_move(m.position(), view),
            InputEvent::MouseWheel { delta } => self.on_wheel(delta.lines_y()),
            InputEvent::Focused(false) => {
                self.transition(Gesture::Idle);
                None
            }
            InputEvent::Focused(true) | InputEvent::PointerLeft => None,
        }
    }

    fn on_button(
        &mut self,
        button: MouseButton,
        state: MouseButtonState,
        pos: Vec2,
        view: &ViewTransform,
    ) -> Option<MapAction> {
        use MouseButtonState::{Pressed, Released};

        match (button, state, self.gesture) {
            (MouseButton::Left, Pressed, Gesture::Idle) => {
                self.transition(Gesture::Pressed { origin: pos });
                None
            }
            (MouseButton::Left, Released, Gesture::Pressed { .. }) => {
                self.transition(Gesture::Idle);
                Some(MapAction::Click(pos))
            }
            (MouseButton::Left, Released, Gesture::Panning { .. }) => {
                self.transition(Gesture::Idle);
                None
            }
            (MouseButton::Right, Pressed, Gesture::Idle) => {
                self.transition(Gesture::Rotating { last_angle: view.angle_at(pos) });
                None
            }
            (MouseButton::Right, Released, Gesture::Rotating { .. }) => {
                self.transition(Gesture::Idle);
                None
            }
            (MouseButton::Middle, Released, _) => Some(MapAction::Reset),
            _ => None,
        }
    }

    fn on_move(&mut self, pos: Vec2, view: &ViewTransform) -> Option<MapAction> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Pressed { origin } => {
                let delta = pos - origin;
                if delta.manhattan() <= self.drag_threshold {
                    return None;
                }
                self.transition(Gesture::Panning { last: pos });
                Some(MapAction::Pan(view.screen_delta_to_world(delta)))
            }
            Gesture::Panning { last } => {
                self.gesture = Gesture::Panning { last: pos };
                Some(MapAction::Pan(view.screen_delta_to_world(pos - last)))
            }
            Gesture::Rotating { last_angle } => {
                let angle = view.angle_at(pos);
                self.gesture = Gesture::Rotating { last_angle: angle };
                let delta = wrap_delta(angle - last_angle);
                (delta != 0.0).then_some(MapAction::Rotate(delta))
            }
        }
    }

    fn on_wheel(&self, lines: f32) -> Option<MapAction> {
        if !lines.is_finite() || lines == 0.0 {
            return None;
        }
        let factor = if lines > 0.0 {
            self.zoom_in_step.powf(lines)
        } else {
            self.zoom_out_step.powf(-lines)
        };
        Some(MapAction::Zoom(factor))
    }

    fn transition(&mut self, next: Gesture) {
        if std::mem::discriminant(&self.gesture) != std::mem::discriminant(&next) {
            log::trace!("gesture {:?} -> {:?}", self.gesture, next);
        }
        self.gesture = next;
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD, ZOOM_IN_STEP, ZOOM_OUT_STEP)
    }
}
