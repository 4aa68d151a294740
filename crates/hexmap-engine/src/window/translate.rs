//! winit → [`InputEvent`].

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitButton, MouseScrollDelta, WindowEvent};

use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    PointerMoveEvent,
};

/// `None` for events the map does not consume, and for button edges that
/// arrive before the first cursor position is known.
pub(super) fn translate(
    event: &WindowEvent,
    scale_factor: f64,
    state: &InputState,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = logical(*position, scale_factor);
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
        }
        WindowEvent::MouseInput { state: edge, button, .. } => {
            return button_edge(*button, *edge, state);
        }
        WindowEvent::MouseWheel { delta, .. } => InputEvent::MouseWheel {
            delta: match *delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x, y },
                MouseScrollDelta::PixelDelta(p) => {
                    let (x, y) = logical(p, scale_factor);
                    MouseWheelDelta::Pixel { x, y }
                }
            },
        },
        _ => return None,
    };
    Some(ev)
}

/// Stamps a button edge with the last known cursor position, which survives
/// the cursor leaving the window.
fn button_edge(
    button: WinitButton,
    edge: ElementState,
    state: &InputState,
) -> Option<InputEvent> {
    let pos = state.pointer_pos?;
    Some(InputEvent::PointerButton(PointerButtonEvent {
        button: button_from(button),
        state: match edge {
            ElementState::Pressed => MouseButtonState::Pressed,
            ElementState::Released => MouseButtonState::Released,
        },
        x: pos.x,
        y: pos.y,
    }))
}

fn logical(pos: PhysicalPosition<f64>, scale_factor: f64) -> (f32, f32) {
    let p = pos.to_logical::<f64>(scale_factor);
    (p.x as f32, p.y as f32)
}

fn button_from(b: WinitButton) -> MouseButton {
    match b {
        WinitButton::Left => MouseButton::Left,
        WinitButton::Right => MouseButton::Right,
        WinitButton::Middle => MouseButton::Middle,
        WinitButton::Back => MouseButton::Back,
        WinitButton::Forward => MouseButton::Forward,
        WinitButton::Other(v) => MouseButton::Other(v),
    }
}
