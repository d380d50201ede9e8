use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::host::{Command, PollEvent};
use crate::input::{InputEvent, KeyAction, MotionAction};

/// Pointer tracking needed to turn mouse events into motion events.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    position: (f32, f32),
    pressed: bool,
}

/// Maps one window event to what the engine sees, if anything.
///
/// Close requests are handled by the host itself.
pub(crate) fn translate_window_event(
    pointer: &mut PointerState,
    event: &WindowEvent,
) -> Option<PollEvent> {
    match event {
        WindowEvent::Focused(true) => Some(PollEvent::Command(Command::FocusGained)),
        WindowEvent::Focused(false) => Some(PollEvent::Command(Command::FocusLost)),
        WindowEvent::Resized(_) => Some(PollEvent::Command(Command::WindowResized)),
        WindowEvent::RedrawRequested => Some(PollEvent::Command(Command::WindowRedrawNeeded)),

        WindowEvent::KeyboardInput { event, .. } => Some(PollEvent::Input(map_key(event))),

        WindowEvent::CursorMoved { position, .. } => {
            pointer.position = (position.x as f32, position.y as f32);
            pointer.pressed.then(|| motion(MotionAction::Move, pointer.position))
        }

        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => {
            let action = match state {
                ElementState::Pressed => MotionAction::Down,
                ElementState::Released => MotionAction::Up,
            };
            pointer.pressed = *state == ElementState::Pressed;
            Some(motion(action, pointer.position))
        }

        WindowEvent::CursorLeft { .. } if pointer.pressed => {
            pointer.pressed = false;
            Some(motion(MotionAction::Cancel, pointer.position))
        }

        WindowEvent::Touch(Touch {
            phase, location, ..
        }) => {
            let action = match phase {
                TouchPhase::Started => MotionAction::Down,
                TouchPhase::Moved => MotionAction::Move,
                TouchPhase::Ended => MotionAction::Up,
                TouchPhase::Cancelled => MotionAction::Cancel,
            };
            Some(motion(action, (location.x as f32, location.y as f32)))
        }

        _ => None,
    }
}

fn motion(action: MotionAction, (x, y): (f32, f32)) -> PollEvent {
    PollEvent::Input(InputEvent::Motion { action, x, y })
}

fn map_key(event: &KeyEvent) -> InputEvent {
    let code = match event.physical_key {
        PhysicalKey::Code(code) => code as u32,
        // NativeKeyCode has no stable numeric form.
        PhysicalKey::Unidentified(_) => 0,
    };
    let action = match event.state {
        ElementState::Pressed => KeyAction::Down,
        ElementState::Released => KeyAction::Up,
    };
    InputEvent::Key {
        code,
        action,
        repeat: event.repeat,
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;

    use super::*;

    fn device() -> DeviceId {
        // SAFETY: only compared against other ids, never passed to the platform.
        unsafe { DeviceId::dummy() }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    fn left_button(state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button: MouseButton::Left,
        }
    }

    #[test]
    fn focus_and_resize_become_commands() {
        let mut pointer = PointerState::default();
        let gained = translate_window_event(&mut pointer, &WindowEvent::Focused(true));
        let lost = translate_window_event(&mut pointer, &WindowEvent::Focused(false));
        let resized =
            translate_window_event(&mut pointer, &WindowEvent::Resized(PhysicalSize::new(1, 2)));

        assert_eq!(gained, Some(PollEvent::Command(Command::FocusGained)));
        assert_eq!(lost, Some(PollEvent::Command(Command::FocusLost)));
        assert_eq!(resized, Some(PollEvent::Command(Command::WindowResized)));
    }

    #[test]
    fn hover_is_not_motion() {
        let mut pointer = PointerState::default();
        assert_eq!(translate_window_event(&mut pointer, &cursor_moved(5.0, 6.0)), None);
    }

    #[test]
    fn drag_becomes_down_move_up_at_cursor() {
        let mut pointer = PointerState::default();
        translate_window_event(&mut pointer, &cursor_moved(10.0, 20.0));

        let down = translate_window_event(&mut pointer, &left_button(ElementState::Pressed));
        let moved = translate_window_event(&mut pointer, &cursor_moved(11.0, 22.0));
        let up = translate_window_event(&mut pointer, &left_button(ElementState::Released));

        assert_eq!(
            down,
            Some(motion(MotionAction::Down, (10.0, 20.0)))
        );
        assert_eq!(moved, Some(motion(MotionAction::Move, (11.0, 22.0))));
        assert_eq!(up, Some(motion(MotionAction::Up, (11.0, 22.0))));
        assert_eq!(translate_window_event(&mut pointer, &cursor_moved(0.0, 0.0)), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut pointer = PointerState::default();
        let right = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        };
        assert_eq!(translate_window_event(&mut pointer, &right), None);
    }
}
