use super::InputEvent;

/// Default input handling.
///
/// Touches are logged and consumed. Keys are left to the host's default
/// dispatching (back button, volume keys).
pub fn handle_input_event(event: &InputEvent) -> bool {
    match *event {
        InputEvent::Key { .. } => false,
        InputEvent::Motion { action, x, y } => {
            log::trace!("touch {action:?} at ({x}, {y})");
            true
        }
    }
}
