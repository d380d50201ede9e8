use crate::host::{Command, Host};
use crate::input::InputEvent;

/// Callback contract registered with the host event pump.
pub trait LifecycleHandler<H: Host + ?Sized> {
    /// Processes one lifecycle command.
    fn on_command(&mut self, host: &mut H, command: Command);

    /// Processes one input event. Returns true if the event was consumed.
    fn on_input(&mut self, host: &mut H, event: &InputEvent) -> bool {
        let _ = (host, event);
        false
    }
}
