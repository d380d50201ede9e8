use std::time::Duration;

use super::Command;
use crate::input::InputEvent;

/// Result of one poll of the host event pump.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PollEvent {
    Command(Command),
    Input(InputEvent),
    /// The sensor event queue has samples pending.
    SensorReady,
    /// Nothing became ready within the timeout.
    Timeout,
}

/// The host side of one lifecycle session.
///
/// Replaces the application handle of the platform glue: the engine gets
/// exclusive access for the duration of each callback.
pub trait Host {
    /// Window handle passed to the renderer on `WindowReady`.
    type Window;

    /// Waits for the next ready event source.
    ///
    /// `None` blocks until something is ready; `Some(Duration::ZERO)` returns
    /// immediately. This is the only suspension point of the engine thread.
    fn next_event(&mut self, timeout: Option<Duration>) -> PollEvent;

    /// Current window, if one is available.
    fn window(&self) -> Option<&Self::Window>;

    /// Allocates host-owned save-state storage of exactly `len` bytes.
    ///
    /// Replaces any state saved earlier in the session.
    fn saved_state_buffer(&mut self, len: usize) -> &mut [u8];

    /// Set when the activity is being destroyed and waits for the engine thread.
    fn destroy_requested(&self) -> bool;

    /// Reports whether the input handler consumed `event`.
    fn finish_input(&mut self, event: &InputEvent, handled: bool) {
        let _ = (event, handled);
    }
}
