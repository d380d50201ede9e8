//! Command dispatch.
//!
//! [`Engine`] implements [`LifecycleHandler`]: lifecycle commands drive the
//! rendering context and the sensor stream, input goes to the default input
//! handler. [`handle_cmd`] and [`handle_input`] expose the same dispatcher to
//! hosts that call out through free functions.

use crate::core::{Engine, LifecycleHandler, Snapshot};
use crate::device::Renderer;
use crate::host::{Command, Host};
use crate::input::{handle_input_event, InputEvent};
use crate::sensor::SensorQueue;

impl<R, Q, H> LifecycleHandler<H> for Engine<R, Q>
where
    R: Renderer,
    Q: SensorQueue,
    H: Host<Window = R::Window> + ?Sized,
{
    fn on_command(&mut self, host: &mut H, command: Command) {
        log::debug!("command: {command:?}");

        match command {
            Command::SaveState => self.on_save_state(host),
            Command::WindowReady => self.on_window_ready(host),
            Command::WindowGone => self.term_display(),
            Command::FocusGained => self.on_focus_gained(),
            Command::FocusLost => self.on_focus_lost(),
            other => log::debug!("ignoring command {other:?}"),
        }
    }

    fn on_input(&mut self, _host: &mut H, event: &InputEvent) -> bool {
        handle_input_event(event)
    }
}

impl<R: Renderer, Q: SensorQueue> Engine<R, Q> {
    fn on_save_state<H>(&mut self, host: &mut H)
    where
        H: Host + ?Sized,
    {
        let buf = host.saved_state_buffer(Snapshot::SIZE);
        if let Err(e) = self.save_state(buf) {
            log::error!("failed to save state: {e}");
        }
    }

    fn on_window_ready<H>(&mut self, host: &mut H)
    where
        H: Host<Window = R::Window> + ?Sized,
    {
        let Some(window) = host.window() else {
            log::debug!("window ready without a window handle");
            return;
        };

        if self.has_context() {
            log::debug!("window ready with an active context");
            return;
        }

        match self.init_display(window) {
            // Draw immediately so the first frame is not blank.
            Ok(()) => {
                self.draw_frame();
            }
            Err(e) => log::error!("failed to initialize display: {e}"),
        }
    }

    fn on_focus_gained(&mut self) {
        let period = self.config().sensor_period;
        match self.sensors_mut().enable(period) {
            Ok(true) => log::debug!("sensor enabled at {}us", period.as_micros()),
            Ok(false) => {}
            Err(e) => log::warn!("{e}"),
        }

        if self.config().animate_on_focus && self.has_context() {
            self.set_animating(true);
        }
    }

    fn on_focus_lost(&mut self) {
        match self.sensors_mut().disable() {
            Ok(true) => log::debug!("sensor disabled"),
            Ok(false) => {}
            Err(e) => log::warn!("{e}"),
        }

        self.set_animating(false);
        self.draw_frame();
    }
}

/// Dispatches `command` through `handler`, for hosts that call out to a
/// command function rather than a handler object.
pub fn handle_cmd<H, L>(host: &mut H, handler: &mut L, command: Command)
where
    H: Host + ?Sized,
    L: LifecycleHandler<H> + ?Sized,
{
    handler.on_command(host, command);
}

/// Dispatches `event` through `handler` and reports the result to the host.
pub fn handle_input<H, L>(host: &mut H, handler: &mut L, event: &InputEvent) -> bool
where
    H: Host + ?Sized,
    L: LifecycleHandler<H> + ?Sized,
{
    let handled = handler.on_input(host, event);
    host.finish_input(event, handled);
    handled
}
