use std::time::Duration;

use crate::core::{Engine, LifecycleHandler};
use crate::device::Renderer;
use crate::dispatch::handle_input;
use crate::host::{Host, PollEvent};
use crate::sensor::SensorQueue;

/// Control directive returned by one scheduler iteration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Poll timeout for the first poll of an iteration.
///
/// Non-blocking while animating; otherwise blocks until the host has something.
pub fn poll_timeout(animating: bool) -> Option<Duration> {
    if animating { Some(Duration::ZERO) } else { None }
}

/// Top-level loop of the engine thread.
///
/// Each iteration:
/// 1. polls the host, blocking only when not animating
/// 2. dispatches every ready source (commands, input, sensor readiness) until
///    nothing is immediately ready
/// 3. exits after terminating the display if the host requested destroy
/// 4. advances the animation and draws when animating
#[derive(Debug, Default)]
pub struct FrameScheduler {
    iterations: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed iterations (the exiting one included).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Runs until the host requests destroy.
    pub fn run<H, R, Q>(&mut self, host: &mut H, engine: &mut Engine<R, Q>)
    where
        H: Host<Window = R::Window>,
        R: Renderer,
        Q: SensorQueue,
    {
        log::info!("event loop started");
        while self.step(host, engine) == LoopControl::Continue {}
        log::info!("event loop exited after {} iterations", self.iterations);
    }

    /// Runs one iteration of the loop.
    pub fn step<H, R, Q>(&mut self, host: &mut H, engine: &mut Engine<R, Q>) -> LoopControl
    where
        H: Host<Window = R::Window>,
        R: Renderer,
        Q: SensorQueue,
    {
        self.iterations += 1;

        let mut timeout = poll_timeout(engine.is_animating());
        loop {
            match host.next_event(timeout) {
                PollEvent::Timeout => break,
                PollEvent::Command(command) => engine.on_command(host, command),
                PollEvent::Input(event) => {
                    handle_input(host, engine, &event);
                }
                PollEvent::SensorReady => {
                    engine.drain_sensor_events();
                }
            }
            // Only drain what is already pending once something arrived.
            timeout = Some(Duration::ZERO);
        }

        if host.destroy_requested() {
            engine.term_display();
            return LoopControl::Exit;
        }

        engine.update_draw();
        LoopControl::Continue
    }
}
