use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::translate::{translate_window_event, PointerState};
use crate::host::{Command, Host, PollEvent};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Where the save-state blob survives between runs. `None` keeps it in memory.
    pub state_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "cardboard".to_string(),
            initial_size: LogicalSize::new(720.0, 1280.0),
            state_path: None,
        }
    }
}

/// [`Host`] backed by a `winit` event loop.
///
/// Each poll pumps the event loop once with the requested timeout and queues
/// whatever the platform delivered. Window lifetime follows the platform's
/// resume/suspend notifications.
pub struct WinitHost {
    event_loop: EventLoop<()>,
    pump: Pump,
    restored: Option<Vec<u8>>,
}

impl WinitHost {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let restored = match &config.state_path {
            Some(path) => read_state_file(path)?,
            None => None,
        };
        if let Some(bytes) = &restored {
            log::info!("restoring {} bytes of saved state", bytes.len());
        }

        Ok(Self {
            event_loop,
            pump: Pump::new(config),
            restored,
        })
    }

    /// State saved by a previous run, if any.
    pub fn restored_state(&self) -> Option<&[u8]> {
        self.restored.as_deref()
    }

    /// State saved during this run, if any.
    pub fn saved_state(&self) -> Option<&[u8]> {
        self.pump.saved_state.as_deref()
    }

    /// Writes the state saved during this run to the configured state path.
    pub fn persist_saved_state(&self) -> Result<()> {
        let (Some(path), Some(bytes)) = (&self.pump.config.state_path, self.saved_state()) else {
            return Ok(());
        };

        fs::write(path, bytes)
            .with_context(|| format!("failed to write saved state to {}", path.display()))?;
        log::info!("saved {} bytes of state to {}", bytes.len(), path.display());
        Ok(())
    }
}

impl Host for WinitHost {
    type Window = Arc<Window>;

    fn next_event(&mut self, timeout: Option<Duration>) -> PollEvent {
        if let Some(event) = self.pump.pending.pop_front() {
            return event;
        }
        if self.pump.destroy_requested {
            return PollEvent::Timeout;
        }

        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.pump) {
            log::info!("event loop exited with code {code}");
            self.pump.destroy_requested = true;
        }

        self.pump.pending.pop_front().unwrap_or(PollEvent::Timeout)
    }

    fn window(&self) -> Option<&Arc<Window>> {
        self.pump.window.as_ref()
    }

    fn saved_state_buffer(&mut self, len: usize) -> &mut [u8] {
        self.pump.saved_state.insert(vec![0; len])
    }

    fn destroy_requested(&self) -> bool {
        self.pump.destroy_requested
    }
}

/// Reads a saved-state file. A missing file means there is nothing to restore.
fn read_state_file(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("failed to read saved state from {}", path.display()))
        }
    }
}

/// Application handler receiving the pumped platform events.
struct Pump {
    config: RuntimeConfig,
    window: Option<Arc<Window>>,
    pending: VecDeque<PollEvent>,
    pointer: PointerState,
    saved_state: Option<Vec<u8>>,
    destroy_requested: bool,
}

impl Pump {
    fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            window: None,
            pending: VecDeque::new(),
            pointer: PointerState::default(),
            saved_state: None,
            destroy_requested: false,
        }
    }

    fn push(&mut self, command: Command) {
        self.pending.push_back(PollEvent::Command(command));
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;
        Ok(Arc::new(window))
    }
}

impl ApplicationHandler for Pump {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match self.create_window(event_loop) {
                Ok(window) => self.window = Some(window),
                Err(e) => {
                    log::error!("{e:#}");
                    self.destroy_requested = true;
                    return;
                }
            }
        }

        self.push(Command::Start);
        self.push(Command::Resume);
        self.push(Command::WindowReady);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.push(Command::Pause);
        self.push(Command::SaveState);
        self.push(Command::WindowGone);
        self.push(Command::Stop);
        // The engine keeps its own handle until it terminates the context.
        self.window = None;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(|w| w.id()) != Some(id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.push(Command::SaveState);
                self.push(Command::Destroy);
                self.destroy_requested = true;
                event_loop.exit();
            }
            other => {
                if let Some(polled) = translate_window_event(&mut self.pointer, &other) {
                    self.pending.push_back(polled);
                }
            }
        }
    }

    fn memory_warning(&mut self, _event_loop: &ActiveEventLoop) {
        self.push(Command::LowMemory);
    }
}
