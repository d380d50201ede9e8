//! Scripted fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use crate::bridge::{AssetManager, OpenAsset, VmRuntime};
use crate::core::{Engine, EngineConfig};
use crate::device::{FrameState, InitError, Renderer, SurfaceSize};
use crate::host::{Command, Host, PollEvent};
use crate::input::InputEvent;
use crate::sensor::{
    SensorError, SensorKind, SensorManager, SensorMonitor, SensorQueue, LOOPER_ID_USER,
};

pub type TestEngine = Engine<RecordingRenderer, RecordingQueue>;

pub fn engine_with(sensors: RecordingSensors, saved: Option<&[u8]>) -> (TestEngine, RenderLog) {
    engine_with_config(EngineConfig::default(), sensors, saved)
}

pub fn engine_with_config(
    config: EngineConfig,
    sensors: RecordingSensors,
    saved: Option<&[u8]>,
) -> (TestEngine, RenderLog) {
    let renderer = RecordingRenderer::default();
    let log = renderer.log.clone();
    let monitor = SensorMonitor::new(&sensors, SensorKind::Accelerometer, LOOPER_ID_USER);
    (Engine::new(config, renderer, monitor, saved), log)
}

// ── renderer ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FakeWindow {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct FakeContext {
    size: SurfaceSize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderCall {
    Init,
    InitFailed,
    Draw,
    Terminate { had_context: bool },
}

#[derive(Default)]
struct RenderState {
    calls: Vec<RenderCall>,
    frames: Vec<FrameState>,
    fail_next_init: bool,
}

/// Shared view of everything a [`RecordingRenderer`] was asked to do.
#[derive(Clone, Default)]
pub struct RenderLog(Rc<RefCell<RenderState>>);

impl RenderLog {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.0.borrow().calls.clone()
    }

    pub fn draws(&self) -> usize {
        self.0.borrow().frames.len()
    }

    pub fn terminations(&self) -> usize {
        self.0
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, RenderCall::Terminate { .. }))
            .count()
    }

    pub fn last_frame(&self) -> Option<FrameState> {
        self.0.borrow().frames.last().copied()
    }

    pub fn fail_next_init(&self) {
        self.0.borrow_mut().fail_next_init = true;
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    log: RenderLog,
}

impl RecordingRenderer {
    pub const WINDOW: FakeWindow = FakeWindow { width: 640, height: 480 };
}

impl Renderer for RecordingRenderer {
    type Window = FakeWindow;
    type Context = FakeContext;

    fn init(&mut self, window: &FakeWindow) -> Result<FakeContext, InitError> {
        let mut state = self.log.0.borrow_mut();
        if std::mem::take(&mut state.fail_next_init) {
            state.calls.push(RenderCall::InitFailed);
            return Err(InitError::Status(-1));
        }
        state.calls.push(RenderCall::Init);
        Ok(FakeContext {
            size: SurfaceSize::new(window.width, window.height),
        })
    }

    fn surface_size(&self, context: &FakeContext) -> SurfaceSize {
        context.size
    }

    fn draw(&mut self, _context: &mut FakeContext, frame: &FrameState) {
        let mut state = self.log.0.borrow_mut();
        state.calls.push(RenderCall::Draw);
        state.frames.push(*frame);
    }

    fn terminate(&mut self, context: Option<FakeContext>) {
        self.log.0.borrow_mut().calls.push(RenderCall::Terminate {
            had_context: context.is_some(),
        });
    }
}

// ── sensors ───────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SensorCall {
    Enable,
    SetRate(u64),
    Disable,
}

#[derive(Default)]
struct SensorState {
    has_sensor: bool,
    calls: Vec<SensorCall>,
    pending: usize,
    fail_enable: Option<i32>,
}

#[derive(Debug, Copy, Clone)]
pub struct FakeSensor;

/// Sensor manager and queue sharing one call log.
#[derive(Clone, Default)]
pub struct RecordingSensors(Rc<RefCell<SensorState>>);

impl RecordingSensors {
    pub fn with_sensor() -> Self {
        let sensors = Self::default();
        sensors.0.borrow_mut().has_sensor = true;
        sensors
    }

    pub fn without_sensor() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SensorCall> {
        self.0.borrow().calls.clone()
    }

    pub fn push_samples(&self, n: usize) {
        self.0.borrow_mut().pending += n;
    }

    pub fn pending_samples(&self) -> usize {
        self.0.borrow().pending
    }

    pub fn fail_enable(&self, status: i32) {
        self.0.borrow_mut().fail_enable = Some(status);
    }
}

pub struct RecordingQueue(Rc<RefCell<SensorState>>);

impl SensorManager for RecordingSensors {
    type Queue = RecordingQueue;

    fn default_sensor(&self, _kind: SensorKind) -> Option<FakeSensor> {
        self.0.borrow().has_sensor.then_some(FakeSensor)
    }

    fn create_event_queue(&self, _ident: i32) -> RecordingQueue {
        RecordingQueue(self.0.clone())
    }
}

impl SensorQueue for RecordingQueue {
    type Sensor = FakeSensor;
    type Sample = [f32; 3];

    fn enable_sensor(&mut self, _sensor: &FakeSensor) -> Result<(), SensorError> {
        let mut state = self.0.borrow_mut();
        if let Some(status) = state.fail_enable {
            return Err(SensorError::Enable(status));
        }
        state.calls.push(SensorCall::Enable);
        Ok(())
    }

    fn set_event_rate(&mut self, _sensor: &FakeSensor, period: Duration) -> Result<(), SensorError> {
        self.0
            .borrow_mut()
            .calls
            .push(SensorCall::SetRate(period.as_micros() as u64));
        Ok(())
    }

    fn disable_sensor(&mut self, _sensor: &FakeSensor) -> Result<(), SensorError> {
        self.0.borrow_mut().calls.push(SensorCall::Disable);
        Ok(())
    }

    fn next_sample(&mut self) -> Option<[f32; 3]> {
        let mut state = self.0.borrow_mut();
        if state.pending == 0 {
            return None;
        }
        state.pending -= 1;
        Some([0.0, 9.81, 0.0])
    }
}

// ── host ──────────────────────────────────────────────────────────────────

enum Scripted {
    Event(PollEvent),
    /// Nothing is ready: the poll times out.
    Idle,
    /// The activity is being destroyed.
    Destroy,
}

/// Host whose event pump replays a script.
///
/// An exhausted script behaves like [`ScriptedHost::idle`].
pub struct ScriptedHost {
    window: Option<FakeWindow>,
    script: VecDeque<Scripted>,
    polls: Vec<Option<Duration>>,
    saved_state: Option<Vec<u8>>,
    destroy_requested: bool,
    finished: Vec<(InputEvent, bool)>,
    sensors: Option<RecordingSensors>,
}

impl ScriptedHost {
    pub fn with_window() -> Self {
        Self {
            window: Some(RecordingRenderer::WINDOW),
            ..Self::without_window()
        }
    }

    pub fn without_window() -> Self {
        Self {
            window: None,
            script: VecDeque::new(),
            polls: Vec::new(),
            saved_state: None,
            destroy_requested: false,
            finished: Vec::new(),
            sensors: None,
        }
    }

    /// Each scripted sensor readiness event queues three samples on `sensors`.
    pub fn attach_sensors(&mut self, sensors: RecordingSensors) {
        self.sensors = Some(sensors);
    }

    pub fn command(&mut self, command: Command) -> &mut Self {
        self.script.push_back(Scripted::Event(PollEvent::Command(command)));
        self
    }

    pub fn input(&mut self, event: InputEvent) -> &mut Self {
        self.script.push_back(Scripted::Event(PollEvent::Input(event)));
        self
    }

    pub fn sensor_ready(&mut self) -> &mut Self {
        self.script.push_back(Scripted::Event(PollEvent::SensorReady));
        self
    }

    pub fn idle(&mut self) -> &mut Self {
        self.script.push_back(Scripted::Idle);
        self
    }

    pub fn destroy(&mut self) -> &mut Self {
        self.script.push_back(Scripted::Destroy);
        self
    }

    pub fn polls(&self) -> &[Option<Duration>] {
        &self.polls
    }

    pub fn saved_state(&self) -> Option<&[u8]> {
        self.saved_state.as_deref()
    }

    pub fn finished_inputs(&self) -> Vec<(InputEvent, bool)> {
        self.finished.clone()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Host for ScriptedHost {
    type Window = FakeWindow;

    fn next_event(&mut self, timeout: Option<Duration>) -> PollEvent {
        self.polls.push(timeout);
        match self.script.pop_front() {
            Some(Scripted::Event(PollEvent::SensorReady)) => {
                if let Some(sensors) = &self.sensors {
                    sensors.push_samples(3);
                }
                PollEvent::SensorReady
            }
            Some(Scripted::Event(event)) => event,
            Some(Scripted::Destroy) => {
                self.destroy_requested = true;
                PollEvent::Command(Command::Destroy)
            }
            Some(Scripted::Idle) | None => PollEvent::Timeout,
        }
    }

    fn window(&self) -> Option<&FakeWindow> {
        self.window.as_ref()
    }

    fn saved_state_buffer(&mut self, len: usize) -> &mut [u8] {
        self.saved_state.insert(vec![0; len])
    }

    fn destroy_requested(&self) -> bool {
        self.destroy_requested
    }

    fn finish_input(&mut self, event: &InputEvent, handled: bool) {
        self.finished.push((*event, handled));
    }
}

// ── resource bridge ───────────────────────────────────────────────────────

/// Virtual machine counting attached threads.
#[derive(Default)]
pub struct FakeVm {
    attached: Cell<i32>,
    detach_calls: Cell<usize>,
    attach_status: i32,
    detach_status: i32,
}

impl FakeVm {
    pub fn failing_attach(status: i32) -> Self {
        Self { attach_status: status, ..Self::default() }
    }

    pub fn failing_detach(status: i32) -> Self {
        Self { detach_status: status, ..Self::default() }
    }

    pub fn attached(&self) -> i32 {
        self.attached.get()
    }

    pub fn detach_calls(&self) -> usize {
        self.detach_calls.get()
    }
}

impl VmRuntime for FakeVm {
    fn attach_current_thread(&self) -> i32 {
        if self.attach_status == 0 {
            self.attached.set(self.attached.get() + 1);
        }
        self.attach_status
    }

    fn detach_current_thread(&self) -> i32 {
        self.detach_calls.set(self.detach_calls.get() + 1);
        if self.detach_status == 0 {
            self.attached.set(self.attached.get() - 1);
        }
        self.detach_status
    }
}

/// In-memory asset manager tracking open handles.
#[derive(Default)]
pub struct MemAssets {
    files: HashMap<String, Option<Vec<u8>>>,
    open: Rc<Cell<usize>>,
}

pub struct MemAsset {
    bytes: Option<Vec<u8>>,
    open: Rc<Cell<usize>>,
}

impl MemAssets {
    pub fn with(mut self, name: &str, bytes: &[u8]) -> Self {
        self.files.insert(name.to_string(), Some(bytes.to_vec()));
        self
    }

    /// Registers an asset that cannot be mapped into memory.
    pub fn without_buffer(mut self, name: &str) -> Self {
        self.files.insert(name.to_string(), None);
        self
    }

    pub fn open_handles(&self) -> usize {
        self.open.get()
    }
}

impl AssetManager for MemAssets {
    type Asset = MemAsset;

    fn open(&self, name: &str) -> Option<MemAsset> {
        let bytes = self.files.get(name)?.clone();
        self.open.set(self.open.get() + 1);
        Some(MemAsset { bytes, open: self.open.clone() })
    }
}

impl OpenAsset for MemAsset {
    fn buffer(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl Drop for MemAsset {
    fn drop(&mut self) {
        self.open.set(self.open.get() - 1);
    }
}
