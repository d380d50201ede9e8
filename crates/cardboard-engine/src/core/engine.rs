use std::time::Instant;

use super::{EngineConfig, Snapshot, SnapshotError};
use crate::device::{FrameState, InitError, Renderer, SurfaceSize};
use crate::sensor::{SensorMonitor, SensorQueue};
use crate::time::FpsMeter;

/// Mutable context of one application instance.
///
/// Owned by the engine thread and handed to callbacks by exclusive reference.
/// The host handle is not stored; it is passed into each callback instead.
///
/// Invariants:
/// - a rendering context exists only between a successful `init_display` and
///   the next `term_display`
/// - `animating` is false whenever no context exists
pub struct Engine<R: Renderer, Q: SensorQueue> {
    config: EngineConfig,
    renderer: R,
    context: Option<R::Context>,
    sensors: SensorMonitor<Q>,
    animating: bool,
    size: SurfaceSize,
    snapshot: Snapshot,
    fps: FpsMeter,
}

impl<R: Renderer, Q: SensorQueue> Engine<R, Q> {
    /// Creates an engine without a window.
    ///
    /// `saved_state` is the blob the host kept from a previous instance, if any.
    pub fn new(
        config: EngineConfig,
        renderer: R,
        sensors: SensorMonitor<Q>,
        saved_state: Option<&[u8]>,
    ) -> Self {
        Self {
            config,
            renderer,
            context: None,
            sensors,
            animating: false,
            size: SurfaceSize::default(),
            snapshot: Snapshot::restore(saved_state),
            fps: FpsMeter::stopped(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub(crate) fn sensors_mut(&mut self) -> &mut SensorMonitor<Q> {
        &mut self.sensors
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Size recorded by the last init (or draw) of the current context.
    pub fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    /// Active when a context exists and frames are self-paced.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Requests self-paced animation.
    ///
    /// Refused without a rendering context. Returns the resulting state.
    pub fn set_animating(&mut self, animating: bool) -> bool {
        if animating && self.context.is_none() {
            log::debug!("not animating without a rendering context");
            return self.animating;
        }

        if animating != self.animating {
            self.animating = animating;
            if animating {
                self.fps.start();
            } else {
                self.report_final_fps();
            }
        }
        self.animating
    }

    /// Acquires the rendering context for `window`.
    ///
    /// A no-op when a context is already active. On failure the engine stays
    /// without a context.
    pub fn init_display(&mut self, window: &R::Window) -> Result<(), InitError> {
        if self.context.is_some() {
            log::debug!("rendering context already active");
            return Ok(());
        }

        log::info!("renderer initializing...");
        let start = Instant::now();
        let context = self.renderer.init(window)?;

        self.size = self.renderer.surface_size(&context);
        self.context = Some(context);
        log::info!(
            "renderer initialized {}x{}, {:.3}ms",
            self.size.width,
            self.size.height,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    /// Draws one frame from the current state.
    ///
    /// Skipped without a context. Returns whether a frame was drawn.
    pub fn draw_frame(&mut self) -> bool {
        let Some(context) = self.context.as_mut() else {
            log::trace!("no rendering context; draw skipped");
            return false;
        };

        let frame = FrameState {
            angle: self.snapshot.angle,
            size: self.size,
            animating: self.animating,
        };
        self.renderer.draw(context, &frame);
        self.size = self.renderer.surface_size(context);
        true
    }

    /// Releases the rendering context and stops animating.
    ///
    /// Safe to call without a context; the renderer is still notified once.
    pub fn term_display(&mut self) {
        self.set_animating(false);
        self.renderer.terminate(self.context.take());
        self.size = SurfaceSize::default();
        log::info!("renderer terminated");
    }

    /// Advances the animation by one frame and draws it.
    ///
    /// Returns whether a frame was drawn.
    pub fn update_draw(&mut self) -> bool {
        if !self.animating {
            return false;
        }

        if self.snapshot.advance(self.config.angle_step) {
            log::trace!("angle wrapped");
        }
        let drawn = self.draw_frame();

        if self.config.report_fps {
            if let Some(stats) = self.fps.tick() {
                log::info!(
                    "fps min {:.1} avg {:.1} max {:.1}",
                    stats.min,
                    stats.avg,
                    stats.max
                );
            }
        }
        drawn
    }

    /// Copies the snapshot into a host buffer of exactly [`Snapshot::SIZE`] bytes.
    pub fn save_state(&self, buf: &mut [u8]) -> Result<(), SnapshotError> {
        self.snapshot.write_to(buf)
    }

    /// Fetches and drops every pending sensor sample.
    pub fn drain_sensor_events(&mut self) -> usize {
        let drained = self.sensors.drain();
        log::trace!("drained {drained} sensor samples");
        drained
    }

    fn report_final_fps(&mut self) {
        if let Some(stats) = self.fps.stop() {
            if self.config.report_fps {
                log::info!(
                    "fps min {:.1} avg {:.1} max {:.1} (stopped)",
                    stats.min,
                    stats.avg,
                    stats.max
                );
            }
        }
    }
}
