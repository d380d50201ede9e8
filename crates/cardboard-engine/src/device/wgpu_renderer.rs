use std::f64::consts::TAU;
use std::sync::Arc;

use winit::window::Window;

use super::{FrameState, GpuContext, GpuInit, InitError, Renderer, SurfaceErrorAction, SurfaceSize};

/// Live context of [`WgpuRenderer`]: the window and the GPU objects bound to it.
pub struct WindowSurface {
    window: Arc<Window>,
    gpu: GpuContext,
}

/// [`Renderer`] backed by wgpu, drawing into a winit window.
///
/// Each frame clears the surface to the configured color, shaded by the
/// snapshot angle, and presents it.
#[derive(Debug, Clone, Default)]
pub struct WgpuRenderer {
    init: GpuInit,
}

impl WgpuRenderer {
    pub fn new(init: GpuInit) -> Self {
        Self { init }
    }

    fn frame_color(&self, angle: f32) -> wgpu::Color {
        let base = self.init.clear_color;
        let shade = 0.75 + 0.25 * (angle as f64 * TAU).cos();
        wgpu::Color {
            r: base.r * shade,
            g: base.g * shade,
            b: base.b * shade,
            a: base.a,
        }
    }
}

fn window_size(window: &Window) -> SurfaceSize {
    let size = window.inner_size();
    SurfaceSize::new(size.width, size.height)
}

impl Renderer for WgpuRenderer {
    type Window = Arc<Window>;
    type Context = WindowSurface;

    fn init(&mut self, window: &Arc<Window>) -> Result<WindowSurface, InitError> {
        let size = window_size(window);
        let gpu = pollster::block_on(GpuContext::new(window.clone(), size, &self.init))?;
        Ok(WindowSurface {
            window: window.clone(),
            gpu,
        })
    }

    fn surface_size(&self, context: &WindowSurface) -> SurfaceSize {
        context.gpu.size()
    }

    fn draw(&mut self, context: &mut WindowSurface, frame: &FrameState) {
        let current = window_size(&context.window);
        if current != context.gpu.size() {
            context.gpu.resize(current);
        }

        context.window.pre_present_notify();
        match context.gpu.present_clear(self.frame_color(frame.angle)) {
            Ok(()) => {}
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("surface out of memory; frame dropped");
            }
            Err(action) => log::debug!("frame skipped: {action:?}"),
        }
    }

    fn terminate(&mut self, context: Option<WindowSurface>) {
        if let Some(context) = context {
            log::debug!("releasing surface for window {:?}", context.window.id());
        }
    }
}
