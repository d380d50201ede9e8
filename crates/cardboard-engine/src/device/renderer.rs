use super::InitError;

/// Drawable size in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Engine state visible to one draw call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameState {
    /// Rotation in turns, `[0, 1)`.
    pub angle: f32,
    pub size: SurfaceSize,
    pub animating: bool,
}

/// GPU surface + context capability driven by the engine.
///
/// Calls are synchronous and never re-entered. The engine enforces the calling
/// discipline: `draw` only with a live context, `terminate` before the next
/// `init`.
pub trait Renderer {
    /// Native window the surface is created for.
    type Window;

    /// Live rendering context; exists between a successful `init` and `terminate`.
    type Context;

    /// Creates the surface and context sized to `window`.
    fn init(&mut self, window: &Self::Window) -> Result<Self::Context, InitError>;

    /// Current drawable size of `context`.
    fn surface_size(&self, context: &Self::Context) -> SurfaceSize;

    /// Renders and presents one frame.
    fn draw(&mut self, context: &mut Self::Context, frame: &FrameState);

    /// Releases the context. Called once per terminate request, with `None`
    /// when no context is active.
    fn terminate(&mut self, context: Option<Self::Context>);
}
