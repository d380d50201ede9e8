//! Rendering context management.
//!
//! [`Renderer`] is the contract the engine drives (init, draw, terminate).
//! [`WgpuRenderer`] implements it on top of wgpu:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames, clearing and presenting them

mod error;
mod gpu;
mod init;
mod renderer;
mod surface;
mod wgpu_renderer;

pub use error::{InitError, SurfaceErrorAction};
pub use gpu::GpuContext;
pub use init::GpuInit;
pub use renderer::{FrameState, Renderer, SurfaceSize};
pub use wgpu_renderer::{WgpuRenderer, WindowSurface};
