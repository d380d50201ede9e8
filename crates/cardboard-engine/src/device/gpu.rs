use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use super::{GpuInit, InitError, SurfaceErrorAction, SurfaceSize};
use super::surface;

/// Owns wgpu core objects and the surface configuration.
///
/// This type is the low-level rendering context:
/// - creates and stores Device/Queue
/// - creates and configures the Surface (swapchain)
/// - clears and presents frames
pub struct GpuContext {
    /// Surface bound to the native window.
    surface: wgpu::Surface<'static>,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: SurfaceSize,
}

impl GpuContext {
    /// Creates a GPU context bound to `target`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new<W>(target: W, size: SurfaceSize, init: &GpuInit) -> Result<Self, InitError>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        if size.is_empty() {
            return Err(InitError::ZeroSize {
                width: size.width,
                height: size.height,
            });
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("cardboard device"),
                required_features: init.required_features,
                required_limits: init
                    .required_limits
                    .clone()
                    .using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, init.prefer_srgb)
            .ok_or(InitError::NoSurfaceFormat)?;
        let alpha_mode = surface::choose_alpha_mode(&caps, init.alpha_mode);

        let config = surface::surface_config(format, alpha_mode, size, init);
        surface.configure(&device, &config);

        log::debug!(
            "surface configured: {}x{} {:?} via {:?}",
            size.width,
            size.height,
            format,
            adapter.get_info().backend
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Reconfigures the surface after a resize.
    pub fn resize(&mut self, new_size: SurfaceSize) {
        surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.config,
            &mut self.size,
            new_size,
        );
    }

    /// Clears the next surface texture to `color` and presents it.
    pub fn present_clear(&mut self, color: wgpu::Color) -> Result<(), SurfaceErrorAction> {
        if self.size.is_empty() {
            return Err(SurfaceErrorAction::SkipFrame);
        }

        let surface_texture = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(err) => {
                return Err(surface::map_surface_error(
                    &self.surface,
                    &self.device,
                    &self.config,
                    self.size,
                    err,
                ));
            }
        };

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("cardboard frame encoder"),
            });

        // Clear pass; dropped before the encoder is finished.
        {
            let _rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cardboard clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}
