use thiserror::Error;

/// Rendering context acquisition failed.
///
/// Recoverable: the engine stays without a window and retries on the next
/// `WindowReady`.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("window has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },

    #[error("failed to create surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create device/queue")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("no supported surface formats")]
    NoSurfaceFormat,

    #[error("display init returned status {0}")]
    Status(i32),
}

impl InitError {
    /// Maps an integer init status: `0` is success, anything else a failure.
    pub fn from_status(code: i32) -> Result<(), InitError> {
        match code {
            0 => Ok(()),
            code => Err(InitError::Status(code)),
        }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); the context should be torn down.
    Fatal,
}
