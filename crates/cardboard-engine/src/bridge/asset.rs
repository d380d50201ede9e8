use thiserror::Error;

use super::{RuntimeAttachError, ThreadAttachment, VmRuntime};

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum AssetError {
    #[error("asset {0:?} not found")]
    NotFound(String),
    #[error("asset {0:?} has no buffer")]
    NoBuffer(String),
    #[error("could not allocate {len} bytes for asset {name:?}")]
    AllocFailed { name: String, len: usize },
}

impl AssetError {
    /// Negative status code of the loader contract.
    pub fn status(&self) -> i32 {
        match self {
            AssetError::NotFound(_) => -1,
            AssetError::NoBuffer(_) => -2,
            AssetError::AllocFailed { .. } => -3,
        }
    }
}

/// An opened asset. Closed when dropped, which invalidates its buffer.
pub trait OpenAsset {
    /// Whole asset contents, if the asset can be mapped into memory.
    fn buffer(&self) -> Option<&[u8]>;
}

/// Access to the assets packaged with the application.
pub trait AssetManager {
    type Asset: OpenAsset;

    /// Opens `name` for streaming, `None` if there is no such asset.
    fn open(&self, name: &str) -> Option<Self::Asset>;
}

/// Loads `name` into a buffer owned by the caller.
///
/// The bytes are copied before the asset is closed, so the result outlives the
/// asset handle.
pub fn load_asset<M>(manager: &M, name: &str) -> Result<Vec<u8>, AssetError>
where
    M: AssetManager + ?Sized,
{
    let asset = manager
        .open(name)
        .ok_or_else(|| AssetError::NotFound(name.to_string()))?;

    let buf = asset
        .buffer()
        .ok_or_else(|| AssetError::NoBuffer(name.to_string()))?;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(buf.len())
        .map_err(|_| AssetError::AllocFailed {
            name: name.to_string(),
            len: buf.len(),
        })?;
    bytes.extend_from_slice(buf);

    log::debug!("loaded asset {name:?}, {} bytes", bytes.len());
    Ok(bytes)
}

/// Attaches the current thread to the runtime, loads `name`, and detaches.
///
/// Asset managers backed by the virtual machine need an attached thread.
pub fn load_asset_attached<V, M>(
    vm: &V,
    manager: &M,
    name: &str,
) -> Result<Result<Vec<u8>, AssetError>, RuntimeAttachError>
where
    V: VmRuntime + ?Sized,
    M: AssetManager + ?Sized,
{
    let _attached = ThreadAttachment::new(vm)?;
    Ok(load_asset(manager, name))
}
