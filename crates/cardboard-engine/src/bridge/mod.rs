//! Resource bridge.
//!
//! Synchronous utilities the engine needs from the host runtime: attaching a
//! thread to the virtual machine and copying packaged assets into owned
//! buffers. No state of their own.

mod asset;
mod dir;
mod runtime;

pub use asset::{load_asset, load_asset_attached, AssetError, AssetManager, OpenAsset};
pub use dir::{DirAsset, DirAssetManager};
pub use runtime::{RuntimeAttachError, ThreadAttachment, VmRuntime};
