//! Core engine state.
//!
//! [`Engine`] is the single mutable context of one application instance. It
//! owns the [`Snapshot`], the sensor queue and the rendering context handle,
//! and enforces the calling discipline of the renderer.

mod config;
mod engine;
mod handler;
mod snapshot;

pub use config::{EngineConfig, DEFAULT_ANGLE_STEP, DEFAULT_SENSOR_PERIOD};
pub use engine::Engine;
pub use handler::LifecycleHandler;
pub use snapshot::{Snapshot, SnapshotError};
