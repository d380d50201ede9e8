//! Cardboard engine crate.
//!
//! Lifecycle and event coordination core of a native activity host: turns
//! host lifecycle commands, sensor samples and input events into rendering
//! context transitions and draw calls.

pub mod bridge;
pub mod core;
pub mod device;
pub mod dispatch;
pub mod host;
pub mod input;
pub mod scheduler;
pub mod sensor;
pub mod time;
pub mod window;

pub mod logging;

#[cfg(test)]
mod testing;
