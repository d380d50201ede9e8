//! Desktop host.
//!
//! Owns the `winit` EventLoop and Window and exposes them to the engine as a
//! [`Host`](crate::host::Host): pumping the event loop is the poll.

mod host;
mod translate;

pub use host::{RuntimeConfig, WinitHost};
