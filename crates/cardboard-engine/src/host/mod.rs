//! Host boundary.
//!
//! The host owns the OS event pump, the window handle, the save-state storage
//! and the destroy flag. The engine reaches them only through [`Host`].

mod command;
mod event;

pub use command::Command;
pub use event::{Host, PollEvent};
