//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their native key and
//! motion events into [`InputEvent`]s; the engine only reports whether an
//! event was consumed.

mod handler;
mod types;

pub use handler::handle_input_event;
pub use types::{InputEvent, KeyAction, MotionAction};
