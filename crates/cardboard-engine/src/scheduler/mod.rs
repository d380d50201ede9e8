//! Frame scheduling.
//!
//! Owns the outer loop of the engine thread: the blocking/non-blocking poll
//! policy, the destroy check and the animation step.

mod frame_scheduler;

pub use frame_scheduler::{poll_timeout, FrameScheduler, LoopControl};
