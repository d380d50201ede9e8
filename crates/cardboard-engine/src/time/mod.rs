//! Time subsystem.
//!
//! Frame statistics for the animation loop, decoupled from the wall clock so
//! they can be driven with synthetic timestamps.
//! Intended usage:
//! - `start()` when animation starts, `stop()` when it stops
//! - `tick()` once per presented frame; statistics come back once per window

mod fps;

pub use fps::{FpsMeter, FpsStats, STATS_WINDOW};
