//! Motion sensor plumbing.
//!
//! The platform sensor API sits behind [`SensorManager`] and [`SensorQueue`];
//! [`SensorMonitor`] gates the stream to the focused intervals of the
//! application and drains the queue on each readiness notification.

mod error;
mod monitor;
mod null;
mod queue;

pub use error::SensorError;
pub use monitor::SensorMonitor;
pub use null::NoSensors;
pub use queue::{SensorKind, SensorManager, SensorQueue, LOOPER_ID_USER};
