use std::time::Duration;

use super::SensorError;

/// Poll identifier under which the sensor queue is registered with the looper.
pub const LOOPER_ID_USER: i32 = 3;

/// Hardware sensor types the engine can monitor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SensorKind {
    Accelerometer,
    MagneticField,
}

/// Host-owned sensor manager.
///
/// Only used while the engine is being constructed; it outlives the engine.
pub trait SensorManager {
    type Queue: SensorQueue;

    /// Returns the default sensor of `kind`, or `None` when the device lacks it.
    fn default_sensor(&self, kind: SensorKind) -> Option<<Self::Queue as SensorQueue>::Sensor>;

    /// Creates an event queue whose readiness is reported under `ident`.
    fn create_event_queue(&self, ident: i32) -> Self::Queue;
}

/// Sensor event queue owned by the engine.
pub trait SensorQueue {
    /// Descriptor of one hardware sensor.
    type Sensor;

    /// One queued sample. Its payload is not interpreted by the engine.
    type Sample;

    fn enable_sensor(&mut self, sensor: &Self::Sensor) -> Result<(), SensorError>;

    fn set_event_rate(&mut self, sensor: &Self::Sensor, period: Duration)
        -> Result<(), SensorError>;

    fn disable_sensor(&mut self, sensor: &Self::Sensor) -> Result<(), SensorError>;

    /// Fetches one queued sample, `None` once the queue is empty.
    fn next_sample(&mut self) -> Option<Self::Sample>;
}
