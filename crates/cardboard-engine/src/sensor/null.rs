use std::time::Duration;

use super::{SensorError, SensorKind, SensorManager, SensorQueue};

/// Sensor backend for hosts without motion hardware.
///
/// Never yields a sensor, so the monitor treats enable/disable as no-ops.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoSensors;

impl SensorManager for NoSensors {
    type Queue = NoSensors;

    fn default_sensor(&self, _kind: SensorKind) -> Option<()> {
        None
    }

    fn create_event_queue(&self, _ident: i32) -> NoSensors {
        NoSensors
    }
}

impl SensorQueue for NoSensors {
    type Sensor = ();
    type Sample = ();

    fn enable_sensor(&mut self, _sensor: &()) -> Result<(), SensorError> {
        Ok(())
    }

    fn set_event_rate(&mut self, _sensor: &(), _period: Duration) -> Result<(), SensorError> {
        Ok(())
    }

    fn disable_sensor(&mut self, _sensor: &()) -> Result<(), SensorError> {
        Ok(())
    }

    fn next_sample(&mut self) -> Option<()> {
        None
    }
}
