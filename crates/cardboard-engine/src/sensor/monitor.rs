use std::time::Duration;

use super::{SensorError, SensorKind, SensorManager, SensorQueue};

/// Owns the sensor event queue and the optional sensor descriptor.
pub struct SensorMonitor<Q: SensorQueue> {
    queue: Q,
    sensor: Option<Q::Sensor>,
    enabled: bool,
}

impl<Q: SensorQueue> SensorMonitor<Q> {
    /// Looks up the default sensor of `kind` and creates the event queue.
    pub fn new<M>(manager: &M, kind: SensorKind, ident: i32) -> Self
    where
        M: SensorManager<Queue = Q>,
    {
        let sensor = manager.default_sensor(kind);
        if sensor.is_none() {
            log::info!("no {kind:?} sensor on this device");
        }
        Self::from_parts(manager.create_event_queue(ident), sensor)
    }

    pub fn from_parts(queue: Q, sensor: Option<Q::Sensor>) -> Self {
        Self {
            queue,
            sensor,
            enabled: false,
        }
    }

    /// Whether the device exposes the requested sensor.
    pub fn has_sensor(&self) -> bool {
        self.sensor.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Starts reporting at `period`.
    ///
    /// Returns `Ok(false)` without touching the queue when there is no sensor.
    pub fn enable(&mut self, period: Duration) -> Result<bool, SensorError> {
        let Some(sensor) = self.sensor.as_ref() else {
            return Ok(false);
        };

        self.queue.enable_sensor(sensor)?;
        self.enabled = true;
        self.queue.set_event_rate(sensor, period)?;
        Ok(true)
    }

    /// Stops reporting.
    ///
    /// Returns `Ok(false)` without touching the queue when there is no sensor.
    pub fn disable(&mut self) -> Result<bool, SensorError> {
        let Some(sensor) = self.sensor.as_ref() else {
            return Ok(false);
        };

        self.queue.disable_sensor(sensor)?;
        self.enabled = false;
        Ok(true)
    }

    /// Fetches samples until the queue reports empty and returns how many were dropped.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        while let Some(_sample) = self.queue.next_sample() {
            drained += 1;
        }
        drained
    }
}
