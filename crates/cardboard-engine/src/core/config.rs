use std::time::Duration;

use crate::sensor::SensorKind;

/// Sampling period requested while focused: 1/60 s.
pub const DEFAULT_SENSOR_PERIOD: Duration = Duration::from_micros(16_667);

/// Angle advance per animated frame, in turns.
pub const DEFAULT_ANGLE_STEP: f32 = 0.01;

/// Engine behavior knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Sensor monitored while the application has focus.
    pub sensor_kind: SensorKind,

    /// Event rate requested from the sensor queue.
    pub sensor_period: Duration,

    /// Angle increment per animated frame.
    pub angle_step: f32,

    /// Start animating on `FocusGained` when a context is active.
    ///
    /// Off by default: the host decides when animation starts.
    pub animate_on_focus: bool,

    /// Log frame statistics once per second while animating.
    pub report_fps: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sensor_kind: SensorKind::Accelerometer,
            sensor_period: DEFAULT_SENSOR_PERIOD,
            angle_step: DEFAULT_ANGLE_STEP,
            animate_on_focus: false,
            report_fps: true,
        }
    }
}
