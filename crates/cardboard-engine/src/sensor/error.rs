use thiserror::Error;

/// Failure reported by the platform sensor queue, with its status code.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SensorError {
    #[error("failed to enable sensor (status {0})")]
    Enable(i32),
    #[error("failed to set sensor event rate (status {0})")]
    SetRate(i32),
    #[error("failed to disable sensor (status {0})")]
    Disable(i32),
}
