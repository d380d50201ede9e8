use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// State persisted across suspend/resume.
///
/// The byte layout is a stable contract with the host, which keeps the bytes
/// across process restarts: `angle: f32`, `x: i32`, `y: i32`, native byte order,
/// no padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Snapshot {
    /// Rotation in turns, kept in `[0, 1)`.
    pub angle: f32,
    pub x: i32,
    pub y: i32,
}

/// Angles within this distance below a full turn count as a wrap.
///
/// Absorbs the error accumulated by summing fractional steps in `f32`.
const WRAP_TOLERANCE: f32 = 1e-5;

#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("snapshot buffer has {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("snapshot angle {0} is not finite")]
    NonFiniteAngle(f32),
}

impl Snapshot {
    /// Serialized size in bytes.
    pub const SIZE: usize = std::mem::size_of::<Snapshot>();

    pub fn new(angle: f32, x: i32, y: i32) -> Self {
        Self { angle, x, y }
    }

    /// Decodes a snapshot from exactly [`Snapshot::SIZE`] bytes.
    ///
    /// A finite angle outside `[0, 1)` is brought back into range; a
    /// non-finite one is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        if bytes.len() != Self::SIZE {
            return Err(SnapshotError::SizeMismatch {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut snapshot: Snapshot = bytemuck::pod_read_unaligned(bytes);
        if !snapshot.angle.is_finite() {
            return Err(SnapshotError::NonFiniteAngle(snapshot.angle));
        }
        if !(0.0..1.0).contains(&snapshot.angle) {
            snapshot.angle = wrap_angle(snapshot.angle);
        }
        Ok(snapshot)
    }

    /// Restores the state handed over by the host at startup.
    ///
    /// A missing blob yields a zeroed snapshot. A blob of the wrong size is
    /// never partially decoded.
    pub fn restore(saved: Option<&[u8]>) -> Self {
        let Some(bytes) = saved else {
            return Self::default();
        };

        match Self::from_bytes(bytes) {
            Ok(snapshot) => {
                log::info!("restored saved state: {snapshot:?}");
                snapshot
            }
            Err(e) => {
                log::warn!("ignoring saved state: {e}");
                Self::default()
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Copies the snapshot into a host buffer of exactly [`Snapshot::SIZE`] bytes.
    ///
    /// Nothing is written when the size does not match.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<(), SnapshotError> {
        if buf.len() != Self::SIZE {
            return Err(SnapshotError::SizeMismatch {
                expected: Self::SIZE,
                actual: buf.len(),
            });
        }
        buf.copy_from_slice(self.as_bytes());
        Ok(())
    }

    /// Advances the angle by `step`, wrapping into `[0, 1)`.
    ///
    /// Returns whether the angle wrapped.
    pub fn advance(&mut self, step: f32) -> bool {
        let next = self.angle + step;
        let wrapped = !(0.0..1.0 - WRAP_TOLERANCE).contains(&next);
        self.angle = if wrapped { wrap_angle(next) } else { next };
        wrapped
    }
}

/// Reduces `angle` into `[0, 1)`. Non-finite input and values within
/// [`WRAP_TOLERANCE`] of a full turn become zero.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(1.0);
    if !wrapped.is_finite() || wrapped >= 1.0 - WRAP_TOLERANCE {
        0.0
    } else {
        wrapped
    }
}
