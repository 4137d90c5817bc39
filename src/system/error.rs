//! Motor configuration errors

use thiserror::Error;

/// Reasons a motor configuration write can be refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Speed levels run from 0 to 9
    #[error("speed level {0} is out of range 0..=9")]
    SpeedOutOfRange(u8),
    /// The store has no motor at this index
    #[error("no motor at index {0}")]
    NoSuchMotor(usize),
}
