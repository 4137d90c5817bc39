//! Motor Configuration Store
//!
//! Holds the operator-selected configuration of every motor. The menu is the
//! only writer; the actuation side reads the store through [`MotorStore::configs`].
//!
//! # Configuration
//! - Power: on or off
//! - Spin: left or right, right being the default direction
//! - Speed: discrete level 0-9

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::system::error::MotorError;

/// Number of motors driven by the controller
pub const MOTOR_COUNT: usize = 2;

/// Latest configuration of every motor, for the actuation side
///
/// Only the newest snapshot is kept; a reader that falls behind skips
/// straight to the current configuration.
pub static MOTOR_CONFIG: Signal<CriticalSectionRawMutex, [MotorConfig; MOTOR_COUNT]> = Signal::new();

/// Publishes a snapshot of the store
pub fn publish(store: &MotorStore<MOTOR_COUNT>) {
    MOTOR_CONFIG.signal(store.motors);
}

/// Waits for the next published snapshot
pub async fn wait() -> [MotorConfig; MOTOR_COUNT] {
    MOTOR_CONFIG.wait().await
}

/// Spin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Spin {
    Left,
    Right,
}

impl Spin {
    /// The other direction
    pub fn flipped(self) -> Self {
        match self {
            Spin::Left => Spin::Right,
            Spin::Right => Spin::Left,
        }
    }

    /// Single-letter tag used on the summary line
    pub fn tag(self) -> &'static str {
        match self {
            Spin::Left => "L",
            Spin::Right => "R",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Spin::Left => "Left",
            Spin::Right => "Right",
        }
    }
}

/// Discrete speed level, always within 0..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: SpeedLevel = SpeedLevel(0);
    pub const MAX: SpeedLevel = SpeedLevel(9);
    /// Number of selectable levels
    pub const LEVELS: u8 = Self::MAX.0 + 1;

    pub fn get(self) -> u8 {
        self.0
    }

    /// The following level, wrapping from 9 back to 0
    pub fn next(self) -> Self {
        SpeedLevel((self.0 + 1) % Self::LEVELS)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = MotorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX.0 {
            Ok(SpeedLevel(value))
        } else {
            Err(MotorError::SpeedOutOfRange(value))
        }
    }
}

/// Configuration of a single motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Power status
    /// - true: motor enabled
    /// - false: motor off
    pub power: bool,
    /// Spin direction
    pub spin: Spin,
    /// Speed level
    pub speed: SpeedLevel,
}

impl MotorConfig {
    /// Power off, spinning right, speed 0
    pub const INITIAL: MotorConfig = MotorConfig {
        power: false,
        spin: Spin::Right,
        speed: SpeedLevel::MIN,
    };
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// A single field write, performed when a leaf menu entry is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edit {
    Power(bool),
    Spin(Spin),
    Speed(SpeedLevel),
}

impl Edit {
    fn write(self, config: &mut MotorConfig) {
        match self {
            Edit::Power(on) => config.power = on,
            Edit::Spin(spin) => config.spin = spin,
            Edit::Speed(level) => config.speed = level,
        }
    }
}

/// Fixed-size, ordered configuration of all motors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorStore<const N: usize = MOTOR_COUNT> {
    motors: [MotorConfig; N],
}

impl<const N: usize> MotorStore<N> {
    /// Creates a store with every motor in the initial configuration
    pub const fn new() -> Self {
        Self::with_initial(MotorConfig::INITIAL)
    }

    /// Creates a store with every motor set to `initial`
    pub const fn with_initial(initial: MotorConfig) -> Self {
        Self {
            motors: [initial; N],
        }
    }

    /// Number of motors in the store
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Read-only view of all motors, indexed 0..N
    pub fn configs(&self) -> &[MotorConfig] {
        &self.motors
    }

    pub fn get(&self, index: usize) -> Option<&MotorConfig> {
        self.motors.get(index)
    }

    /// Applies a confirmed edit to the motor at `index`
    pub fn apply(&mut self, index: usize, edit: Edit) -> Result<(), MotorError> {
        let config = self
            .motors
            .get_mut(index)
            .ok_or(MotorError::NoSuchMotor(index))?;
        edit.write(config);
        info!("motor {} updated: {:?}", index + 1, edit);
        Ok(())
    }

    /// Puts every motor back into `initial`
    pub fn reset(&mut self, initial: MotorConfig) {
        self.motors = [initial; N];
    }
}

impl<const N: usize> Default for MotorStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
