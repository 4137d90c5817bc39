//! Menu configuration

use crate::system::motor::MotorConfig;

/// Behaviour knobs of the menu controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuConfig {
    /// Configuration every motor is put into when the menu starts
    pub initial_motor: MotorConfig,
    /// Log every state change at debug level
    pub trace_transitions: bool,
}

impl MenuConfig {
    pub const DEFAULT: MenuConfig = MenuConfig {
        initial_motor: MotorConfig::INITIAL,
        trace_transitions: true,
    };
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
