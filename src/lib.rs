//! Motor menu core
//!
//! The interactive menu behind the motor controller's character display.
//! Everything that has state or ordering obligations lives here and builds
//! for the host as well as for the RP2350:
//! - the menu state tree and its transition table
//! - the per-state display templates
//! - the motor configuration store the menu edits
//! - the tick counter that paces the state machine
//!
//! The firmware binary (`src/main.rs`, feature `firmware`) wires these to
//! buttons, a display and a timer.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

/// Core menu components
pub mod system;

pub use system::config::MenuConfig;
pub use system::controller::{CharDisplay, MenuController};
pub use system::error::MotorError;
pub use system::event::{EventSource, MenuEvent, MenuKey, Phase};
pub use system::motor::{Edit, MotorConfig, MotorStore, SpeedLevel, Spin, MOTOR_COUNT};
pub use system::state::MenuState;
pub use system::tick::{drain, TickCounter};
