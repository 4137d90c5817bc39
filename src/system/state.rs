//! Menu State Tree
//!
//! Every position of the menu and the edges between them:
//!
//! ```text
//! Main
//! └── Motor[i]                      (ring over all motors)
//!     ├── Power[i]                  (ring: Power -> Spin -> Speed)
//!     │   └── PowerOn[i] / PowerOff[i]
//!     ├── Spin[i]
//!     │   └── SpinLeft[i] / SpinRight[i]
//!     └── Speed[i]
//!         └── SpeedDigit[i][0..=9]
//! ```
//!
//! Enter descends to the first child, Next moves around the sibling ring
//! and Escape climbs to the parent. Leaves are edit entries: Enter writes
//! their value to the motor and climbs back to the parent. `Main` has no
//! siblings and no parent, so Next and Escape loop back onto it.

use crate::system::event::MenuKey;
use crate::system::motor::{Edit, SpeedLevel, Spin};

/// A position in the menu
///
/// Motor indices are zero based. A state naming a motor the store does not
/// have is invalid, see [`MenuState::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuState {
    /// Root, shows a summary of every motor
    #[default]
    Main,
    Motor(usize),
    Power(usize),
    Spin(usize),
    Speed(usize),
    PowerOn(usize),
    PowerOff(usize),
    SpinLeft(usize),
    SpinRight(usize),
    SpeedDigit(usize, SpeedLevel),
}

/// Outcome of feeding an activated key to a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub target: MenuState,
    /// Write to perform on the addressed motor before moving
    pub edit: Option<(usize, Edit)>,
}

impl MenuState {
    /// Motor addressed by this state, `None` for the root
    pub fn motor(&self) -> Option<usize> {
        match *self {
            MenuState::Main => None,
            MenuState::Motor(m)
            | MenuState::Power(m)
            | MenuState::Spin(m)
            | MenuState::Speed(m)
            | MenuState::PowerOn(m)
            | MenuState::PowerOff(m)
            | MenuState::SpinLeft(m)
            | MenuState::SpinRight(m)
            | MenuState::SpeedDigit(m, _) => Some(m),
        }
    }

    /// Whether the state belongs to the tree of a store with `motor_count` motors
    pub fn is_valid(&self, motor_count: usize) -> bool {
        self.motor().map_or(true, |m| m < motor_count)
    }

    /// Edit entries are the leaves of the tree
    pub fn is_leaf(&self) -> bool {
        self.edit().is_some()
    }

    /// The value a leaf writes when confirmed
    pub fn edit(&self) -> Option<Edit> {
        match *self {
            MenuState::PowerOn(_) => Some(Edit::Power(true)),
            MenuState::PowerOff(_) => Some(Edit::Power(false)),
            MenuState::SpinLeft(_) => Some(Edit::Spin(Spin::Left)),
            MenuState::SpinRight(_) => Some(Edit::Spin(Spin::Right)),
            MenuState::SpeedDigit(_, level) => Some(Edit::Speed(level)),
            _ => None,
        }
    }

    /// Target of Escape
    pub fn parent(&self) -> MenuState {
        match *self {
            MenuState::Main | MenuState::Motor(_) => MenuState::Main,
            MenuState::Power(m) | MenuState::Spin(m) | MenuState::Speed(m) => MenuState::Motor(m),
            MenuState::PowerOn(m) | MenuState::PowerOff(m) => MenuState::Power(m),
            MenuState::SpinLeft(m) | MenuState::SpinRight(m) => MenuState::Spin(m),
            MenuState::SpeedDigit(m, _) => MenuState::Speed(m),
        }
    }

    /// Target of Enter on a non-leaf entry
    pub fn first_child(&self) -> Option<MenuState> {
        match *self {
            MenuState::Main => Some(MenuState::Motor(0)),
            MenuState::Motor(m) => Some(MenuState::Power(m)),
            MenuState::Power(m) => Some(MenuState::PowerOn(m)),
            MenuState::Spin(m) => Some(MenuState::SpinLeft(m)),
            MenuState::Speed(m) => Some(MenuState::SpeedDigit(m, SpeedLevel::MIN)),
            _ => None,
        }
    }

    /// Target of Next; every sibling group forms a ring
    pub fn next_sibling(&self, motor_count: usize) -> MenuState {
        match *self {
            MenuState::Main => MenuState::Main,
            MenuState::Motor(m) => MenuState::Motor((m + 1) % motor_count.max(1)),
            MenuState::Power(m) => MenuState::Spin(m),
            MenuState::Spin(m) => MenuState::Speed(m),
            MenuState::Speed(m) => MenuState::Power(m),
            MenuState::PowerOn(m) => MenuState::PowerOff(m),
            MenuState::PowerOff(m) => MenuState::PowerOn(m),
            MenuState::SpinLeft(m) => MenuState::SpinRight(m),
            MenuState::SpinRight(m) => MenuState::SpinLeft(m),
            MenuState::SpeedDigit(m, level) => MenuState::SpeedDigit(m, level.next()),
        }
    }

    /// Looks up the transition for an activated key
    pub fn transition(&self, key: MenuKey, motor_count: usize) -> Transition {
        let moved = |target| Transition { target, edit: None };
        match key {
            MenuKey::Enter => match (self.first_child(), self.edit(), self.motor()) {
                (Some(child), _, _) => moved(child),
                (None, Some(edit), Some(m)) => Transition {
                    target: self.parent(),
                    edit: Some((m, edit)),
                },
                _ => moved(*self),
            },
            MenuKey::Next => moved(self.next_sibling(motor_count)),
            MenuKey::Escape => moved(self.parent()),
        }
    }
}
