//! Menu State Machine
//!
//! Advances the menu one step per tick. Each step:
//! 1. picks up at most one event from the [`EventSource`]
//! 2. feeds it to the current state's transition, writing the motor store
//!    when a leaf entry is confirmed
//! 3. redraws the display, but only if something made the view stale
//!
//! The controller never blocks and never allocates; a step costs the same
//! no matter how long the menu has been running.
//!
//! # Dirty flags
//! - `state_dirty`: an event arrived and has not been examined yet
//! - `display_dirty`: the display no longer matches the state; set on start,
//!   on reset, on every event arrival and on every state change
//!
//! Events are examined exactly once. An event no transition reacts to (any
//! `Idle` event) is dropped after that tick rather than kept around to be
//! re-examined.

use crate::system::config::MenuConfig;
use crate::system::event::{EventSource, MenuEvent};
use crate::system::motor::MotorStore;
use crate::system::render::{self, COLUMNS};
use crate::system::state::{MenuState, Transition};

/// Character display the menu draws on
///
/// Rows run from 0 to 3, columns from 0. Text is written verbatim from the
/// cursor position without wrapping.
pub trait CharDisplay {
    fn set_cursor(&mut self, column: u8, row: u8);
    fn write_text(&mut self, text: &str);
}

impl<D: CharDisplay + ?Sized> CharDisplay for &mut D {
    fn set_cursor(&mut self, column: u8, row: u8) {
        (**self).set_cursor(column, row)
    }

    fn write_text(&mut self, text: &str) {
        (**self).write_text(text)
    }
}

/// State of the menu finite-state machine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuController {
    config: MenuConfig,
    state: MenuState,
    event: MenuEvent,
    state_dirty: bool,
    display_dirty: bool,
    /// Steps run since start
    steps: u32,
}

impl MenuController {
    pub const fn new(config: MenuConfig) -> Self {
        Self {
            config,
            state: MenuState::Main,
            event: MenuEvent::IDLE,
            state_dirty: false,
            display_dirty: true,
            steps: 0,
        }
    }

    /// Brings the menu and the motor store into their initial configuration
    pub fn start<const N: usize>(&mut self, motors: &mut MotorStore<N>) {
        self.reset();
        self.steps = 0;
        motors.reset(self.config.initial_motor);

        info!("menu started with {} motors", N);
        info!(
            "state = {:?}, event = {:?}, state_dirty = {}",
            self.state,
            self.event,
            self.state_dirty
        );
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The last event taken from the source
    pub fn pending_event(&self) -> MenuEvent {
        self.event
    }

    pub fn is_state_dirty(&self) -> bool {
        self.state_dirty
    }

    pub fn is_display_dirty(&self) -> bool {
        self.display_dirty
    }

    /// Number of [`advance`](Self::advance) calls since start
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Runs one step of the menu
    pub fn advance<E, D, const N: usize>(
        &mut self,
        events: &mut E,
        motors: &mut MotorStore<N>,
        display: &mut D,
    ) where
        E: EventSource + ?Sized,
        D: CharDisplay + ?Sized,
    {
        self.steps = self.steps.wrapping_add(1);

        if events.has_pending_event() {
            self.event = events.take_event();
            self.state_dirty = true;
            self.display_dirty = true;
        }

        if !self.state.is_valid(N) {
            warn!("invalid menu state {:?}, resetting", self.state);
            self.reset();
        } else if self.state_dirty {
            self.dispatch(motors);
        }

        if self.display_dirty {
            self.draw(motors, display);
        }
    }

    /// Feeds the pending event to the current state
    fn dispatch<const N: usize>(&mut self, motors: &mut MotorStore<N>) {
        self.state_dirty = false;

        let Some(key) = self.event.activated() else {
            return;
        };

        let Transition { target, edit } = self.state.transition(key, N);
        if let Some((motor, edit)) = edit {
            if let Err(_err) = motors.apply(motor, edit) {
                warn!("rejected {:?} on motor {}: {:?}, resetting", edit, motor, _err);
                self.reset();
                return;
            }
        }

        if target != self.state {
            if self.config.trace_transitions {
                debug!("{:?} --{:?}--> {:?}", self.state, key, target);
            }
            self.state = target;
            self.display_dirty = true;
        }
    }

    fn draw<D, const N: usize>(&mut self, motors: &MotorStore<N>, display: &mut D)
    where
        D: CharDisplay + ?Sized,
    {
        let screen = render::render(&self.state, motors);
        for (row, line) in screen.iter().enumerate() {
            debug_assert_eq!(line.len(), COLUMNS);
            display.set_cursor(0, row as u8);
            display.write_text(line);
        }
        self.display_dirty = false;
    }

    /// Returns to the root with nothing pending and a redraw scheduled
    fn reset(&mut self) {
        self.state = MenuState::Main;
        self.event = MenuEvent::IDLE;
        self.state_dirty = false;
        self.display_dirty = true;
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(MenuConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests;
