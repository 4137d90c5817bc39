//! Menu Events
//!
//! Defines the navigation events the menu reacts to and the source the
//! controller polls them from.
//!
//! Each of the three keys (Enter, Next, Escape) reports two phases: `Active`
//! when the key goes down and `Idle` when it is released. Only `Active`
//! events move the menu; `Idle` events exist so the input side can report
//! "nothing happening" without a separate message type.

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::Channel;
use heapless::Deque;

/// Capacity of the menu event queue
pub const MENU_EVENT_QUEUE_SIZE: usize = 8;

/// Multi-producer, single-consumer queue from the buttons to the menu
pub static MENU_EVENTS: Channel<CriticalSectionRawMutex, MenuEvent, MENU_EVENT_QUEUE_SIZE> =
    Channel::new();

/// Queues an event for the menu, waiting while the queue is full
pub async fn send(event: MenuEvent) {
    MENU_EVENTS.sender().send(event).await;
}

/// Menu navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuKey {
    /// Descend into the highlighted entry, or confirm an edit
    Enter,
    /// Move to the next sibling entry
    Next,
    /// Return to the parent entry
    Escape,
}

/// Key phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Key released
    Idle,
    /// Key pressed
    Active,
}

/// A single navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuEvent {
    pub key: MenuKey,
    pub phase: Phase,
}

impl MenuEvent {
    /// The inert event held by the pending cell before any input arrives
    pub const IDLE: MenuEvent = MenuEvent::idle(MenuKey::Enter);

    pub const fn active(key: MenuKey) -> Self {
        Self {
            key,
            phase: Phase::Active,
        }
    }

    pub const fn idle(key: MenuKey) -> Self {
        Self {
            key,
            phase: Phase::Idle,
        }
    }

    /// Returns the key if this event should drive a transition
    pub fn activated(&self) -> Option<MenuKey> {
        match self.phase {
            Phase::Active => Some(self.key),
            Phase::Idle => None,
        }
    }
}

/// Queue of menu events polled once per tick
///
/// `take_event` is only meant to be called after `has_pending_event`
/// returned true. Called on an empty source it yields [`MenuEvent::IDLE`],
/// which no transition reacts to.
pub trait EventSource {
    /// Whether an event is waiting, without consuming it
    fn has_pending_event(&self) -> bool;

    /// Removes and returns the oldest waiting event
    fn take_event(&mut self) -> MenuEvent;
}

impl<M: RawMutex, const N: usize> EventSource for &Channel<M, MenuEvent, N> {
    fn has_pending_event(&self) -> bool {
        !self.is_empty()
    }

    fn take_event(&mut self) -> MenuEvent {
        self.try_receive().unwrap_or(MenuEvent::IDLE)
    }
}

impl<const N: usize> EventSource for Deque<MenuEvent, N> {
    fn has_pending_event(&self) -> bool {
        !self.is_empty()
    }

    fn take_event(&mut self) -> MenuEvent {
        self.pop_front().unwrap_or(MenuEvent::IDLE)
    }
}
