//! Tick counter
//!
//! The pending-tick counter shared between the time source and the menu
//! task. The time source runs at a higher priority and only ever calls
//! [`TickCounter::tick`]; the menu task drains the counter with [`drain`],
//! running the state machine once per tick taken.
//!
//! Every read-modify-write happens inside a critical section that covers
//! just the counter access. The work done per tick runs outside it.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Ticks owed to the menu task
pub static MENU_TICKS: TickCounter = TickCounter::new();

/// Wakes the menu task after a tick was recorded
static TICK_RECORDED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Records a tick for the menu task and wakes it
///
/// Safe to call from any priority level.
pub fn tick_elapsed() {
    MENU_TICKS.tick();
    TICK_RECORDED.signal(());
}

/// Waits until at least one tick was recorded since the last wait
pub async fn wait() {
    TICK_RECORDED.wait().await
}

/// Count of elapsed but not yet processed ticks
pub struct TickCounter {
    pending: Mutex<Cell<u32>>,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Records one elapsed tick
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            pending.set(pending.get().saturating_add(1));
        });
    }

    /// Takes one pending tick, returns false if there was none
    pub fn try_take(&self) -> bool {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            match pending.get() {
                0 => false,
                n => {
                    pending.set(n - 1);
                    true
                }
            }
        })
    }

    /// Ticks waiting to be processed
    pub fn pending(&self) -> u32 {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `step` once for every pending tick
///
/// Ticks arriving while `step` runs are picked up by the same call. Returns
/// the number of steps run.
pub fn drain(counter: &TickCounter, mut step: impl FnMut()) -> u32 {
    let mut runs = 0;
    while counter.try_take() {
        step();
        runs += 1;
    }
    runs
}
