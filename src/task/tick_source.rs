//! Menu tick source
//!
//! Records one menu tick per period. Runs on the interrupt executor and
//! touches nothing but the tick counter.

use embassy_time::{Duration, Ticker};
use motor_menu::system::tick;

/// Menu tick period
pub const TICK_PERIOD: Duration = Duration::from_millis(1);

#[embassy_executor::task]
pub async fn tick_source() {
    let mut ticker = Ticker::every(TICK_PERIOD);
    loop {
        ticker.next().await;
        tick::tick_elapsed();
    }
}
