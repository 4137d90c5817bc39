//! Motor status reporting
//!
//! Stands in for the actuation side: waits for every published motor
//! configuration and reports it.

use defmt::info;
use motor_menu::system::motor;

#[embassy_executor::task]
pub async fn motor_status() {
    loop {
        let configs = motor::wait().await;
        for (index, config) in configs.iter().enumerate() {
            info!(
                "motor {}: power = {}, spin = {}, speed = {}",
                index + 1,
                config.power,
                config.spin,
                config.speed.get()
            );
        }
    }
}
