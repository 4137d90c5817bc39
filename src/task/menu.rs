//! Menu task
//!
//! Owns the menu state machine, the motor configuration and the display.
//! Every time the tick source records ticks, the task drains the tick
//! counter and advances the menu once per tick taken. A snapshot of the
//! motor configuration is published whenever a step changed it.

use crate::task::console_display::ConsoleDisplay;
use defmt::{debug, info};
use motor_menu::system::{event, motor, tick};
use motor_menu::{MenuConfig, MenuController, MotorStore};

/// Interactive menu task
#[embassy_executor::task]
pub async fn menu() {
    info!("Task Menu (Interactive Menu) started");
    info!("Non-blocking, advanced once per tick");

    let mut controller = MenuController::new(MenuConfig::DEFAULT);
    let mut motors: MotorStore = MotorStore::new();
    let mut display = ConsoleDisplay::new();
    let mut events = &event::MENU_EVENTS;

    controller.start(&mut motors);
    motor::publish(&motors);

    loop {
        tick::wait().await;

        let before = motors.clone();
        let steps = tick::drain(&tick::MENU_TICKS, || {
            controller.advance(&mut events, &mut motors, &mut display)
        });

        if motors != before {
            motor::publish(&motors);
        }
        if steps > 1 {
            debug!("caught up on {} ticks", steps);
        }
    }
}
