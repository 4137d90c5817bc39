//! Motor menu firmware entry point
//!
//! Initializes the system and spawns the menu tasks. The tick source runs on
//! a high-priority interrupt executor so it can preempt the menu task; all
//! other tasks share the thread executor.

#![no_std]
#![no_main]

use crate::task::{
    buttons::{enter_button_handle, escape_button_handle, next_button_handle},
    menu::menu,
    motor_status::motor_status,
    resources::{AssignedResources, EnterButtonResources, EscapeButtonResources, NextButtonResources},
    tick_source::tick_source,
};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Task implementations
mod task;

/// Executor for the tick source, preempts the thread executor
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // The menu task must be running before the first tick is recorded
    spawner.spawn(menu()).unwrap();
    spawner.spawn(motor_status()).unwrap();
    spawner.spawn(enter_button_handle(r.enter)).unwrap();
    spawner.spawn(next_button_handle(r.next)).unwrap();
    spawner.spawn(escape_button_handle(r.escape)).unwrap();

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(tick_source()).unwrap();
}
