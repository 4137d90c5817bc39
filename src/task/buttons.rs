//! Menu button handling
//!
//! Turns the three menu keys into menu events. A key going high queues its
//! `Active` event, going low again queues the matching `Idle` event.

use crate::task::resources::{EnterButtonResources, EscapeButtonResources, NextButtonResources};
use defmt::debug;
use embassy_rp::gpio::{Input, Pull};
use motor_menu::system::event::{self, MenuEvent, MenuKey};

/// Enter key handler
#[embassy_executor::task]
pub async fn enter_button_handle(r: EnterButtonResources) {
    let mut btn = Input::new(r.btn, Pull::Down);
    handle_button(&mut btn, MenuKey::Enter).await;
}

/// Next key handler
#[embassy_executor::task]
pub async fn next_button_handle(r: NextButtonResources) {
    let mut btn = Input::new(r.btn, Pull::Down);
    handle_button(&mut btn, MenuKey::Next).await;
}

/// Escape key handler
#[embassy_executor::task]
pub async fn escape_button_handle(r: EscapeButtonResources) {
    let mut btn = Input::new(r.btn, Pull::Down);
    handle_button(&mut btn, MenuKey::Escape).await;
}

/// Reports every press and release of one key
async fn handle_button(button: &mut Input<'static>, key: MenuKey) {
    loop {
        button.wait_for_high().await;
        debug!("{} pressed", key);
        event::send(MenuEvent::active(key)).await;

        button.wait_for_low().await;
        event::send(MenuEvent::idle(key)).await;
    }
}
