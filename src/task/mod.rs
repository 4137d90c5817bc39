pub mod buttons;
pub mod console_display;
pub mod menu;
pub mod motor_status;
pub mod resources;
pub mod tick_source;
