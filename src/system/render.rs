//! Display templates
//!
//! Builds the four 20-column lines shown for each menu state. Lines are
//! always padded with blanks to the full width, so writing one over a longer
//! previous line never leaves stale characters behind.

use core::fmt::{self, Write};

use heapless::String;

use crate::system::motor::{MotorConfig, MotorStore, Spin};
use crate::system::state::MenuState;

/// Display width in characters
pub const COLUMNS: usize = 20;
/// Display height in lines
pub const ROWS: usize = 4;

/// One display line
pub type Line = String<COLUMNS>;
/// A full display
pub type Screen = [Line; ROWS];

const HINT_EDIT: &str = "Enter to edit";
const HINT_SET: &str = "Enter to set";
const HINT_RETURN: &str = "Escape to return";
const HINT_MAIN: &str = "Enter/Next/Escape";

/// Writer that drops whatever does not fit on the line
struct Clipped<'a>(&'a mut Line);

impl Write for Clipped<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Formats one line, clipped and blank padded to exactly [`COLUMNS`]
fn line(args: fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    let _ = Clipped(&mut line).write_fmt(args);
    while line.push(' ').is_ok() {}
    line
}

fn text(s: &str) -> Line {
    line(format_args!("{}", s))
}

/// `Motor 1: OFF, 0, R`
fn summary<const N: usize>(motors: &MotorStore<N>, index: usize) -> Line {
    match motors.get(index) {
        Some(MotorConfig { power, spin, speed }) => line(format_args!(
            "Motor {}: {}, {}, {}",
            index + 1,
            if *power { "ON" } else { "OFF" },
            speed.get(),
            spin.tag()
        )),
        None => text(""),
    }
}

/// Edit-entry screen: current choice, the next choice, and the key hints
fn edit_screen(index: usize, current: fmt::Arguments<'_>, next: fmt::Arguments<'_>) -> Screen {
    [
        line(format_args!("Motor {}: {}", index + 1, current)),
        line(format_args!("Next -> {}", next)),
        text(HINT_SET),
        text(HINT_RETURN),
    ]
}

/// Submenu screen: motor summary, where Next leads, and the key hints
fn submenu_screen<const N: usize>(motors: &MotorStore<N>, index: usize, row1: Line) -> Screen {
    [summary(motors, index), row1, text(HINT_EDIT), text(HINT_RETURN)]
}

fn spin_screen(index: usize, spin: Spin) -> Screen {
    edit_screen(
        index,
        format_args!("{}", spin.label()),
        format_args!("{}", spin.flipped().label()),
    )
}

fn main_screen<const N: usize>(motors: &MotorStore<N>) -> Screen {
    let shown = N.min(ROWS - 1);
    core::array::from_fn(|row| match row {
        r if r < shown => summary(motors, r),
        r if r == shown => text(HINT_MAIN),
        _ => text(""),
    })
}

/// Renders the view of `state` over the current motor configuration
pub fn render<const N: usize>(state: &MenuState, motors: &MotorStore<N>) -> Screen {
    match *state {
        MenuState::Main => main_screen(motors),
        MenuState::Motor(m) => submenu_screen(
            motors,
            m,
            line(format_args!("Next -> Motor {}", (m + 1) % N.max(1) + 1)),
        ),
        MenuState::Power(m) => submenu_screen(motors, m, text("Power |Next -> Spin")),
        MenuState::Spin(m) => submenu_screen(motors, m, text("Spin |Next -> Speed")),
        MenuState::Speed(m) => submenu_screen(motors, m, text("Speed |Next -> Power")),
        MenuState::PowerOn(m) => edit_screen(m, format_args!("Turn ON"), format_args!("Turn OFF")),
        MenuState::PowerOff(m) => edit_screen(m, format_args!("Turn OFF"), format_args!("Turn ON")),
        MenuState::SpinLeft(m) => spin_screen(m, Spin::Left),
        MenuState::SpinRight(m) => spin_screen(m, Spin::Right),
        MenuState::SpeedDigit(m, level) => edit_screen(
            m,
            format_args!("Speed {}", level.get()),
            format_args!("Speed {}", level.next().get()),
        ),
    }
}
