//! Unit tests for the menu state machine

use std::string::String;
use std::vec::Vec;

use heapless::Deque;

use super::*;
use crate::system::event::MenuKey;
use crate::system::motor::{MotorConfig, SpeedLevel, Spin};

/// Display that keeps the text of every row and counts calls
#[derive(Default)]
struct Recorder {
    rows: [String; 4],
    cursor: usize,
    calls: usize,
}

impl CharDisplay for Recorder {
    fn set_cursor(&mut self, column: u8, row: u8) {
        assert_eq!(column, 0);
        assert!(row < 4);
        self.cursor = row as usize;
        self.calls += 1;
    }

    fn write_text(&mut self, text: &str) {
        self.rows[self.cursor] = text.into();
        self.calls += 1;
    }
}

impl Recorder {
    fn row(&self, row: usize) -> &str {
        self.rows[row].trim_end()
    }
}

struct Bench {
    menu: MenuController,
    events: Deque<MenuEvent, 16>,
    motors: MotorStore<2>,
    display: Recorder,
}

impl Bench {
    fn new() -> Self {
        let mut bench = Self {
            menu: MenuController::default(),
            events: Deque::new(),
            motors: MotorStore::new(),
            display: Recorder::default(),
        };
        bench.menu.start(&mut bench.motors);
        bench.step();
        bench
    }

    fn step(&mut self) {
        self.menu
            .advance(&mut self.events, &mut self.motors, &mut self.display);
    }

    /// Queues one event and runs the step that consumes it
    fn feed(&mut self, event: MenuEvent) {
        self.events.push_back(event).unwrap();
        self.step();
    }

    fn press(&mut self, key: MenuKey) {
        self.feed(MenuEvent::active(key));
    }

    fn press_all(&mut self, keys: &[MenuKey]) {
        for &key in keys {
            self.press(key);
        }
    }
}

use MenuKey::{Enter, Escape, Next};

fn level(v: u8) -> SpeedLevel {
    SpeedLevel::try_from(v).unwrap()
}

#[test]
fn first_step_draws_main() {
    let bench = Bench::new();
    assert_eq!(bench.menu.state(), MenuState::Main);
    assert!(!bench.menu.is_display_dirty());
    assert_eq!(bench.display.calls, 8);
    assert_eq!(bench.display.row(0), "Motor 1: OFF, 0, R");
    assert_eq!(bench.display.row(1), "Motor 2: OFF, 0, R");
    assert_eq!(bench.display.row(2), "Enter/Next/Escape");
}

#[test]
fn power_on_walkthrough() {
    let mut bench = Bench::new();
    let mut visited = Vec::new();
    for key in [Enter, Enter, Enter, Enter] {
        bench.press(key);
        visited.push(bench.menu.state());
    }
    assert_eq!(
        visited,
        [
            MenuState::Motor(0),
            MenuState::Power(0),
            MenuState::PowerOn(0),
            MenuState::Power(0),
        ]
    );
    assert!(bench.motors.configs()[0].power);
    assert!(!bench.motors.configs()[1].power);
    assert_eq!(bench.display.row(0), "Motor 1: ON, 0, R");
}

#[test]
fn next_on_motor_moves_to_the_other_motor() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Next, Enter, Enter]);
    assert_eq!(bench.menu.state(), MenuState::PowerOn(1));
    assert_eq!(bench.display.row(0), "Motor 2: Turn ON");

    bench.press(Enter);
    assert_eq!(bench.menu.state(), MenuState::Power(1));
    assert!(bench.motors.configs()[1].power);
    assert!(!bench.motors.configs()[0].power);
}

#[test]
fn idle_events_are_inert_everywhere() {
    let paths: [&[MenuKey]; 5] = [
        &[],
        &[Enter],
        &[Enter, Next, Enter],
        &[Enter, Enter, Next, Enter],
        &[Enter, Enter, Next, Next, Enter, Next, Next],
    ];
    for path in paths {
        let mut bench = Bench::new();
        bench.press_all(path);
        let before = bench.menu.state();
        let motors = bench.motors.clone();
        for key in [Enter, Next, Escape] {
            bench.feed(MenuEvent::idle(key));
            assert_eq!(bench.menu.state(), before);
            assert!(!bench.menu.is_state_dirty());
        }
        assert_eq!(bench.motors, motors);
    }
}

#[test]
fn escape_returns_to_parent_and_stops_at_root() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Next, Enter, Next, Next, Enter, Next]);
    assert_eq!(bench.menu.state(), MenuState::SpeedDigit(1, level(1)));

    let expected = [
        MenuState::Speed(1),
        MenuState::Motor(1),
        MenuState::Main,
        MenuState::Main,
    ];
    for want in expected {
        bench.press(Escape);
        assert_eq!(bench.menu.state(), want);
    }
    assert_eq!(bench.motors, MotorStore::new());
}

#[test]
fn next_on_root_is_a_self_loop() {
    let mut bench = Bench::new();
    bench.press(Next);
    assert_eq!(bench.menu.state(), MenuState::Main);
    assert!(!bench.menu.is_state_dirty());
}

#[test]
fn speed_digit_ring_wraps_without_writing() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Enter, Next, Next, Enter]);
    assert_eq!(bench.menu.state(), MenuState::SpeedDigit(0, level(0)));

    for step in 1..=10u8 {
        bench.press(Next);
        assert_eq!(
            bench.menu.state(),
            MenuState::SpeedDigit(0, level(step % 10))
        );
    }
    assert_eq!(bench.motors, MotorStore::new());
}

#[test]
fn confirming_speed_writes_only_addressed_motor() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Enter, Next, Next, Enter]);
    for _ in 0..9 {
        bench.press(Next);
    }
    assert_eq!(bench.menu.state(), MenuState::SpeedDigit(0, SpeedLevel::MAX));

    bench.press(Enter);
    assert_eq!(bench.menu.state(), MenuState::Speed(0));
    assert_eq!(bench.motors.configs()[0].speed, SpeedLevel::MAX);
    assert_eq!(bench.motors.configs()[1], MotorConfig::INITIAL);
    assert_eq!(bench.display.row(0), "Motor 1: OFF, 9, R");
}

#[test]
fn spin_left_and_back() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Next, Enter, Next, Enter]);
    assert_eq!(bench.menu.state(), MenuState::SpinLeft(1));
    assert_eq!(bench.display.row(0), "Motor 2: Left");

    bench.press(Enter);
    assert_eq!(bench.menu.state(), MenuState::Spin(1));
    assert_eq!(bench.motors.configs()[1].spin, Spin::Left);
    assert_eq!(bench.display.row(0), "Motor 2: OFF, 0, L");

    bench.press_all(&[Enter, Next, Enter]);
    assert_eq!(bench.motors.configs()[1].spin, Spin::Right);
    assert_eq!(bench.motors.configs()[0].spin, Spin::Right);
}

#[test]
fn escape_from_leaf_does_not_write() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Enter, Enter]);
    assert_eq!(bench.menu.state(), MenuState::PowerOn(0));
    bench.press(Escape);
    assert_eq!(bench.menu.state(), MenuState::Power(0));
    assert!(!bench.motors.configs()[0].power);
}

#[test]
fn quiet_steps_do_not_touch_display() {
    let mut bench = Bench::new();
    bench.press(Enter);
    let calls = bench.display.calls;
    bench.step();
    bench.step();
    assert_eq!(bench.display.calls, calls);
}

#[test]
fn rendering_is_idempotent() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Next]);
    let first = bench.display.rows.clone();
    // An idle event marks the view stale without changing anything
    bench.feed(MenuEvent::idle(Next));
    assert_eq!(bench.display.rows, first);
    assert_eq!(bench.display.calls, 8 * 4);
}

#[test]
fn invalid_state_resets_to_root() {
    let mut bench = Bench::new();
    bench.press_all(&[Enter, Next, Enter]);
    assert_eq!(bench.menu.state(), MenuState::Power(1));

    // The same controller driven against a single-motor store
    let mut single: MotorStore<1> = MotorStore::new();
    let mut events: Deque<MenuEvent, 4> = Deque::new();
    events.push_back(MenuEvent::active(Enter)).unwrap();
    let calls = bench.display.calls;
    bench
        .menu
        .advance(&mut events, &mut single, &mut bench.display);

    assert_eq!(bench.menu.state(), MenuState::Main);
    assert_eq!(bench.menu.pending_event(), MenuEvent::IDLE);
    assert!(!bench.menu.is_state_dirty());
    assert!(!bench.menu.is_display_dirty());
    assert_eq!(bench.display.calls, calls + 8);
    assert_eq!(bench.display.row(1), "Enter/Next/Escape");
    assert_eq!(single, MotorStore::new());
}

#[test]
fn one_event_per_step() {
    let mut bench = Bench::new();
    bench.events.push_back(MenuEvent::active(Enter)).unwrap();
    bench.events.push_back(MenuEvent::active(Enter)).unwrap();

    bench.step();
    assert_eq!(bench.menu.state(), MenuState::Motor(0));
    bench.step();
    assert_eq!(bench.menu.state(), MenuState::Power(0));
    bench.step();
    assert_eq!(bench.menu.state(), MenuState::Power(0));
}

#[test]
fn steps_are_counted() {
    let mut bench = Bench::new();
    for _ in 0..4 {
        bench.step();
    }
    assert_eq!(bench.menu.steps(), 5);
    bench.menu.start(&mut bench.motors);
    assert_eq!(bench.menu.steps(), 0);
    assert!(bench.menu.is_display_dirty());
}
