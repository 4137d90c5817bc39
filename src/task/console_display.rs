//! Console display
//!
//! A 4x20 character surface kept in memory and mirrored to the debug probe.
//! Every completed write logs the row it touched, so the menu can be
//! followed from the host without a panel attached.

use defmt::info;
use motor_menu::system::render::{COLUMNS, ROWS};
use motor_menu::CharDisplay;

pub struct ConsoleDisplay {
    cells: [[u8; COLUMNS]; ROWS],
    column: usize,
    row: usize,
}

impl ConsoleDisplay {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS]; ROWS],
            column: 0,
            row: 0,
        }
    }

    /// Current text of one row
    pub fn line(&self, row: usize) -> &str {
        // Only ASCII is ever written into the cells
        core::str::from_utf8(&self.cells[row]).unwrap_or("")
    }
}

impl CharDisplay for ConsoleDisplay {
    fn set_cursor(&mut self, column: u8, row: u8) {
        self.column = (column as usize).min(COLUMNS);
        self.row = (row as usize).min(ROWS - 1);
    }

    fn write_text(&mut self, text: &str) {
        let cells = &mut self.cells[self.row][self.column..];
        for (cell, byte) in cells.iter_mut().zip(text.bytes()) {
            *cell = if byte.is_ascii() { byte } else { b'?' };
        }
        self.column = (self.column + text.len()).min(COLUMNS);
        info!("lcd {}: |{}|", self.row, self.line(self.row));
    }
}
