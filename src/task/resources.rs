//! Hardware Resource Management
//!
//! Assigns the pins used by the menu to the tasks that own them. The display
//! is mirrored to the debug probe and needs no pins of its own.

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Enter key: descend or confirm
    enter: EnterButtonResources {
        btn: PIN_16,
    },
    /// Next key: move to the next entry
    next: NextButtonResources {
        btn: PIN_17,
    },
    /// Escape key: back to the parent entry
    escape: EscapeButtonResources {
        btn: PIN_10,
    },
}
