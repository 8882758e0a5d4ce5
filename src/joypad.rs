//! Game Boy joypad input handling.
//!
//! The P1/JOYP register ($FF00) multiplexes eight buttons onto four lines:
//! the written select bits pick either the action buttons (bit 5) or the
//! direction pad (bit 4), and reads return the chosen group in the low
//! nibble, active-low (0 = pressed).
//! Reference: https://gbdev.io/pandocs/Joypad_Input.html

use std::cell::Cell;
use std::rc::Rc;

/// The eight DMG buttons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GbKey {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

/// Source of live button state, polled by the bus on every P1 read.
pub trait InputProvider {
    /// True while `key` is held down.
    fn is_pressed(&self, key: GbKey) -> bool;
}

/// Shared button state: the bus polls one handle while the frontend presses
/// and releases buttons through a clone of it.
#[derive(Clone)]
pub struct Keypad {
    /// Held buttons: bit 0 = Right, 1 = Left, 2 = Up, 3 = Down,
    /// 4 = A, 5 = B, 6 = Select, 7 = Start.
    state: Rc<Cell<u8>>,
}

impl Keypad {
    /// Create a keypad with no buttons held.
    pub fn new() -> Self {
        Keypad {
            state: Rc::new(Cell::new(0)),
        }
    }

    /// Mark `key` as held down.
    pub fn press(&self, key: GbKey) {
        self.state.set(self.state.get() | Self::mask(key));
    }

    /// Mark `key` as released.
    pub fn release(&self, key: GbKey) {
        self.state.set(self.state.get() & !Self::mask(key));
    }

    fn mask(key: GbKey) -> u8 {
        match key {
            GbKey::Right => 1 << 0,
            GbKey::Left => 1 << 1,
            GbKey::Up => 1 << 2,
            GbKey::Down => 1 << 3,
            GbKey::A => 1 << 4,
            GbKey::B => 1 << 5,
            GbKey::Select => 1 << 6,
            GbKey::Start => 1 << 7,
        }
    }
}

impl InputProvider for Keypad {
    fn is_pressed(&self, key: GbKey) -> bool {
        self.state.get() & Self::mask(key) != 0
    }
}
