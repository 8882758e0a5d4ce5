//! Timer register interface (DIV $FF04, TIMA $FF05, TMA $FF06, TAC $FF07).
//!
//! The bus owns no timer state of its own: all four register addresses are
//! delegated to whatever implements this trait, so a clocked timer can be
//! swapped in without touching the address decoder.
//! Reference: https://gbdev.io/pandocs/Timer_and_Divider_Registers.html

/// The four timer/divider registers as seen from the bus.
pub trait Timer {
    /// Divider register ($FF04).
    fn div(&self) -> u8;
    fn set_div(&mut self, value: u8);

    /// Timer counter ($FF05).
    fn tima(&self) -> u8;
    fn set_tima(&mut self, value: u8);

    /// Timer modulo ($FF06).
    fn tma(&self) -> u8;
    fn set_tma(&mut self, value: u8);

    /// Timer control ($FF07).
    fn tac(&self) -> u8;
    fn set_tac(&mut self, value: u8);
}

/// Timer stand-in for setups without one: every register reads 0 and
/// writes are dropped.
pub struct NullTimer;

impl Timer for NullTimer {
    fn div(&self) -> u8 {
        0
    }

    fn set_div(&mut self, _value: u8) {}

    fn tima(&self) -> u8 {
        0
    }

    fn set_tima(&mut self, _value: u8) {}

    fn tma(&self) -> u8 {
        0
    }

    fn set_tma(&mut self, _value: u8) {}

    fn tac(&self) -> u8 {
        0
    }

    fn set_tac(&mut self, _value: u8) {}
}
