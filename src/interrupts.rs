//! Interrupt request (IF, $FF0F) and enable (IE, $FFFF) register bits.

pub const INT_VBLANK: u8 = 1 << 0;
pub const INT_LCD_STAT: u8 = 1 << 1; // STAT sources: coincidence/OAM/vblank/hblank
pub const INT_TIMER: u8 = 1 << 2;
pub const INT_SERIAL: u8 = 1 << 3;
pub const INT_JOYPAD: u8 = 1 << 4;
