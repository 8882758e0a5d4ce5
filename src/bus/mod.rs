//! Memory bus and address decoding for the Game Boy.
//!
//! Maps CPU addresses to the cartridge, VRAM, work RAM, OAM, and the I/O
//! register page, and owns the hardware those registers reach: PPU, joypad
//! select, serial capture, OAM DMA, interrupt flags, and the boot ROM
//! overlay. See [Memory Map](https://gbdev.io/pandocs/Memory_Map.html).

pub mod bus;
