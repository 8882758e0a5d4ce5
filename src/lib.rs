//! Dotmatrix: A Game Boy (DMG) emulator written in Rust.
//!
//! Implements the DMG video and memory subsystem as documented in the
//! [Pan Docs](https://gbdev.io/pandocs/): PPU mode timing with STAT/LYC
//! interrupts, background tile rendering, the CPU memory map with its I/O
//! register page, OAM DMA, the boot ROM overlay, and trait seams for the
//! cartridge, timer, and input hardware around the core.
//!
//! ## Modules (Pan Docs references)
//!
//! - **bus** – [Memory Map](https://gbdev.io/pandocs/Memory_Map.html): cartridge, VRAM, WRAM +
//!   echo, OAM, [Hardware Registers](https://gbdev.io/pandocs/Hardware_Reg_List.html), OAM DMA, boot ROM overlay
//! - **cartridge** – [The Cartridge Header](https://gbdev.io/pandocs/The_Cartridge_Header.html): unbanked ROM boards + external RAM
//! - **interrupts** – [Interrupts](https://gbdev.io/pandocs/Interrupts.html): IF/IE bit assignments
//! - **joypad** – [Joypad Input](https://gbdev.io/pandocs/Joypad_Input.html): P1 group select, active-low nibble
//! - **palette** – [Palettes](https://gbdev.io/pandocs/Palettes.html): BGP/OBP0/OBP1 and the four DMG shades
//! - **ppu** – [Rendering](https://gbdev.io/pandocs/Rendering.html): mode state machine, STAT/LYC, tile fetch, 160×144
//! - **timer** – [Timer and Divider](https://gbdev.io/pandocs/Timer_and_Divider_Registers.html): DIV/TIMA/TMA/TAC interface

pub mod bus;
pub mod cartridge;
pub mod interrupts;
pub mod joypad;
pub mod palette;
pub mod ppu;
pub mod timer;
