//! PPU (Pixel Processing Unit) emulation for the Game Boy (DMG).
//!
//! See [Rendering](https://gbdev.io/pandocs/Rendering.html),
//! [LCDC](https://gbdev.io/pandocs/LCDC.html), [STAT](https://gbdev.io/pandocs/STAT.html).
//! Handles the mode 2 → 3 → 0 sequence over 144 visible scanlines plus the
//! ten-line vertical blank, STAT/LYC interrupts, background tile rendering,
//! and the 160×144 framebuffer.

pub mod ppu;
