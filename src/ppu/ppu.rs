//! Game Boy PPU implementation.
//!
//! Handles mode timing (OAM scan → pixel transfer → hblank per scanline,
//! vblank after line 144), STAT composition and interrupts, and background
//! rendering from the tile maps. Registers: $FF40–$FF4B via the bus.

use crate::interrupts::{INT_LCD_STAT, INT_VBLANK};
use crate::palette::{Palette, SHADES};

/// Visible LCD width in pixels.
pub const WIDTH: usize = 160;

/// Visible LCD height in pixels.
pub const HEIGHT: usize = 144;

/// VRAM size in bytes ($8000–$9FFF): tile data plus the two 32×32 tile maps.
pub const VRAM_LEN: usize = 0x2000;

/// OAM (Object Attribute Memory) size in bytes: 40 sprites × 4 bytes.
pub const OAM_LEN: usize = 0xA0;

/// PPU mode, encoded in STAT bits 1-0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    PixelTransfer = 3,
}

/// PPU state: mode timing, LCD registers, VRAM, OAM, and the framebuffer.
pub struct PPU {
    /// T-cycles spent in the current mode; resets to 0 on every transition.
    pub clock: u32,
    /// Current mode (STAT bits 1-0).
    pub mode: Mode,
    /// Current scanline (LY, $FF44): 0-143 visible, 144-153 vertical blank.
    pub scanline: u8,
    /// Scanline compare (LYC, $FF45).
    pub ly_compare: u8,
    /// LCD control (LCDC, $FF40).
    pub lcdc: u8,
    /// STAT bit 6: LYC=LY interrupt enable.
    pub coincidence_interrupt: bool,
    /// STAT bit 5: mode 2 (OAM scan) interrupt enable.
    pub oam_interrupt: bool,
    /// STAT bit 4: mode 1 (vblank) interrupt enable.
    pub vblank_interrupt: bool,
    /// STAT bit 3: mode 0 (hblank) interrupt enable.
    pub hblank_interrupt: bool,
    /// Background scroll (SCY $FF42, SCX $FF43).
    pub scroll_y: u8,
    pub scroll_x: u8,
    /// Window position (WY $FF4A, WX $FF4B). Round-trip through the bus;
    /// the background renderer does not draw the window layer.
    pub window_y: u8,
    pub window_x: u8,
    /// Background palette (BGP, $FF47).
    pub bg_palette: Palette,
    /// Object palettes (OBP0 $FF48, OBP1 $FF49); color 0 is transparent.
    pub obj_palette0: Palette,
    pub obj_palette1: Palette,
    /// Tile data and tile maps ($8000–$9FFF).
    pub vram: [u8; VRAM_LEN],
    /// OAM: 40 sprites × 4 bytes (Y, X, tile, attributes). Filled by OAM DMA.
    pub oam: [u8; OAM_LEN],
    /// Set when entering vblank; clear after presenting the framebuffer.
    pub frame_ready: bool,
    /// 160×144 framebuffer (0xAARRGGBB per pixel). Row-major, left-to-right, top-to-bottom.
    pub framebuffer: [u32; WIDTH * HEIGHT],
}

impl PPU {
    /// Create a PPU at the top of the frame: OAM scan of line 0, blank screen.
    pub fn new() -> Self {
        Self {
            clock: 0,
            mode: Mode::OamScan,
            scanline: 0,
            ly_compare: 0,
            lcdc: 0,
            coincidence_interrupt: false,
            oam_interrupt: false,
            vblank_interrupt: false,
            hblank_interrupt: false,
            scroll_y: 0,
            scroll_x: 0,
            window_y: 0,
            window_x: 0,
            bg_palette: Palette::new(false),
            obj_palette0: Palette::new(true),
            obj_palette1: Palette::new(true),
            vram: [0; VRAM_LEN],
            oam: [0; OAM_LEN],
            frame_ready: false,
            framebuffer: [SHADES[0]; WIDTH * HEIGHT],
        }
    }

    /// Advance the mode clock by `ticks` T-cycles and evaluate at most one
    /// mode transition. Returns the interrupt requests this step raised
    /// (`interrupts::INT_*` bits) for the caller to OR into IF.
    pub fn update(&mut self, ticks: u32) -> u8 {
        self.clock += ticks;
        let mut requests = 0;

        match self.mode {
            // Mode 2: OAM scan. LYC coincidence is checked at its tail.
            Mode::OamScan => {
                if self.clock > 83 {
                    self.clock = 0;
                    self.mode = Mode::PixelTransfer;
                    if self.coincidence_interrupt && self.scanline == self.ly_compare {
                        requests |= INT_LCD_STAT;
                    }
                }
            }

            // Mode 3: pixel transfer. The scanline is drawn when it ends.
            Mode::PixelTransfer => {
                if self.clock > 175 {
                    self.clock = 0;
                    self.mode = Mode::HBlank;
                    if self.hblank_interrupt {
                        requests |= INT_LCD_STAT;
                    }
                    // Line 144 passes through modes 2/3/0 but is never drawn.
                    if self.scanline < 144 {
                        self.render_scanline();
                    }
                }
            }

            // Mode 0: horizontal blank, then the next line or vblank.
            Mode::HBlank => {
                if self.clock > 207 {
                    self.clock = 0;
                    if self.scanline >= 144 {
                        self.mode = Mode::VBlank;
                        self.frame_ready = true;
                        requests |= INT_VBLANK;
                        if self.vblank_interrupt {
                            requests |= INT_LCD_STAT;
                        }
                    } else {
                        self.scanline += 1;
                        self.mode = Mode::OamScan;
                        if self.oam_interrupt {
                            requests |= INT_LCD_STAT;
                        }
                    }
                }
            }

            // Mode 1: vertical blank. LY tracks the counter in 456-cycle
            // steps and touches a transient 154 right at the wrap.
            Mode::VBlank => {
                self.scanline = (144 + self.clock / 456).min(154) as u8;
                if self.clock > 4560 {
                    self.clock = 0;
                    self.scanline = 0;
                    self.mode = Mode::OamScan;
                    if self.oam_interrupt {
                        requests |= INT_LCD_STAT;
                    }
                }
            }
        }

        requests
    }

    /// Current scanline for LY reads ($FF44). The register is read-only.
    pub fn ly(&self) -> u8 {
        self.scanline
    }

    /// Compose STAT ($FF41): interrupt enables in bits 6-3, the LYC=LY
    /// coincidence flag in bit 2, the mode in bits 1-0. Bit 7 reads 0.
    pub fn stat(&self) -> u8 {
        let mut stat = self.mode as u8;
        if self.scanline == self.ly_compare {
            stat |= 0x04;
        }
        if self.hblank_interrupt {
            stat |= 0x08;
        }
        if self.vblank_interrupt {
            stat |= 0x10;
        }
        if self.oam_interrupt {
            stat |= 0x20;
        }
        if self.coincidence_interrupt {
            stat |= 0x40;
        }
        stat
    }

    /// Write STAT: only the four interrupt-enable bits take effect; mode
    /// and coincidence are owned by the PPU.
    pub fn set_stat(&mut self, value: u8) {
        self.hblank_interrupt = value & 0x08 != 0;
        self.vblank_interrupt = value & 0x10 != 0;
        self.oam_interrupt = value & 0x20 != 0;
        self.coincidence_interrupt = value & 0x40 != 0;
    }

    /// Draw the background for the current scanline into the framebuffer.
    ///
    /// Fetches 21 tile cells starting from the SCX/SCY-derived map cell (the
    /// extra cell covers the fine-scroll overhang), wrapping the column
    /// within the 32-tile map row. Pixels resolve through BGP.
    pub fn render_scanline(&mut self) {
        let line = self.scanline as u16;
        let map_base: u16 = if self.lcdc & 0x08 != 0 { 0x9C00 } else { 0x9800 };
        let data_base: i32 = if self.lcdc & 0x10 != 0 { 0x8000 } else { 0x8800 };
        // Tile indices are signed only in $8800 addressing mode.
        let signed_index = data_base == 0x8800;

        let y = line + self.scroll_y as u16;
        let tile_row = (y / 8) % 32;
        let start_col = (self.scroll_x as u16 / 8) % 32;
        let row_offset = (2 * y) % 16;

        // Fine scroll: the first fetched cell sticks out to the left.
        let mut x = -((self.scroll_x % 8) as i32);

        for i in 0..21 {
            let col = (start_col + i) % 32;
            let map_addr = map_base + tile_row * 32 + col;
            let tile_id = self.vram[(map_addr - 0x8000) as usize];

            let index = if signed_index {
                tile_id as i8 as i32
            } else {
                tile_id as i32
            };
            let row_addr = data_base + index * 16 + row_offset as i32;
            // First byte of the pair is the high bit plane.
            let hi = self.vram[(row_addr - 0x8000) as usize];
            let lo = self.vram[(row_addr - 0x8000 + 1) as usize];
            let mut planes = ((hi as u16) << 8) | lo as u16;

            for _ in 0..8 {
                let color = (((planes >> 15) & 1) << 1 | ((planes >> 7) & 1)) as u8;
                if x >= 0 && x < WIDTH as i32 {
                    self.framebuffer[line as usize * WIDTH + x as usize] =
                        self.bg_palette.color(color);
                }
                // The shift advances even for clipped pixels.
                planes <<= 1;
                x += 1;
            }
        }
    }
}
