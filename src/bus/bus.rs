//! Game Boy memory bus implementation.
//!
//! Dispatches every CPU access to the right backing store and register,
//! following the DMG memory map: cartridge ROM under the boot ROM overlay,
//! VRAM, external RAM, work RAM plus its echo, OAM, the unusable gap, and
//! the $FFxx I/O page with HRAM and IE at the top.

use std::fs;

use ansi_term::Colour::Yellow;

use crate::{
    cartridge::Cartridge,
    joypad::{GbKey, InputProvider},
    ppu::ppu::{OAM_LEN, PPU},
    timer::Timer,
};

/// Path the boot ROM image is loaded from at construction.
pub const BIOS_PATH: &str = "DMG_ROM.bin";

/// Trait for memory-mapped I/O and clocking used by the CPU driver.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
    fn tick(&mut self, cycles: u32);
}

/// Main Game Boy bus: cartridge, PPU, timer, input, RAM, and I/O registers.
pub struct GbBus {
    pub cart: Box<dyn Cartridge>,
    pub ppu: PPU,
    pub timer: Box<dyn Timer>,
    pub input: Box<dyn InputProvider>,
    /// Work RAM ($C000-$DFFF), also reachable through the echo at $E000-$FDFF.
    pub wram: [u8; 0x2000],
    /// High RAM ($FF80-$FFFE).
    pub hram: [u8; 0x80],
    /// Interrupt flag (IF, $FF0F).
    pub interrupt_flag: u8,
    /// Interrupt enable (IE, $FFFF).
    pub interrupt_enable: u8,
    /// Boot ROM image overlaying $0000-$00FF while the latch is set.
    bios: [u8; 0x100],
    /// One-way latch: cleared by writing $01 to $FF50, never set again.
    bios_enabled: bool,
    /// Last value written to P1 ($FF00); selects the polled button group.
    joypad_select: u8,
    /// Bytes written to SB ($FF01), drained by `take_serial`.
    serial_buffer: Vec<u8>,
}

impl GbBus {
    /// Create a bus, loading the boot ROM overlay from [`BIOS_PATH`].
    /// A missing or short image leaves the overlay disabled.
    pub fn new(
        cart: Box<dyn Cartridge>,
        timer: Box<dyn Timer>,
        input: Box<dyn InputProvider>,
    ) -> Self {
        let mut bus = Self::with_bios(cart, timer, input, [0; 0x100]);
        match fs::read(BIOS_PATH) {
            Ok(image) if image.len() >= 0x100 => bus.bios.copy_from_slice(&image[..0x100]),
            _ => {
                println!(
                    "{} couldn't load {}; running without the boot ROM overlay",
                    Yellow.bold().paint("WARN"),
                    BIOS_PATH
                );
                bus.bios_enabled = false;
            }
        }
        bus
    }

    /// Create a bus with an in-memory boot ROM image.
    pub fn with_bios(
        cart: Box<dyn Cartridge>,
        timer: Box<dyn Timer>,
        input: Box<dyn InputProvider>,
        bios: [u8; 0x100],
    ) -> Self {
        Self {
            cart,
            ppu: PPU::new(),
            timer,
            input,
            wram: [0; 0x2000],
            hram: [0; 0x80],
            interrupt_flag: 0,
            interrupt_enable: 0,
            bios,
            bios_enabled: true,
            joypad_select: 0,
            serial_buffer: Vec::new(),
        }
    }

    /// True when the PPU has entered vblank; the framebuffer holds a full frame.
    pub fn frame_ready(&self) -> bool {
        self.ppu.frame_ready
    }

    /// Clear frame_ready after presenting (the next vblank sets it again).
    pub fn clear_frame_ready(&mut self) {
        self.ppu.frame_ready = false;
    }

    /// True while the boot ROM still overlays $0000-$00FF.
    pub fn bios_enabled(&self) -> bool {
        self.bios_enabled
    }

    /// Drain the bytes written to the serial data register so far.
    pub fn take_serial(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.serial_buffer)
    }

    /// I/O page read, dispatched on the low address byte. Reached from
    /// $FF00-$FFFF and the $FEFF alias of IE.
    fn read_io(&mut self, reg: u8) -> u8 {
        match reg {
            0x00 => self.read_joypad(),
            // SB: serial transfers are captured, not looped back.
            0x01 => 0,
            0x04 => self.timer.div(),
            0x05 => self.timer.tima(),
            0x06 => self.timer.tma(),
            0x07 => self.timer.tac(),
            0x0F => self.interrupt_flag,
            0x40 => self.ppu.lcdc,
            0x41 => self.ppu.stat(),
            0x42 => self.ppu.scroll_y,
            0x43 => self.ppu.scroll_x,
            0x44 => self.ppu.ly(),
            0x45 => self.ppu.ly_compare,
            // DMA is write-only.
            0x46 => 0,
            0x47 => self.ppu.bg_palette.value,
            0x48 => self.ppu.obj_palette0.value,
            0x49 => self.ppu.obj_palette1.value,
            0x4A => self.ppu.window_y,
            0x4B => self.ppu.window_x,
            0x80..=0xFE => self.hram[(reg - 0x80) as usize],
            0xFF => self.interrupt_enable,
            _ => 0,
        }
    }

    /// I/O page write, dispatched on the low address byte.
    fn write_io(&mut self, reg: u8, data: u8) {
        match reg {
            0x00 => self.joypad_select = data,
            0x01 => self.serial_buffer.push(data),
            0x04 => self.timer.set_div(data),
            0x05 => self.timer.set_tima(data),
            0x06 => self.timer.set_tma(data),
            0x07 => self.timer.set_tac(data),
            0x0F => self.interrupt_flag = data,
            0x40 => self.ppu.lcdc = data,
            0x41 => self.ppu.set_stat(data),
            0x42 => self.ppu.scroll_y = data,
            0x43 => self.ppu.scroll_x = data,
            // LY is read-only.
            0x44 => {}
            0x45 => self.ppu.ly_compare = data,
            0x46 => self.oam_dma(data),
            0x47 => self.ppu.bg_palette.value = data,
            0x48 => self.ppu.obj_palette0.value = data,
            0x49 => self.ppu.obj_palette1.value = data,
            0x4A => self.ppu.window_y = data,
            0x4B => self.ppu.window_x = data,
            // Writing $01 here unmaps the boot ROM for good.
            0x50 => {
                if data == 0x01 {
                    self.bios_enabled = false;
                }
            }
            0x80..=0xFE => self.hram[(reg - 0x80) as usize] = data,
            0xFF => self.interrupt_enable = data,
            _ => {}
        }
    }

    /// Resolve a P1 read: the stored select byte picks the button group,
    /// pressed keys clear bits in the returned low nibble (active-low),
    /// and the stored byte is OR'd back in.
    fn read_joypad(&mut self) -> u8 {
        if self.joypad_select == 0 {
            return 0;
        }

        let keys = if self.joypad_select & 0x20 != 0 {
            [GbKey::A, GbKey::B, GbKey::Select, GbKey::Start]
        } else {
            [GbKey::Right, GbKey::Left, GbKey::Up, GbKey::Down]
        };

        let mut nibble = 0x0F;
        for (bit, key) in keys.iter().enumerate() {
            if self.input.is_pressed(*key) {
                nibble &= !(1u8 << bit);
            }
        }
        nibble | self.joypad_select
    }

    /// OAM DMA ($FF46): copy 160 bytes from `page << 8` into OAM through
    /// the ordinary read path, so any mapped region can source the copy.
    fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        for i in 0..OAM_LEN as u16 {
            let byte = self.read(base + i);
            self.ppu.oam[i as usize] = byte;
        }
    }
}

impl Bus for GbBus {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM, with the boot ROM overlaying the first page
            0x0000..=0x7FFF => {
                if self.bios_enabled && addr < 0x100 {
                    self.bios[addr as usize]
                } else {
                    self.cart.read8(addr)
                }
            }
            // VRAM
            0x8000..=0x9FFF => self.ppu.vram[(addr - 0x8000) as usize],
            // Cartridge external RAM
            0xA000..=0xBFFF => self.cart.read8(addr),
            // Work RAM and its echo
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],
            // OAM
            0xFE00..=0xFE9F => self.ppu.oam[(addr - 0xFE00) as usize],
            // Unusable gap; $FEFF itself falls through to the I/O decode
            0xFEA0..=0xFEFE => 0,
            _ => self.read_io(addr as u8),
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            // ROM space: boot ROM is not writable, the cartridge decides
            0x0000..=0x7FFF => self.cart.write8(addr, data),
            // VRAM
            0x8000..=0x9FFF => self.ppu.vram[(addr - 0x8000) as usize] = data,
            // Cartridge external RAM
            0xA000..=0xBFFF => self.cart.write8(addr, data),
            // Work RAM and its echo
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = data,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = data,
            // OAM
            0xFE00..=0xFE9F => self.ppu.oam[(addr - 0xFE00) as usize] = data,
            // Unusable gap: writes dropped
            0xFEA0..=0xFEFE => {}
            _ => self.write_io(addr as u8, data),
        }
    }

    fn tick(&mut self, cycles: u32) {
        let requests = self.ppu.update(cycles);
        self.interrupt_flag |= requests;
    }
}
