//! Game Boy cartridge loading and the unbanked ROM board.
//!
//! The bus hands the cartridge every access to $0000–$7FFF (ROM) and
//! $A000–$BFFF (external RAM). Header byte $0147 names the board type; only
//! the unbanked boards ($00 ROM ONLY, $08 ROM+RAM, $09 ROM+RAM+BATTERY) are
//! handled here, anything with an MBC panics at load.
//! Reference: https://gbdev.io/pandocs/The_Cartridge_Header.html

use std::fs::File;
use std::io::Read;

/// Cartridge-side memory as seen from the bus: ROM reads plus external RAM.
pub trait Cartridge {
    /// Read from ROM ($0000–$7FFF) or external RAM ($A000–$BFFF).
    fn read8(&self, addr: u16) -> u8;

    /// Write to cartridge space. Unbanked boards drop writes below $8000.
    fn write8(&mut self, addr: u16, value: u8);
}

/// A flat ROM image with 8 KiB of external RAM and no banking hardware.
pub struct RomOnly {
    /// Raw ROM image, mapped from $0000 without translation.
    pub rom: Vec<u8>,
    /// External RAM at $A000–$BFFF.
    pub ram: [u8; 0x2000],
}

impl RomOnly {
    /// Wrap an in-memory ROM image without header checks.
    pub fn new(rom: Vec<u8>) -> Self {
        RomOnly {
            rom,
            ram: [0; 0x2000],
        }
    }

    /// Load a ROM file. Header byte $0147 must name an unbanked board.
    pub fn load(path: &str) -> Self {
        let mut file = File::open(path).expect("Failed to open ROM");
        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();

        // Cartridge type from header byte $0147. Anything else needs an MBC.
        let kind = data.get(0x147).copied().unwrap_or(0x00);
        match kind {
            0x00 | 0x08 | 0x09 => {}
            _ => panic!("unsupported cartridge type {:#04x}", kind),
        }

        RomOnly::new(data)
    }
}

impl Cartridge for RomOnly {
    fn read8(&self, addr: u16) -> u8 {
        match addr {
            0xA000..=0xBFFF => self.ram[(addr - 0xA000) as usize],
            // Reads past the image float high, like a disconnected bus.
            _ => self.rom.get(addr as usize).copied().unwrap_or(0xFF),
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0xA000..=0xBFFF => self.ram[(addr - 0xA000) as usize] = value,
            // No banking registers on these boards: ROM writes are dropped.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_reads_map_flat_from_zero() {
        let mut rom = vec![0; 0x8000];
        rom[0x0000] = 0x11;
        rom[0x7FFF] = 0x22;
        let cart = RomOnly::new(rom);

        assert_eq!(cart.read8(0x0000), 0x11);
        assert_eq!(cart.read8(0x7FFF), 0x22);
    }

    #[test]
    fn reads_past_the_image_return_open_bus() {
        let cart = RomOnly::new(vec![0xAB; 0x100]);

        assert_eq!(cart.read8(0x00FF), 0xAB);
        assert_eq!(cart.read8(0x0100), 0xFF);
    }

    #[test]
    fn external_ram_round_trips_and_rom_writes_are_dropped() {
        let mut cart = RomOnly::new(vec![0x55; 0x8000]);

        cart.write8(0xA000, 0x99);
        cart.write8(0xBFFF, 0x77);
        assert_eq!(cart.read8(0xA000), 0x99);
        assert_eq!(cart.read8(0xBFFF), 0x77);

        cart.write8(0x1234, 0xEE);
        assert_eq!(cart.read8(0x1234), 0x55);
    }
}
