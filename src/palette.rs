//! DMG palette registers (BGP $FF47, OBP0 $FF48, OBP1 $FF49).
//!
//! Each register packs four 2-bit shade slots: bits 1-0 hold the shade for
//! color index 0, bits 3-2 for index 1, and so on up to bits 7-6 for index 3.
//! Object palettes treat color index 0 as transparent; the background palette
//! does not.

/// The four DMG gray shades (0xAARRGGBB), indexed by decoded shade number.
/// Shade 0 is the lightest, matching the blank LCD.
pub const SHADES: [u32; 4] = [0xFFFF_FFFF, 0xFFAA_AAAA, 0xFF55_5555, 0xFF00_0000];

/// One palette register plus its transparency rule.
pub struct Palette {
    /// Raw register byte, stored exactly as written.
    pub value: u8,
    /// Color index 0 is transparent (true for OBP0/OBP1, false for BGP).
    pub transparent_zero: bool,
}

impl Palette {
    /// Create a palette with all four slots at shade 0.
    pub fn new(transparent_zero: bool) -> Self {
        Palette {
            value: 0,
            transparent_zero,
        }
    }

    /// Resolve a 2-bit color index to its displayable shade.
    pub fn color(&self, index: u8) -> u32 {
        let shade = (self.value >> (index * 2)) & 0x03;
        SHADES[shade as usize]
    }

    /// True when a sprite layer should drop this pixel instead of drawing it.
    pub fn is_transparent(&self, index: u8) -> bool {
        self.transparent_zero && index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_palette_maps_index_to_same_shade() {
        let mut pal = Palette::new(false);
        pal.value = 0xE4; // 11 10 01 00: index n -> shade n

        assert_eq!(pal.color(0), SHADES[0]);
        assert_eq!(pal.color(1), SHADES[1]);
        assert_eq!(pal.color(2), SHADES[2]);
        assert_eq!(pal.color(3), SHADES[3]);
    }

    #[test]
    fn reversed_palette_maps_index_to_opposite_shade() {
        let mut pal = Palette::new(false);
        pal.value = 0x1B; // 00 01 10 11: index n -> shade 3-n

        assert_eq!(pal.color(0), SHADES[3]);
        assert_eq!(pal.color(1), SHADES[2]);
        assert_eq!(pal.color(2), SHADES[1]);
        assert_eq!(pal.color(3), SHADES[0]);
    }

    #[test]
    fn only_object_palettes_treat_index_zero_as_transparent() {
        let bgp = Palette::new(false);
        let obp = Palette::new(true);

        assert!(!bgp.is_transparent(0));
        assert!(obp.is_transparent(0));
        assert!(!obp.is_transparent(1));
    }
}
