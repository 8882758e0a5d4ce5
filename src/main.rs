//! Game Boy emulator entry point.
//!
//! Runs a built-in scrolling tile scene through the bus and PPU with a
//! display window: arrow keys scroll, Z (the A button) inverts the
//! palette, Escape quits. No cartridge file is needed.

use std::time::{Duration, Instant};

use ansi_term::Colour::Green;
use dotmatrix::{
    bus::bus::{Bus, GbBus},
    cartridge::RomOnly,
    joypad::{GbKey, Keypad},
    ppu::ppu::{HEIGHT, WIDTH},
    timer::NullTimer,
};
use minifb::{Key, Window, WindowOptions};

/// DMG refresh: 4194304 Hz / 70224 cycles per frame ≈ 59.73 Hz.
const FRAME_DURATION: Duration = Duration::from_nanos(16_742_706);

fn main() {
    let pad = Keypad::new();
    let mut bus = GbBus::new(
        Box::new(RomOnly::new(vec![0; 0x8000])),
        Box::new(NullTimer),
        Box::new(pad.clone()),
    );

    build_scene(&mut bus);

    println!(
        "{} scrolling test scene; arrows scroll, Z inverts the palette, Esc quits",
        Green.bold().paint("INFO")
    );

    let mut window = Window::new(
        "Dotmatrix",
        WIDTH,
        HEIGHT,
        WindowOptions {
            borderless: true,
            resize: true,
            scale: minifb::Scale::FitScreen,
            scale_mode: minifb::ScaleMode::AspectRatioStretch,
            topmost: true,
            title: false,
            transparency: false,
            none: false,
        },
    )
    .expect("Failed to create window");

    window.set_target_fps(60);

    let mut scx: u8 = 0;
    let mut scy: u8 = 0;
    let mut frame: u32 = 0;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame_start = Instant::now();

        sync_key(&window, &pad, Key::Z, GbKey::A);
        sync_key(&window, &pad, Key::X, GbKey::B);
        sync_key(&window, &pad, Key::Enter, GbKey::Start);
        sync_key(&window, &pad, Key::Space, GbKey::Select);

        let mut idle = true;
        if window.is_key_down(Key::Right) {
            scx = scx.wrapping_add(1);
            idle = false;
        }
        if window.is_key_down(Key::Left) {
            scx = scx.wrapping_sub(1);
            idle = false;
        }
        if window.is_key_down(Key::Down) {
            scy = scy.wrapping_add(1);
            idle = false;
        }
        if window.is_key_down(Key::Up) {
            scy = scy.wrapping_sub(1);
            idle = false;
        }
        // Drift slowly while no arrow is held.
        if idle && frame % 4 == 0 {
            scx = scx.wrapping_add(1);
        }
        bus.write(0xFF43, scx);
        bus.write(0xFF42, scy);

        // Poll the A button through P1 and invert the palette while held.
        bus.write(0xFF00, 0x20);
        let p1 = bus.read(0xFF00);
        bus.write(0xFF47, if p1 & 0x01 == 0 { 0x1B } else { 0xE4 });

        // Run the PPU until it enters vblank with a finished frame.
        while !bus.frame_ready() {
            bus.tick(4);
        }
        window
            .update_with_buffer(&bus.ppu.framebuffer, WIDTH, HEIGHT)
            .expect("Failed to update window");
        bus.clear_frame_ready();

        frame = frame.wrapping_add(1);

        // Pace to the DMG refresh rate (emulation runs far faster).
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }
}

/// Mirror a host key onto a Game Boy button.
fn sync_key(window: &Window, pad: &Keypad, host: Key, key: GbKey) {
    if window.is_key_down(host) {
        pad.press(key);
    } else {
        pad.release(key);
    }
}

/// Write a tile scene into VRAM and the LCD registers through the bus.
fn build_scene(bus: &mut GbBus) {
    bus.write(0xFF40, 0x91); // LCD on, $8000 tiles, $9800 map, BG on
    bus.write(0xFF47, 0xE4); // identity palette

    // Tile 1: checkerboard of 2x2-pixel squares.
    for row in 0..8u16 {
        let bits: u8 = if (row / 2) % 2 == 0 { 0xCC } else { 0x33 };
        bus.write(0x8010 + row * 2, bits);
        bus.write(0x8011 + row * 2, bits);
    }
    // Tile 2: horizontal stripes in the mid shade.
    for row in (0..8u16).step_by(2) {
        bus.write(0x8020 + row * 2, 0xFF);
    }
    // Tile 3: one-pixel diagonal.
    for row in 0..8u16 {
        let bits = 0x80u8 >> row;
        bus.write(0x8030 + row * 2, bits);
        bus.write(0x8031 + row * 2, bits);
    }

    // Tile map: diagonal bands cycling through the four tiles.
    for row in 0..32u16 {
        for col in 0..32u16 {
            bus.write(0x9800 + row * 32 + col, ((row + col) % 4) as u8);
        }
    }
}
