//! Reference palettes baked into the binary, plus the shared trees built
//! from them on first use.

use std::sync::OnceLock;

use super::rgb::PaletteEntry;
use super::tree::PaletteTree;

/// The eight basic ANSI colors. Each id is the digit in `ESC[3<id>m`.
pub const ANSI_8: [PaletteEntry; 8] = [
    PaletteEntry::new(0, 0, 0, 0),
    PaletteEntry::new(1, 128, 0, 0),
    PaletteEntry::new(2, 0, 128, 0),
    PaletteEntry::new(3, 128, 128, 0),
    PaletteEntry::new(4, 0, 0, 128),
    PaletteEntry::new(5, 128, 0, 128),
    PaletteEntry::new(6, 0, 128, 128),
    PaletteEntry::new(7, 128, 128, 128),
];

const XTERM_SYSTEM: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The xterm 256-color palette: system colors, 6x6x6 cube, gray ramp.
pub const XTERM_256: [PaletteEntry; 256] = xterm_256();

const fn xterm_256() -> [PaletteEntry; 256] {
    let mut table = [PaletteEntry::new(0, 0, 0, 0); 256];

    let mut i = 0;
    while i < 16 {
        let (r, g, b) = XTERM_SYSTEM[i];
        table[i] = PaletteEntry::new(i as u8, r, g, b);
        i += 1;
    }

    while i < 232 {
        let cube = i - 16;
        table[i] = PaletteEntry::new(
            i as u8,
            CUBE_LEVELS[cube / 36],
            CUBE_LEVELS[(cube / 6) % 6],
            CUBE_LEVELS[cube % 6],
        );
        i += 1;
    }

    while i < 256 {
        let gray = 8 + 10 * (i - 232) as u8;
        table[i] = PaletteEntry::new(i as u8, gray, gray, gray);
        i += 1;
    }

    table
}

static ANSI_8_TREE: OnceLock<PaletteTree> = OnceLock::new();
static XTERM_256_TREE: OnceLock<PaletteTree> = OnceLock::new();

pub fn ansi_8_tree() -> &'static PaletteTree {
    ANSI_8_TREE.get_or_init(|| PaletteTree::from_array(ANSI_8))
}

pub fn xterm_256_tree() -> &'static PaletteTree {
    XTERM_256_TREE.get_or_init(|| PaletteTree::from_array(XTERM_256))
}
