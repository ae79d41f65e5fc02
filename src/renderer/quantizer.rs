//! Maps pixels to terminal colors.
//!
//! The palette depths go through the shared k-d trees, one nearest-color
//! query per pixel. True color passes pixels straight through.

use crate::color::table::{ansi_8_tree, xterm_256_tree};
use crate::color::{PaletteTree, Rgb};

use super::cell::CellColor;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ColorDepth {
    Ansi8,
    Ansi256,
    TrueColor,
}

#[derive(Clone, Copy, Debug)]
pub enum ColorQuantizer {
    Ansi8(&'static PaletteTree),
    Ansi256(&'static PaletteTree),
    TrueColor,
}

impl ColorQuantizer {
    pub fn new(depth: ColorDepth) -> Self {
        match depth {
            ColorDepth::Ansi8 => Self::Ansi8(ansi_8_tree()),
            ColorDepth::Ansi256 => Self::Ansi256(xterm_256_tree()),
            ColorDepth::TrueColor => Self::TrueColor,
        }
    }

    pub fn depth(&self) -> ColorDepth {
        match self {
            Self::Ansi8(_) => ColorDepth::Ansi8,
            Self::Ansi256(_) => ColorDepth::Ansi256,
            Self::TrueColor => ColorDepth::TrueColor,
        }
    }

    #[inline(always)]
    pub fn quantize(&self, pixel: Rgb) -> CellColor {
        match self {
            Self::Ansi8(tree) => CellColor::Ansi(tree.nearest(pixel).entry.id),
            Self::Ansi256(tree) => CellColor::Indexed(tree.nearest(pixel).entry.id),
            Self::TrueColor => CellColor::True(pixel),
        }
    }
}
