use crate::color::Rgb;

/// Upper half block: foreground paints the top pixel, background the bottom.
pub const HALF_BLOCK: char = '▀';

/// A color as the terminal will be told about it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellColor {
    /// One of the 8 basic colors (SGR 30-37 / 40-47).
    Ansi(u8),
    /// An xterm 256-color palette index.
    Indexed(u8),
    /// 24-bit color.
    True(Rgb),
}

/// Represents a single character cell on the terminal
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellData {
    pub char: char,
    pub fg: CellColor,
    /// `None` leaves the terminal's default background.
    pub bg: Option<CellColor>,
}

impl Default for CellData {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: CellColor::Ansi(0),
            bg: None,
        }
    }
}
