use anyhow::Result;
use std::io::Write;

use super::cell::{CellColor, CellData};
use super::quantizer::ColorDepth;

#[derive(Copy, Clone, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// 8 basic ANSI colors
    #[value(name = "8")]
    Ansi8,
    /// xterm 256-color palette
    #[value(name = "256")]
    Ansi256,
    /// 24-bit color
    #[value(name = "truecolor")]
    TrueColor,
    /// iTerm2 inline image, sent as-is
    #[value(name = "iterm2")]
    Iterm2,
}

impl OutputFormat {
    /// The color depth to quantize to, or `None` for passthrough.
    pub fn color_depth(self) -> Option<ColorDepth> {
        match self {
            Self::Ansi8 => Some(ColorDepth::Ansi8),
            Self::Ansi256 => Some(ColorDepth::Ansi256),
            Self::TrueColor => Some(ColorDepth::TrueColor),
            Self::Iterm2 => None,
        }
    }
}

/// Writes cell grids as SGR escape sequences, one terminal line per row.
pub struct AnsiPrinter<W: Write> {
    out: W,
    render_buffer: Vec<u8>,
}

impl<W: Write> AnsiPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            render_buffer: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Helper for zero-allocation integer writing
    #[inline(always)]
    fn write_u8_fast(buffer: &mut Vec<u8>, mut n: u8) {
        if n >= 100 {
            buffer.push(b'0' + (n / 100));
            n %= 100;
            buffer.push(b'0' + (n / 10));
            n %= 10;
            buffer.push(b'0' + n);
        } else if n >= 10 {
            buffer.push(b'0' + (n / 10));
            n %= 10;
            buffer.push(b'0' + n);
        } else {
            buffer.push(b'0' + n);
        }
    }

    fn write_color(buffer: &mut Vec<u8>, color: CellColor, background: bool) {
        match color {
            CellColor::Ansi(id) => {
                buffer.extend_from_slice(if background { b"\x1b[4" } else { b"\x1b[3" });
                Self::write_u8_fast(buffer, id);
            }
            CellColor::Indexed(id) => {
                buffer.extend_from_slice(if background { b"\x1b[48;5;" } else { b"\x1b[38;5;" });
                Self::write_u8_fast(buffer, id);
            }
            CellColor::True(rgb) => {
                buffer.extend_from_slice(if background { b"\x1b[48;2;" } else { b"\x1b[38;2;" });
                Self::write_u8_fast(buffer, rgb.red);
                buffer.push(b';');
                Self::write_u8_fast(buffer, rgb.green);
                buffer.push(b';');
                Self::write_u8_fast(buffer, rgb.blue);
            }
        }
        buffer.push(b'm');
    }

    /// Emits `cells` as rows of `width`. Colors are only re-sent when they
    /// change, and every row ends with a reset so nothing bleeds into the
    /// rest of the line.
    pub fn print_cells(&mut self, cells: &[CellData], width: usize) -> Result<()> {
        self.render_buffer.clear();
        if width == 0 {
            return Ok(());
        }
        let buffer = &mut self.render_buffer;

        for row in cells.chunks(width) {
            let mut last_fg: Option<CellColor> = None;
            let mut last_bg: Option<Option<CellColor>> = None;

            for cell in row {
                if last_fg != Some(cell.fg) {
                    Self::write_color(buffer, cell.fg, false);
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    match cell.bg {
                        Some(bg) => Self::write_color(buffer, bg, true),
                        None => buffer.extend_from_slice(b"\x1b[49m"),
                    }
                    last_bg = Some(cell.bg);
                }

                let mut b_dst = [0u8; 4];
                buffer.extend_from_slice(cell.char.encode_utf8(&mut b_dst).as_bytes());
            }

            buffer.extend_from_slice(b"\x1b[0m\n");
        }

        self.out.write_all(&self.render_buffer)?;
        self.out.flush()?;
        Ok(())
    }
}
