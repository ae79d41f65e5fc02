//! iTerm2 inline images: the terminal decodes the file itself, so the bytes
//! go out base64 encoded without touching the decoder or the palette.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};

pub fn write_inline_image<W: Write>(
    out: &mut W,
    name: &str,
    bytes: &[u8],
    width: Option<u32>,
) -> io::Result<()> {
    write!(
        out,
        "\x1b]1337;File=name={};size={};inline=1",
        STANDARD.encode(name),
        bytes.len()
    )?;
    if let Some(width) = width {
        write!(out, ";width={}", width)?;
    }
    write!(out, ":{}\x07\n", STANDARD.encode(bytes))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_payload_in_osc_1337() {
        let mut out = Vec::new();
        write_inline_image(&mut out, "a.png", b"hello", Some(40)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b]1337;File=name=YS5wbmc=;size=5;inline=1;width=40:aGVsbG8=\x07\n"
        );
    }

    #[test]
    fn width_is_optional() {
        let mut out = Vec::new();
        write_inline_image(&mut out, "x", b"", None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b]1337;File=name=eA==;size=0;inline=1:\x07\n"
        );
    }
}
