use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use super::config::Settings;
use crate::color::PaletteTree;
use crate::decoder::load_image;
use crate::renderer::passthrough::write_inline_image;
use crate::renderer::{AnsiPrinter, ColorQuantizer, FrameProcessor};

/// Prints one image file to `out` in the configured format.
pub fn print_image<W: Write>(path: &Path, settings: &Settings, out: &mut W) -> Result<()> {
    let Some(depth) = settings.format.color_depth() else {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        write_inline_image(out, &name, &bytes, settings.inline_width)
            .context("Failed to write inline image")?;
        return Ok(());
    };

    let image = load_image(path, &settings.load)?;
    let processor = FrameProcessor::new(ColorQuantizer::new(depth));
    let cells = processor.process_frame(&image);

    AnsiPrinter::new(&mut *out)
        .print_cells(&cells, image.width as usize)
        .with_context(|| format!("Failed to print {}", path.display()))
}

/// Renders the tree one node per line, indented by depth.
pub fn format_tree(tree: &PaletteTree) -> String {
    let mut text = String::new();
    tree.walk_depth_first(|entry, axis, depth| {
        for _ in 0..depth {
            text.push('\t');
        }
        let _ = writeln!(text, "{:3} {} {:?}", entry.id, entry.color, axis);
    });
    text
}
