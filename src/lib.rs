//! Terminal image viewer.
//!
//! Images are decoded, shrunk to fit, and written as half-block cells in
//! 8-color, 256-color or 24-bit form. The palette modes map every pixel to
//! its nearest palette color through a static k-d tree ([`color::PaletteTree`]).

pub mod color;
pub mod core;
pub mod decoder;
pub mod renderer;
