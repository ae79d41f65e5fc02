pub mod distance;
pub mod error;
pub mod rgb;
pub mod table;
pub mod tree;

pub use distance::{squared_distance, Distance};
pub use error::PaletteError;
pub use rgb::{Axis, PaletteEntry, Rgb};
pub use tree::{Match, PaletteTree};
