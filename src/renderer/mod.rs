pub mod cell;
pub mod display;
pub mod passthrough;
pub mod processor;
pub mod quantizer;

pub use cell::{CellColor, CellData};
pub use display::{AnsiPrinter, OutputFormat};
pub use processor::FrameProcessor;
pub use quantizer::{ColorDepth, ColorQuantizer};
