pub mod image_data;
pub mod loader;

pub use image_data::ImageData;
pub use loader::{load_image, LoadOptions};
