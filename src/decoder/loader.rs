use anyhow::{bail, Context, Result};
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use log::debug;
use std::path::Path;

use super::image_data::ImageData;

/// Size limits applied while loading. `None` leaves that dimension alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

/// Decodes `path` to RGB and shrinks it to fit `options`, keeping the
/// aspect ratio. Greyscale is expanded and alpha dropped.
pub fn load_image(path: &Path, options: &LoadOptions) -> Result<ImageData> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    if width == 0 || height == 0 {
        bail!("Image {} has no pixels ({}x{})", path.display(), width, height);
    }

    let (target_width, target_height) = fit_dimensions(width, height, options);
    debug!(
        "decoded {}: {}x{} -> {}x{}",
        path.display(),
        width,
        height,
        target_width,
        target_height
    );

    if (target_width, target_height) == (width, height) {
        return Ok(ImageData::new(rgb.into_raw(), width, height));
    }

    resize(rgb.into_raw(), width, height, target_width, target_height)
}

/// Target size for an image of `width` x `height` under `options`.
///
/// Width is fitted first; the height limit then shrinks the result further
/// if needed. Neither dimension drops below one pixel.
pub fn fit_dimensions(width: u32, height: u32, options: &LoadOptions) -> (u32, u32) {
    let (mut w, mut h) = (width, height);

    if let Some(max_width) = options.max_width.filter(|&m| m > 0) {
        if w > max_width {
            h = scale(h, max_width, w);
            w = max_width;
        }
    }

    if let Some(max_height) = options.max_height.filter(|&m| m > 0) {
        if h > max_height {
            w = scale(w, max_height, h);
            h = max_height;
        }
    }

    (w, h)
}

#[inline]
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    (value as u64 * numerator as u64 / denominator as u64).max(1) as u32
}

fn resize(buffer: Vec<u8>, width: u32, height: u32, new_width: u32, new_height: u32) -> Result<ImageData> {
    let src = Image::from_vec_u8(width, height, buffer, PixelType::U8x3)
        .context("Failed to wrap decoded pixels for resizing")?;
    let mut dst = Image::new(new_width, new_height, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    Resizer::new()
        .resize(&src, &mut dst, &options)
        .with_context(|| format!("Failed to resize {}x{} to {}x{}", width, height, new_width, new_height))?;

    Ok(ImageData::new(dst.into_vec(), new_width, new_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use tempfile::TempDir;

    fn limits(max_width: Option<u32>, max_height: Option<u32>) -> LoadOptions {
        LoadOptions {
            max_width,
            max_height,
        }
    }

    #[test]
    fn small_images_are_left_alone() {
        assert_eq!(fit_dimensions(40, 30, &limits(Some(80), Some(60))), (40, 30));
        assert_eq!(fit_dimensions(400, 300, &LoadOptions::default()), (400, 300));
    }

    #[test]
    fn width_limit_keeps_aspect_ratio() {
        assert_eq!(fit_dimensions(400, 300, &limits(Some(80), None)), (80, 60));
        assert_eq!(fit_dimensions(1000, 3, &limits(Some(10), None)), (10, 1));
    }

    #[test]
    fn height_limit_applies_after_width() {
        assert_eq!(fit_dimensions(400, 800, &limits(Some(100), Some(50))), (25, 50));
        assert_eq!(fit_dimensions(100, 400, &limits(None, Some(100))), (25, 100));
    }

    #[test]
    fn zero_limit_means_unset() {
        assert_eq!(fit_dimensions(400, 300, &limits(Some(0), Some(0))), (400, 300));
    }

    #[test]
    fn loads_png_as_rgb() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 100, y as u8 * 100, 7]))
            .save(&path)
            .unwrap();

        let image = load_image(&path, &LoadOptions::default()).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.pixel(2, 1), Some(Rgb::new(200, 100, 7)));
    }

    #[test]
    fn greyscale_is_expanded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grey.png");
        image::GrayImage::from_pixel(2, 2, image::Luma([77]))
            .save(&path)
            .unwrap();

        let image = load_image(&path, &LoadOptions::default()).unwrap();
        assert_eq!(image.buffer.len(), 2 * 2 * 3);
        assert_eq!(image.pixel(1, 1), Some(Rgb::new(77, 77, 77)));
    }

    #[test]
    fn wide_images_are_shrunk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbImage::from_pixel(64, 32, image::Rgb([10, 200, 30]))
            .save(&path)
            .unwrap();

        let image = load_image(&path, &limits(Some(16), None)).unwrap();
        assert_eq!((image.width, image.height), (16, 8));
        assert_eq!(image.buffer.len(), 16 * 8 * 3);
        // A flat color survives filtering, give or take rounding.
        let pixel = image.pixel(8, 4).unwrap();
        for (got, want) in pixel.to_array().into_iter().zip([10u8, 200, 30]) {
            assert!(got.abs_diff(want) <= 1, "{pixel} drifted from flat color");
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_image(&dir.path().join("nope.png"), &LoadOptions::default()).unwrap_err();
        assert!(err.to_string().contains("nope.png"));
    }
}
