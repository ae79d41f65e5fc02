use rayon::prelude::*;

use super::cell::{CellData, HALF_BLOCK};
use super::quantizer::ColorQuantizer;
use crate::decoder::ImageData;

/// Turns an image into a grid of half-block cells, two pixel rows per cell.
pub struct FrameProcessor {
    quantizer: ColorQuantizer,
}

impl FrameProcessor {
    pub fn new(quantizer: ColorQuantizer) -> Self {
        Self { quantizer }
    }

    /// Number of terminal rows needed for `image`.
    pub fn rows_for(image: &ImageData) -> usize {
        (image.height as usize + 1) / 2
    }

    pub fn process_frame(&self, image: &ImageData) -> Vec<CellData> {
        let mut cells = vec![CellData::default(); image.width as usize * Self::rows_for(image)];
        self.process_frame_into(image, &mut cells);
        cells
    }

    pub fn process_frame_into(&self, image: &ImageData, cells: &mut [CellData]) {
        let w = image.width as usize;
        let term_height = Self::rows_for(image);

        if w == 0 || cells.len() != w * term_height {
            return;
        }

        let chunk_size = if w * term_height > 10000 {
            2000
        } else {
            (w * term_height / rayon::current_num_threads().max(1)).max(1)
        };

        let quantizer = &self.quantizer;
        cells
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let start_idx = chunk_idx * chunk_size;

                for (i, cell) in chunk.iter_mut().enumerate() {
                    let idx = start_idx + i;
                    let cx = idx % w;
                    let cy = idx / w;

                    let top = image.pixel(cx, cy * 2).unwrap_or_default();
                    // Odd heights leave the last row without a bottom pixel.
                    let bottom = image.pixel(cx, cy * 2 + 1);

                    *cell = CellData {
                        char: HALF_BLOCK,
                        fg: quantizer.quantize(top),
                        bg: bottom.map(|pixel| quantizer.quantize(pixel)),
                    };
                }
            });
    }
}
