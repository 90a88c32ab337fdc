//! Background raster sampling.
//!
//! The sampler keeps the decoded background image plus a copy scaled down to
//! the grid dimensions, so each grid cell maps to exactly one pixel. While
//! no raster is loaded (a new background is still decoding, or none was ever
//! set) sampling reports not-ready; callers treat that as a normal transient
//! state, not an error.

use image::{DynamicImage, RgbImage, imageops};

use crate::grid::CellCoord;

/// Samples the background pixel under a grid cell.
#[derive(Debug, Clone)]
pub struct RasterSampler {
    cols: u32,
    rows: u32,
    source: Option<DynamicImage>,
    buffer: Option<RgbImage>,
}

impl RasterSampler {
    /// Create an empty (not ready) sampler for a `cols` x `rows` grid.
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            source: None,
            buffer: None,
        }
    }

    /// Whether a raster is loaded and scaled to the grid.
    pub fn is_ready(&self) -> bool {
        self.buffer.is_some()
    }

    /// Grid dimensions the sampler is scaled to, as `(cols, rows)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// Set the background raster. The full-resolution source is retained so
    /// a later grid resize can rescale without a re-decode.
    pub fn set_raster(&mut self, image: DynamicImage) {
        self.source = Some(image);
        self.redraw();
    }

    /// Drop the raster; the sampler reports not-ready until the next
    /// `set_raster`. Called when a new background starts loading.
    pub fn clear_raster(&mut self) {
        self.source = None;
        self.buffer = None;
    }

    /// Change the grid dimensions, rescaling the retained source if present.
    pub fn resize(&mut self, cols: u32, rows: u32) {
        self.cols = cols;
        self.rows = rows;
        self.redraw();
    }

    /// Pixel color at a grid cell, or `None` while not ready or when the
    /// coordinate falls outside the buffer.
    pub fn sample(&self, coord: CellCoord) -> Option<[u8; 3]> {
        let buffer = self.buffer.as_ref()?;
        if coord.x >= buffer.width() || coord.y >= buffer.height() {
            return None;
        }
        Some(buffer.get_pixel(coord.x, coord.y).0)
    }

    fn redraw(&mut self) {
        self.buffer = self.source.as_ref().map(|img| {
            imageops::resize(
                &img.to_rgb8(),
                self.cols,
                self.rows,
                imageops::FilterType::Triangle,
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn test_not_ready_before_raster_set() {
        let sampler = RasterSampler::new(320, 180);
        assert!(!sampler.is_ready());
        assert_eq!(sampler.sample(CellCoord::new(0, 0)), None);
    }

    #[test]
    fn test_uniform_raster_samples_everywhere() {
        let mut sampler = RasterSampler::new(8, 4);
        sampler.set_raster(uniform_image(640, 480, [120, 30, 200]));
        assert!(sampler.is_ready());
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(sampler.sample(CellCoord::new(x, y)), Some([120, 30, 200]));
            }
        }
    }

    #[test]
    fn test_out_of_range_coord_is_none() {
        let mut sampler = RasterSampler::new(8, 4);
        sampler.set_raster(uniform_image(64, 64, [10, 10, 10]));
        assert_eq!(sampler.sample(CellCoord::new(8, 0)), None);
        assert_eq!(sampler.sample(CellCoord::new(0, 4)), None);
    }

    #[test]
    fn test_clear_raster_goes_not_ready() {
        let mut sampler = RasterSampler::new(8, 4);
        sampler.set_raster(uniform_image(64, 64, [10, 10, 10]));
        sampler.clear_raster();
        assert!(!sampler.is_ready());
        assert_eq!(sampler.sample(CellCoord::new(0, 0)), None);
    }

    #[test]
    fn test_resize_rescales_retained_source() {
        let mut sampler = RasterSampler::new(8, 4);
        sampler.set_raster(uniform_image(64, 64, [77, 88, 99]));
        sampler.resize(16, 9);
        assert!(sampler.is_ready());
        assert_eq!(sampler.sample(CellCoord::new(15, 8)), Some([77, 88, 99]));
        assert_eq!(sampler.sample(CellCoord::new(16, 8)), None);
    }

    #[test]
    fn test_resize_without_source_stays_not_ready() {
        let mut sampler = RasterSampler::new(8, 4);
        sampler.resize(16, 9);
        assert!(!sampler.is_ready());
    }
}
