//! Band-averaged color sampling
//!
//! Sample images hold one horizontal band per intensity step. The sampler
//! averages a centered window of columns per band, over all rows, yielding
//! one RGB float triple per band in left-to-right order. Fully
//! deterministic; no randomness and no external state.

use image::RgbImage;

use crate::constants::sampling;
use crate::error::{CatalogError, Result};

/// Averages a centered pixel window per intensity band
#[derive(Debug, Clone)]
pub struct BandSampler {
    band_count: u32,
    window_width: u32,
}

impl Default for BandSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl BandSampler {
    /// Create a sampler with the standard geometry (3 bands, 100px window)
    pub fn new() -> Self {
        Self {
            band_count: sampling::BAND_COUNT,
            window_width: sampling::SAMPLE_WINDOW_WIDTH,
        }
    }

    /// Create a sampler with custom geometry
    pub fn with_params(band_count: u32, window_width: u32) -> Self {
        Self {
            band_count,
            window_width,
        }
    }

    /// Number of bands this sampler expects
    pub fn band_count(&self) -> u32 {
        self.band_count
    }

    /// Average color of each band's centered window, left to right
    ///
    /// Window bounds truncate like the original pipeline:
    /// `trunc((i + 0.5) * width / bands ± window / 2)`.
    ///
    /// # Errors
    ///
    /// `InvalidImage` when the sampler geometry is degenerate (zero bands or
    /// a zero-width window), the image has no pixels, or the image is too
    /// narrow to fit the sampling window inside every band.
    pub fn sample(&self, image: &RgbImage) -> Result<Vec<[f64; 3]>> {
        let (width, height) = image.dimensions();
        if self.band_count == 0 {
            return Err(CatalogError::invalid_image("sampler has zero bands"));
        }
        if self.window_width == 0 {
            return Err(CatalogError::invalid_image("sampler has a zero-width window"));
        }
        if width == 0 || height == 0 {
            return Err(CatalogError::invalid_image("image has no pixels"));
        }
        if width < self.band_count * self.window_width {
            return Err(CatalogError::invalid_image(format!(
                "width {} cannot fit a {}px window in each of {} bands",
                width, self.window_width, self.band_count
            )));
        }

        let mut colors = Vec::with_capacity(self.band_count as usize);
        for band in 0..self.band_count {
            let center = (band as f64 + 0.5) * width as f64 / self.band_count as f64;
            let x0 = (center - self.window_width as f64 / 2.0) as u32;
            let x1 = (center + self.window_width as f64 / 2.0) as u32;

            let mut sum = [0.0f64; 3];
            for y in 0..height {
                for x in x0..x1 {
                    let pixel = image.get_pixel(x, y).0;
                    for c in 0..3 {
                        sum[c] += pixel[c] as f64;
                    }
                }
            }
            let count = ((x1 - x0) * height) as f64;
            colors.push(sum.map(|s| s / count));
        }
        Ok(colors)
    }
}
