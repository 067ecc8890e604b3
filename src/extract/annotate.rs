//! Swatch annotation of sample images
//!
//! After sampling, the image gets a flat block of each computed color
//! painted over the top-left of its band, with a 1px black border on the
//! block's bottom and right edges and a 1px black divider at each interior
//! band boundary. The annotated copy pairs the raw photograph with the
//! extracted color for visual audit.

use image::{Rgb, RgbImage};

use crate::constants::sampling;
use crate::error::{CatalogError, Result};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Paint the sampled colors onto the image, one swatch block per band
///
/// Block geometry matches the original pipeline: rows `1..65`, columns
/// `x+1..x+width/6` where `x = trunc(band * width / bands)`.
///
/// # Errors
///
/// `InvalidImage` when the image is too short for the swatch block or too
/// narrow for its border geometry.
pub fn annotate(image: &mut RgbImage, colors: &[[f64; 3]]) -> Result<()> {
    let (width, height) = image.dimensions();
    let bands = colors.len() as u32;
    if bands == 0 {
        return Err(CatalogError::invalid_image("no sampled colors to paint"));
    }
    if height <= sampling::SWATCH_HEIGHT {
        return Err(CatalogError::invalid_image(format!(
            "height {} too short for a {}px swatch block",
            height,
            sampling::SWATCH_HEIGHT
        )));
    }
    let block_width = width / sampling::SWATCH_WIDTH_DIVISOR;
    if block_width < 2 {
        return Err(CatalogError::invalid_image(format!(
            "width {} too narrow for swatch blocks",
            width
        )));
    }

    for (band, color) in colors.iter().enumerate() {
        let flat = Rgb(color.map(|v| v.round().clamp(0.0, 255.0) as u8));
        let x = (band as u32 * width) / bands;
        if x + block_width >= width {
            return Err(CatalogError::invalid_image(format!(
                "swatch block of band {} exceeds image width {}",
                band, width
            )));
        }

        // Flat color block
        for y in 1..sampling::SWATCH_HEIGHT {
            for col in x + 1..x + block_width {
                image.put_pixel(col, y, flat);
            }
        }
        // Bottom border
        for col in x + 1..x + block_width {
            image.put_pixel(col, sampling::SWATCH_HEIGHT, BLACK);
        }
        // Right border
        for y in 1..sampling::SWATCH_HEIGHT {
            image.put_pixel(x + block_width, y, BLACK);
        }
        // Divider at interior band boundaries
        if band > 0 {
            for y in 0..height {
                image.put_pixel(x, y, BLACK);
            }
        }
    }
    Ok(())
}
