//! # Copic Wheel
//!
//! A Rust crate for working with the Copic marker color catalog.
//!
//! This library provides:
//! - Parsing of color codes into family, blending group and intensity
//! - Catalog filtering by family, intensity or pen product line
//! - Deterministic color extraction from downloaded sample images
//! - Annotated audit copies of every sampled image
//! - Per-intensity circular color wheel charts as SVG
//!
//! ## Example
//!
//! ```rust,no_run
//! use copic_wheel::{sample_image_values, CodeScheme};
//! use std::path::Path;
//!
//! let scheme = CodeScheme::copic();
//! let parsed = scheme.parse("YR13")?;
//! println!("family {}, group {}", parsed.family, parsed.group);
//!
//! let values = sample_image_values(Path::new("color_samples/YR13.jpg"))?;
//! println!("sampled: {} {} {}", values[0], values[1], values[2]);
//! # Ok::<(), copic_wheel::CatalogError>(())
//! ```

use std::path::Path;

pub mod catalog;
pub mod code;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod wheel;

pub use catalog::{Catalog, ColorEntry};
pub use code::{BlendingGroup, CodeScheme, Family, HuePoint, Intensity, ParsedCode, Parity};
pub use color::{hex_to_rgb, luminosity, rgb_to_hex};
pub use config::{ExtractionConfig, SamplerConfig};
pub use error::{CatalogError, Result};
pub use extract::{extract_directory, extract_image, BandSampler, BatchReport};
pub use wheel::ColorWheel;

/// Sample the three band colors of a single image file
///
/// Convenience entry point using the standard sampling geometry.
///
/// # Arguments
///
/// * `image_path` - Path to the sample image
///
/// # Returns
///
/// The three hex color values, lightest band first
///
/// # Errors
///
/// Returns `CatalogError` if the image cannot be loaded or its dimensions
/// do not fit the three-band layout.
pub fn sample_image_values(image_path: &Path) -> Result<[String; 3]> {
    let sampled = extract::extract_image(image_path, &BandSampler::new())?;
    sampled.hex.try_into().map_err(|_| {
        CatalogError::invalid_image("expected exactly 3 sampled bands")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_parse() {
        let scheme = CodeScheme::copic();
        let parsed = scheme.parse("YR13").unwrap();
        assert_eq!(parsed.family, Family::YR);
        assert_eq!(parsed.code(), "YR13");
    }

    #[test]
    fn test_sample_image_values_missing_file() {
        let result = sample_image_values(Path::new("nonexistent_sample.jpg"));
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::ImageLoad { .. }
        ));
    }
}
