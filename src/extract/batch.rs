//! Batch extraction over a directory of sample images
//!
//! Each image file is named after its color code (`YR13.jpg`). The batch
//! samples every image in filename order, merges the hex values into the
//! catalog, and writes an annotated copy. A failure on one image is
//! recorded and the batch continues; only setup errors (unreadable
//! directories) abort the run.

use image::RgbImage;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::color::rgb_to_hex;
use crate::config::ExtractionConfig;
use crate::error::{CatalogError, Result};
use crate::extract::{annotate, BandSampler};

/// Extensions recognized as sample images
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// One failed batch item
#[derive(Debug)]
pub struct BatchFailure {
    /// Color code of the failed sample (the file stem)
    pub code: String,
    pub error: CatalogError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Codes extracted and merged, in processing order
    pub processed: Vec<String>,
    /// Items skipped after an isolated failure
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A sampled image: the band colors and the annotated copy
#[derive(Debug)]
pub struct SampledImage {
    /// Average color per band, left to right
    pub colors: Vec<[f64; 3]>,
    /// Hex form of `colors`
    pub hex: Vec<String>,
    /// Input image with swatch blocks painted over
    pub annotated: RgbImage,
}

/// Sample a single image file and annotate a copy
pub fn extract_image(path: &Path, sampler: &BandSampler) -> Result<SampledImage> {
    let mut image = image::open(path)
        .map_err(|source| CatalogError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let colors = sampler.sample(&image)?;
    annotate(&mut image, &colors)?;
    let hex = colors.iter().map(|c| rgb_to_hex(*c)).collect();
    Ok(SampledImage {
        colors,
        hex,
        annotated: image,
    })
}

/// Run extraction over every sample image in the configured directory
///
/// Returns the batch report; [`BatchReport::failures`] lists the items
/// that were skipped. The catalog is updated in place and not written to
/// disk here.
///
/// # Errors
///
/// Only item-scoped errors ([`CatalogError::is_item_scoped`]) are recorded
/// as failures; anything else aborts the run, as do setup failures such as
/// an unreadable samples directory or an annotated directory that cannot
/// be created.
pub fn extract_directory(config: &ExtractionConfig, catalog: &mut Catalog) -> Result<BatchReport> {
    let sampler = BandSampler::with_params(
        config.sampler.band_count,
        config.sampler.window_width,
    );
    std::fs::create_dir_all(&config.annotated_dir)?;

    let mut report = BatchReport::default();
    for path in sample_files(&config.samples_dir)? {
        let code = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        match extract_one(&path, &code, &sampler, config, catalog) {
            Ok(()) => report.processed.push(code),
            Err(error) if error.is_item_scoped() => {
                report.failures.push(BatchFailure { code, error })
            }
            Err(error) => return Err(error),
        }
    }
    Ok(report)
}

fn extract_one(
    path: &Path,
    code: &str,
    sampler: &BandSampler,
    config: &ExtractionConfig,
    catalog: &mut Catalog,
) -> Result<()> {
    // Look up the entry before doing any pixel work
    let entry = catalog.get(code)?.clone();
    let sampled = extract_image(path, sampler)?;

    let hex: [String; 3] = sampled.hex.clone().try_into().map_err(|_| {
        CatalogError::invalid_image(format!(
            "expected 3 sampled bands, got {}",
            sampled.hex.len()
        ))
    })?;
    catalog.insert(code, entry.merge_sampled(hex));

    let out_path = config.annotated_dir.join(path.file_name().unwrap_or_default());
    sampled
        .annotated
        .save(&out_path)
        .map_err(|source| CatalogError::ImageLoad {
            path: out_path,
            source,
        })?;
    Ok(())
}

/// Image files in the samples directory, sorted by filename
fn sample_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir_entry in std::fs::read_dir(dir)? {
        let path = dir_entry?.path();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && is_image {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorEntry;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn band_image(rgb: [[u8; 3]; 3]) -> RgbImage {
        RgbImage::from_fn(300, 100, |x, _| Rgb(rgb[(x / 100) as usize]))
    }

    fn placeholder_entry(name: &str) -> ColorEntry {
        let mut entry = ColorEntry::new(
            ["#000000".to_string(), "#000000".to_string(), "#000000".to_string()],
            name,
        );
        entry.pens = vec!["classic".to_string()];
        entry
    }

    fn test_config(root: &Path) -> ExtractionConfig {
        ExtractionConfig {
            catalog_in: root.join("colors_plain.json"),
            catalog_out: root.join("colors_auto.json"),
            samples_dir: root.join("color_samples"),
            annotated_dir: root.join("samples_annotated"),
            sampler: Default::default(),
        }
    }

    #[test]
    fn test_extract_image_hex_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("B00.png");
        band_image([[255, 0, 0], [0, 255, 0], [0, 0, 255]])
            .save(&path)
            .unwrap();

        let sampled = extract_image(&path, &BandSampler::new()).unwrap();
        assert_eq!(sampled.hex, vec!["#FF0000", "#00FF00", "#0000FF"]);
        assert_eq!(sampled.annotated.dimensions(), (300, 100));
        // Swatch block painted with the sampled color
        assert_eq!(*sampled.annotated.get_pixel(10, 10), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_extract_image_missing_file() {
        let err = extract_image(Path::new("no_such_sample.png"), &BandSampler::new());
        assert!(matches!(
            err.unwrap_err(),
            CatalogError::ImageLoad { .. }
        ));
    }

    #[test]
    fn test_extract_directory_merges_and_annotates() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        std::fs::create_dir_all(&config.samples_dir).unwrap();
        band_image([[10, 10, 10], [20, 20, 20], [30, 30, 30]])
            .save(config.samples_dir.join("B00.png"))
            .unwrap();

        let mut catalog = Catalog::new();
        catalog.insert("B00", placeholder_entry("Frost Blue"));

        let report = extract_directory(&config, &mut catalog).unwrap();
        assert!(report.all_ok());
        assert_eq!(report.processed, vec!["B00"]);

        let entry = catalog.get("B00").unwrap();
        assert_eq!(
            entry.values,
            ["#0A0A0A".to_string(), "#141414".to_string(), "#1E1E1E".to_string()]
        );
        // Name and pen tags survive the merge
        assert_eq!(entry.name, "Frost Blue");
        assert_eq!(entry.pens, vec!["classic"]);
        assert!(config.annotated_dir.join("B00.png").exists());
    }

    #[test]
    fn test_extract_directory_isolates_failures() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        std::fs::create_dir_all(&config.samples_dir).unwrap();

        // One good sample, one with no catalog entry, one unreadable file
        let good = band_image([[10, 10, 10], [20, 20, 20], [30, 30, 30]]);
        good.save(config.samples_dir.join("B00.png")).unwrap();
        good.save(config.samples_dir.join("ZZ9.png")).ok();
        std::fs::write(config.samples_dir.join("E31.jpg"), b"not an image").unwrap();

        let mut catalog = Catalog::new();
        catalog.insert("B00", placeholder_entry("Frost Blue"));
        catalog.insert("E31", placeholder_entry("Brick Beige"));

        let report = extract_directory(&config, &mut catalog).unwrap();
        assert_eq!(report.processed, vec!["B00"]);
        assert_eq!(report.failures.len(), 2);
        let failed: Vec<&str> = report.failures.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(failed, vec!["E31", "ZZ9"]);
        // The failed entry keeps its placeholder values
        assert_eq!(catalog.get("E31").unwrap().values[0], "#000000");
    }

    #[test]
    fn test_sample_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let image = band_image([[0, 0, 0]; 3]);
        for name in ["YR13.png", "B00.jpg", "notes.txt"] {
            if name.ends_with(".txt") {
                std::fs::write(dir.path().join(name), b"x").unwrap();
            } else {
                image.save(dir.path().join(name)).unwrap();
            }
        }
        let files = sample_files(dir.path()).unwrap();
        let names: Vec<&str> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["B00.jpg", "YR13.png"]);
    }
}
