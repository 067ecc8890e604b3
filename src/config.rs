//! Configuration for the batch extraction pipeline.
//!
//! All tunable parameters for turning a directory of sample photographs
//! into a filled-in catalog, serializable to JSON for reproducible runs:
//!
//! ```no_run
//! use copic_wheel::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use the standard sample layout
//! let config = ExtractionConfig::default_copic();
//! # Ok::<(), copic_wheel::CatalogError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::sampling;
use crate::error::Result;

/// Complete configuration for a batch extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Catalog file to read (codes, names, pen tags)
    pub catalog_in: PathBuf,

    /// Catalog file to write with sampled values filled in
    pub catalog_out: PathBuf,

    /// Directory of sample images, one per color code
    pub samples_dir: PathBuf,

    /// Directory for the annotated image copies
    pub annotated_dir: PathBuf,

    /// Sampling geometry
    #[serde(default)]
    pub sampler: SamplerConfig,
}

/// Band sampling geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of intensity bands per sample image
    pub band_count: u32,

    /// Width in pixels of the centered averaging window
    pub window_width: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            band_count: sampling::BAND_COUNT,
            window_width: sampling::SAMPLE_WINDOW_WIDTH,
        }
    }
}

impl ExtractionConfig {
    /// Standard layout of the upstream sample set
    pub fn default_copic() -> Self {
        Self {
            catalog_in: PathBuf::from("colors_plain.json"),
            catalog_out: PathBuf::from("colors_auto.json"),
            samples_dir: PathBuf::from("color_samples"),
            annotated_dir: PathBuf::from("samples_annotated"),
            sampler: SamplerConfig::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
