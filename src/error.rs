//! Error types for the copic_wheel library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for copic_wheel operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error types for catalog classification and swatch extraction
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A color code string does not decompose into family + blending group
    /// + intensity under the fixed family enumeration
    #[error("malformed color code {code:?}: {reason}")]
    MalformedCode { code: String, reason: String },

    /// Image dimensions are incompatible with the expected band layout
    #[error("invalid sample image: {reason}")]
    InvalidImage { reason: String },

    /// Lookup of a color code not present in the catalog
    #[error("color code {code:?} not found in catalog")]
    MissingKey { code: String },

    /// A hue resolved to zero or several intensities where exactly one
    /// was required (catalog not filtered down to a single intensity)
    #[error("hue {hue} has {} intensities, expected exactly one", found.len())]
    AmbiguousIntensity { hue: String, found: Vec<String> },

    /// Sample image could not be loaded or decoded
    #[error("failed to load image {}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Hex color string could not be parsed
    #[error("invalid hex color {value:?}: {reason}")]
    InvalidHex { value: String, reason: String },

    /// Filesystem error
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be parsed or written
    #[error("catalog JSON error")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create a malformed-code error with context
    pub fn malformed(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-image error with context
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    /// Check whether this error is confined to a single catalog item,
    /// so a batch run can record it and continue
    pub fn is_item_scoped(&self) -> bool {
        matches!(
            self,
            CatalogError::MalformedCode { .. }
                | CatalogError::InvalidImage { .. }
                | CatalogError::MissingKey { .. }
                | CatalogError::ImageLoad { .. }
        )
    }
}
