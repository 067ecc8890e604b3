//! Fixed parameters for swatch sampling and wheel layout
//!
//! The values in `sampling` mirror the geometry of the official sample
//! images (three intensity bands per photograph); the values in `layout`
//! control the rendered color wheel charts.

/// Sample image geometry
pub mod sampling {
    /// Number of intensity bands in a sample image
    pub const BAND_COUNT: u32 = 3;

    /// Width in pixels of the centered averaging window per band
    pub const SAMPLE_WINDOW_WIDTH: u32 = 100;

    /// Height in pixels of the flat swatch block painted by annotation
    pub const SWATCH_HEIGHT: u32 = 65;

    /// Swatch block width as a fraction of image width (width / 6)
    pub const SWATCH_WIDTH_DIVISOR: u32 = 6;
}

/// Color wheel chart layout
pub mod layout {
    /// Radial positions of the three intensity dots, innermost first
    pub const DOT_RADII: [f64; 3] = [0.65, 0.8, 1.0];

    /// Radial offsets of the classic/ciao/wide pen glyphs past the outer dot
    pub const PEN_GLYPH_RADII: [f64; 3] = [1.13, 1.17, 1.21];

    /// HSL lightness below which code labels render in white
    pub const LABEL_LIGHTNESS_THRESHOLD: f64 = 0.45;

    /// Label font size relative to the circle radius
    pub const LABEL_FONT_FRACTION: f64 = 0.06;
}
