//! Color value conversion module
//!
//! Hex string encoding of sampled RGB triples and the lightness measure
//! used to pick readable label colors on the wheel.

pub mod conversion;

pub use conversion::{hex_to_rgb, luminosity, rgb_to_hex};
