//! Color code parsing and catalog classification
//!
//! Submodules:
//! - `parse`: typed code decomposition (family, blending group, intensity)
//! - `scheme`: the family/parity configuration and classifier operations

pub mod parse;
pub mod scheme;

pub use parse::{BlendingGroup, Family, HuePoint, Intensity, ParsedCode, Parity};
pub use scheme::CodeScheme;
