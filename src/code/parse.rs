//! Typed decomposition of color code strings
//!
//! A code such as `"YR13"` splits into three parts: the family (`YR`), the
//! blending group (`1`) and the intensity (`3`). Variant codes carry a
//! literal hyphen in the group slot (`"E-04"` has group [`BlendingGroup::Variant`]).
//! Concatenating the three parts reconstructs the original code.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CatalogError, Result};

/// Marker color family
///
/// The chromatic families are declared in wheel order (B through BG); that
/// order is what [`CodeScheme::hue_list`](crate::code::CodeScheme::hue_list)
/// walks when laying out the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Family {
    // Chromatic hue families, in wheel order
    B,
    BV,
    V,
    RV,
    R,
    YR,
    Y,
    YG,
    G,
    BG,
    // Achromatic gray families
    C,
    N,
    T,
    W,
    // Fluorescent families
    FB,
    FV,
    FRV,
    FYR,
    FY,
    FYG,
    FBG,
    // Earth tones
    E,
}

impl Family {
    /// The code prefix letters of this family
    pub fn as_str(self) -> &'static str {
        match self {
            Family::B => "B",
            Family::BV => "BV",
            Family::V => "V",
            Family::RV => "RV",
            Family::R => "R",
            Family::YR => "YR",
            Family::Y => "Y",
            Family::YG => "YG",
            Family::G => "G",
            Family::BG => "BG",
            Family::C => "C",
            Family::N => "N",
            Family::T => "T",
            Family::W => "W",
            Family::FB => "FB",
            Family::FV => "FV",
            Family::FRV => "FRV",
            Family::FYR => "FYR",
            Family::FY => "FY",
            Family::FYG => "FYG",
            Family::FBG => "FBG",
            Family::E => "E",
        }
    }

    /// Resolve a family from its exact prefix letters
    pub fn from_letters(letters: &str) -> Option<Family> {
        Some(match letters {
            "B" => Family::B,
            "BV" => Family::BV,
            "V" => Family::V,
            "RV" => Family::RV,
            "R" => Family::R,
            "YR" => Family::YR,
            "Y" => Family::Y,
            "YG" => Family::YG,
            "G" => Family::G,
            "BG" => Family::BG,
            "C" => Family::C,
            "N" => Family::N,
            "T" => Family::T,
            "W" => Family::W,
            "FB" => Family::FB,
            "FV" => Family::FV,
            "FRV" => Family::FRV,
            "FYR" => Family::FYR,
            "FY" => Family::FY,
            "FYG" => Family::FYG,
            "FBG" => Family::FBG,
            "E" => Family::E,
            _ => return None,
        })
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction in which a family's blending groups run around the wheel
///
/// Families are authored with their blending groups sorted in opposite
/// perceptual directions; reversing the negative-parity families gives the
/// wheel one consistent angular orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    Forward,
    Reverse,
}

impl Parity {
    pub fn is_reverse(self) -> bool {
        matches!(self, Parity::Reverse)
    }
}

/// Blending group: the single character after the family letters
///
/// `Variant` marks hyphenated variant codes. The derived ordering puts
/// `Variant` before any group character, matching the lexicographic position
/// of `-` relative to alphanumerics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlendingGroup {
    /// Hyphenated variant code; the sub-variant suffix is not classified
    Variant,
    /// Ordinary single-character group
    Group(char),
}

impl fmt::Display for BlendingGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BlendingGroup::Variant => f.write_str("-"),
            BlendingGroup::Group(c) => write!(f, "{}", c),
        }
    }
}

/// Intensity step within a hue, lightest (`000`) to darkest (`9`)
///
/// `Blank` covers codes with no intensity suffix at all, which occur in the
/// fluorescent families (e.g. `FY1` is family `FY`, group `1`, no
/// intensity). The derived ordering follows the perceptual scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Intensity {
    Blank,
    I000,
    I00,
    I0,
    I1,
    I2,
    I3,
    I4,
    I5,
    I6,
    I7,
    I8,
    I9,
}

impl Intensity {
    /// The twelve-step intensity scale, lightest first (excludes `Blank`)
    pub const SCALE: [Intensity; 12] = [
        Intensity::I000,
        Intensity::I00,
        Intensity::I0,
        Intensity::I1,
        Intensity::I2,
        Intensity::I3,
        Intensity::I4,
        Intensity::I5,
        Intensity::I6,
        Intensity::I7,
        Intensity::I8,
        Intensity::I9,
    ];

    /// The code suffix for this intensity
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Blank => "",
            Intensity::I000 => "000",
            Intensity::I00 => "00",
            Intensity::I0 => "0",
            Intensity::I1 => "1",
            Intensity::I2 => "2",
            Intensity::I3 => "3",
            Intensity::I4 => "4",
            Intensity::I5 => "5",
            Intensity::I6 => "6",
            Intensity::I7 => "7",
            Intensity::I8 => "8",
            Intensity::I9 => "9",
        }
    }

    /// Resolve an intensity from a code suffix
    pub fn from_suffix(suffix: &str) -> Option<Intensity> {
        Some(match suffix {
            "" => Intensity::Blank,
            "000" => Intensity::I000,
            "00" => Intensity::I00,
            "0" => Intensity::I0,
            "1" => Intensity::I1,
            "2" => Intensity::I2,
            "3" => Intensity::I3,
            "4" => Intensity::I4,
            "5" => Intensity::I5,
            "6" => Intensity::I6,
            "7" => Intensity::I7,
            "8" => Intensity::I8,
            "9" => Intensity::I9,
            _ => return None,
        })
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Intensity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Intensity> {
        Intensity::from_suffix(s).ok_or_else(|| {
            CatalogError::malformed(s, "not an intensity step (expected 000, 00, 0 or 1-9)")
        })
    }
}

/// One angular slot on the color wheel: a (family, blending group) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HuePoint {
    pub family: Family,
    pub group: BlendingGroup,
}

impl HuePoint {
    pub fn new(family: Family, group: BlendingGroup) -> Self {
        Self { family, group }
    }
}

impl fmt::Display for HuePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.family, self.group)
    }
}

/// A fully decomposed color code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedCode {
    pub family: Family,
    pub group: BlendingGroup,
    pub intensity: Intensity,
}

impl ParsedCode {
    /// The hue slot this code belongs to
    pub fn hue(&self) -> HuePoint {
        HuePoint::new(self.family, self.group)
    }

    /// Reconstruct the code string (variant codes reconstruct with `-` in
    /// the group slot, without the discarded sub-variant suffix)
    pub fn code(&self) -> String {
        format!("{}{}{}", self.family, self.group, self.intensity)
    }
}

impl fmt::Display for ParsedCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.code())
    }
}
