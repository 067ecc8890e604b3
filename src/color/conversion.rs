//! Hex color encoding and lightness
//!
//! Sampled band colors are float RGB triples in [0, 255]; the catalog
//! stores them as uppercase `#RRGGBB` strings. Rounding is half away from
//! zero, matching ordinary decimal rounding.

use palette::{FromColor, Hsl, Srgb};

use crate::error::{CatalogError, Result};

/// Encode an RGB float triple as an uppercase hex color string
///
/// Channels are rounded to the nearest integer and clamped to [0, 255].
pub fn rgb_to_hex(rgb: [f64; 3]) -> String {
    let [r, g, b] = rgb.map(|v| v.round().clamp(0.0, 255.0) as u8);
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) hex color string
///
/// # Errors
///
/// `InvalidHex` when the string is not six hex digits after the optional
/// leading `#`.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CatalogError::InvalidHex {
            value: hex.to_string(),
            reason: "expected exactly 6 hex digits".to_string(),
        });
    }
    let mut rgb = [0u8; 3];
    for (i, slot) in rgb.iter_mut().enumerate() {
        *slot = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|e| {
            CatalogError::InvalidHex {
                value: hex.to_string(),
                reason: e.to_string(),
            }
        })?;
    }
    Ok(rgb)
}

/// HSL lightness of a hex color, in [0, 1]
///
/// Label text on the wheel switches to white below a lightness threshold.
pub fn luminosity(hex: &str) -> Result<f64> {
    let [r, g, b] = hex_to_rgb(hex)?;
    let srgb: Srgb<f64> = Srgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
    let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(srgb);
    Ok(hsl.lightness)
}
