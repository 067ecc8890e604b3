//! SVG color wheel construction
//!
//! One chart holds two circles: the chromatic hue wheel on the left and
//! the earth/gray wheel on the right. Each hue slot shows its three
//! catalog colors as dots growing outward (lightest innermost), the code
//! label on the outer dot, and small glyphs marking which pen lines carry
//! the code (square = classic, circle = ciao, tick = wide).
//!
//! The chart requires a catalog filtered down to a single intensity per
//! hue; anything else surfaces as `AmbiguousIntensity`.

use std::f64::consts::{PI, TAU};
use std::path::Path as FsPath;

use svg::node::element::{Circle, Group, Line, Rectangle, Text};
use svg::Document;

use crate::catalog::{Catalog, ColorEntry};
use crate::code::{CodeScheme, HuePoint, ParsedCode};
use crate::color::luminosity;
use crate::constants::layout;
use crate::error::Result;

/// Base dot radius as a fraction of the circle radius; dots grow by half
/// that per intensity step outward
const DOT_SIZE_BASE: f64 = 0.05;

/// Renders per-intensity color wheel charts
#[derive(Debug)]
pub struct ColorWheel<'a> {
    scheme: &'a CodeScheme,
    radius: f64,
}

impl<'a> ColorWheel<'a> {
    /// Create a renderer over the given scheme with the standard radius
    pub fn new(scheme: &'a CodeScheme) -> Self {
        Self {
            scheme,
            radius: 300.0,
        }
    }

    /// Override the circle radius in SVG units
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Build the two-circle chart document for an intensity-filtered catalog
    pub fn chart(&self, catalog: &Catalog) -> Result<Document> {
        let r = self.radius;
        let (width, height) = (16.0 * r / 3.0, 8.0 * r / 3.0);
        let left = (width * 0.25, height * 0.5);
        let right = (width * 0.75, height * 0.5);

        let chromatic = self.scheme.hue_list(catalog, true)?;
        let mut earth_grays = self.scheme.earth_list(catalog)?;
        earth_grays.extend(self.scheme.gray_list(catalog)?);

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("font-family", "sans-serif");
        document = document.add(self.circle(catalog, &chromatic, left)?);
        document = document.add(self.circle(catalog, &earth_grays, right)?);
        Ok(document)
    }

    /// Render the chart straight to an SVG file
    pub fn save_svg(&self, path: &FsPath, catalog: &Catalog) -> Result<()> {
        let document = self.chart(catalog)?;
        svg::save(path, &document)?;
        Ok(())
    }

    fn circle(
        &self,
        catalog: &Catalog,
        hues: &[HuePoint],
        center: (f64, f64),
    ) -> Result<Group> {
        let mut group = Group::new();
        let n = hues.len();
        for (idx, hue) in hues.iter().enumerate() {
            let phi = TAU * idx as f64 / n as f64 + PI;
            let intensity = self.scheme.sole_intensity(catalog, hue)?;
            let parsed = ParsedCode {
                family: hue.family,
                group: hue.group,
                intensity,
            };
            let code = parsed.code();
            let entry = catalog.get(&code)?;
            group = group.add(self.hue_slot(&code, entry, phi, center)?);
        }
        Ok(group)
    }

    fn hue_slot(
        &self,
        code: &str,
        entry: &ColorEntry,
        phi: f64,
        center: (f64, f64),
    ) -> Result<Group> {
        let r = self.radius;
        let (sin, cos) = phi.sin_cos();
        let at = |s: f64| (center.0 + s * r * cos, center.1 + s * r * sin);

        let mut group = Group::new();
        for (i, fraction) in layout::DOT_RADII.iter().enumerate() {
            let (x, y) = at(*fraction);
            let dot_radius = r * DOT_SIZE_BASE * (1.0 + i as f64 / 2.0);
            group = group.add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", dot_radius)
                    .set("fill", entry.values[i].as_str()),
            );
        }

        group = self.pen_glyphs(group, entry, phi, center);

        // Code label on the outer dot, white on dark colors
        let (lx, ly) = at(layout::DOT_RADII[2]);
        let text_color = if luminosity(&entry.values[2])? < layout::LABEL_LIGHTNESS_THRESHOLD {
            "white"
        } else {
            "black"
        };
        group = group.add(
            Text::new(code)
                .set("x", lx)
                .set("y", ly)
                .set("font-size", r * layout::LABEL_FONT_FRACTION)
                .set("fill", text_color)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central"),
        );
        Ok(group)
    }

    fn pen_glyphs(
        &self,
        mut group: Group,
        entry: &ColorEntry,
        phi: f64,
        center: (f64, f64),
    ) -> Group {
        let r = self.radius;
        let (sin, cos) = phi.sin_cos();
        let at = |s: f64| (center.0 + s * r * cos, center.1 + s * r * sin);
        let outer_dot = r * DOT_SIZE_BASE * 2.0;

        if entry.has_pen("classic") {
            let (x, y) = at(layout::PEN_GLYPH_RADII[0]);
            let side = outer_dot * 0.4;
            group = group.add(
                Rectangle::new()
                    .set("x", x - side / 2.0)
                    .set("y", y - side / 2.0)
                    .set("width", side)
                    .set("height", side)
                    .set("fill", "#000000")
                    .set("stroke", "black")
                    .set("stroke-width", 1)
                    .set(
                        "transform",
                        format!("rotate({} {} {})", phi.to_degrees() + 45.0, x, y),
                    ),
            );
        }
        if entry.has_pen("ciao") {
            let (x, y) = at(layout::PEN_GLYPH_RADII[1]);
            group = group.add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", outer_dot * 0.15)
                    .set("fill", "#FFFFFF")
                    .set("stroke", "black")
                    .set("stroke-width", 1),
            );
        }
        if entry.has_pen("wide") {
            let (x, y) = at(layout::PEN_GLYPH_RADII[2]);
            let half = outer_dot * 0.17;
            group = group.add(
                Line::new()
                    .set("x1", x - half * sin)
                    .set("y1", y + half * cos)
                    .set("x2", x + half * sin)
                    .set("y2", y - half * cos)
                    .set("stroke", "black")
                    .set("stroke-width", 1),
            );
        }
        group
    }
}
