//! Code classification against a fixed family scheme
//!
//! [`CodeScheme`] owns the family enumeration and per-family hue parity that
//! the classifier operations consult. It is built once (normally via
//! [`CodeScheme::copic`]) and passed explicitly wherever codes are parsed or
//! catalogs filtered; nothing in this module reads global state.
//!
//! The ordering produced by [`CodeScheme::hue_list`] is the angular layout
//! of the rendered wheel: chromatic families in declaration order, each
//! expanded to its blending groups (reversed for negative-parity families
//! when parity correction is requested).

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::code::{BlendingGroup, Family, HuePoint, Intensity, ParsedCode, Parity};
use crate::error::{CatalogError, Result};

/// The family enumeration and hue parities the classifier operates under
#[derive(Debug, Clone)]
pub struct CodeScheme {
    chromatic: Vec<(Family, Parity)>,
    grays: Vec<Family>,
    fluorescent: Vec<Family>,
    earth: Vec<Family>,
}

impl Default for CodeScheme {
    fn default() -> Self {
        Self::copic()
    }
}

impl CodeScheme {
    /// The standard Copic marker scheme
    pub fn copic() -> Self {
        use Family::*;
        use Parity::*;
        Self {
            chromatic: vec![
                (B, Forward),
                (BV, Forward),
                (V, Forward),
                (RV, Reverse),
                (R, Reverse),
                (YR, Forward),
                (Y, Reverse),
                (YG, Reverse),
                (G, Reverse),
                (BG, Reverse),
            ],
            grays: vec![C, N, T, W],
            fluorescent: vec![FB, FV, FRV, FYR, FY, FYG, FBG],
            earth: vec![E],
        }
    }

    /// Chromatic families in wheel order
    pub fn chromatic_families(&self) -> impl Iterator<Item = Family> + '_ {
        self.chromatic.iter().map(|(f, _)| *f)
    }

    /// Achromatic gray families
    pub fn gray_families(&self) -> &[Family] {
        &self.grays
    }

    /// Earth-tone families
    pub fn earth_families(&self) -> &[Family] {
        &self.earth
    }

    /// Hue parity of a family; non-chromatic families are always `Forward`
    pub fn parity(&self, family: Family) -> Parity {
        self.chromatic
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, p)| *p)
            .unwrap_or(Parity::Forward)
    }

    /// Whether a family belongs to this scheme at all
    pub fn contains(&self, family: Family) -> bool {
        self.chromatic.iter().any(|(f, _)| *f == family)
            || self.grays.contains(&family)
            || self.fluorescent.contains(&family)
            || self.earth.contains(&family)
    }

    /// Decompose a code string into family, blending group and intensity
    ///
    /// # Errors
    ///
    /// `MalformedCode` when the leading letters are not a known family, the
    /// group slot is empty or non-alphanumeric, a hyphen appears anywhere
    /// but directly after the family letters, or the suffix is not a step
    /// on the intensity scale.
    pub fn parse(&self, code: &str) -> Result<ParsedCode> {
        let letters: &str = code
            .find(|c: char| !c.is_ascii_uppercase())
            .map_or(code, |end| &code[..end]);
        if letters.is_empty() {
            return Err(CatalogError::malformed(code, "no family letters"));
        }
        let family = Family::from_letters(letters)
            .filter(|f| self.contains(*f))
            .ok_or_else(|| {
                CatalogError::malformed(code, format!("unknown family {:?}", letters))
            })?;

        let rest = &code[letters.len()..];
        let (group, suffix) = match rest.chars().next() {
            None => return Err(CatalogError::malformed(code, "missing blending group")),
            Some('-') => (BlendingGroup::Variant, &rest[1..]),
            Some(c) if c.is_ascii_alphanumeric() => (BlendingGroup::Group(c), &rest[1..]),
            Some(c) => {
                return Err(CatalogError::malformed(
                    code,
                    format!("invalid blending group character {:?}", c),
                ))
            }
        };
        if suffix.contains('-') {
            return Err(CatalogError::malformed(code, "misplaced hyphen"));
        }
        let intensity = Intensity::from_suffix(suffix).ok_or_else(|| {
            CatalogError::malformed(code, format!("invalid intensity suffix {:?}", suffix))
        })?;

        Ok(ParsedCode {
            family,
            group,
            intensity,
        })
    }

    /// The family component of a code
    pub fn family_of(&self, code: &str) -> Result<Family> {
        Ok(self.parse(code)?.family)
    }

    /// The intensity component of a code
    pub fn intensity_of(&self, code: &str) -> Result<Intensity> {
        Ok(self.parse(code)?.intensity)
    }

    /// All blending groups of a family present in the catalog, deduplicated
    /// and sorted; reversed when `parity_correction` is set and the
    /// family's parity is negative
    pub fn blending_groups(
        &self,
        catalog: &Catalog,
        family: Family,
        parity_correction: bool,
    ) -> Result<Vec<BlendingGroup>> {
        let mut groups = BTreeSet::new();
        for code in catalog.codes() {
            let parsed = self.parse(code)?;
            if parsed.family == family {
                groups.insert(parsed.group);
            }
        }
        let mut groups: Vec<BlendingGroup> = groups.into_iter().collect();
        if parity_correction && self.parity(family).is_reverse() {
            groups.reverse();
        }
        Ok(groups)
    }

    /// Sub-catalog of entries whose code belongs to `family`
    pub fn filter_by_family(&self, catalog: &Catalog, family: Family) -> Result<Catalog> {
        self.filter(catalog, |parsed| parsed.family == family)
    }

    /// Sub-catalog of entries whose code carries `intensity`
    pub fn filter_by_intensity(&self, catalog: &Catalog, intensity: Intensity) -> Result<Catalog> {
        self.filter(catalog, |parsed| parsed.intensity == intensity)
    }

    /// Sub-catalog of entries available in the given pen line
    ///
    /// Pen tags are plain entry data, so no code is parsed here and the
    /// operation cannot fail.
    pub fn filter_by_pen(&self, catalog: &Catalog, pen: &str) -> Catalog {
        catalog
            .iter()
            .filter(|(_, entry)| entry.has_pen(pen))
            .map(|(code, entry)| (code.to_string(), entry.clone()))
            .collect()
    }

    fn filter<P>(&self, catalog: &Catalog, predicate: P) -> Result<Catalog>
    where
        P: Fn(&ParsedCode) -> bool,
    {
        let mut out = Catalog::new();
        for (code, entry) in catalog.iter() {
            if predicate(&self.parse(code)?) {
                out.insert(code, entry.clone());
            }
        }
        Ok(out)
    }

    /// The wheel's angular layout: every chromatic hue slot, family by
    /// family in wheel order
    pub fn hue_list(&self, catalog: &Catalog, parity_correction: bool) -> Result<Vec<HuePoint>> {
        let families: Vec<Family> = self.chromatic_families().collect();
        self.hue_points(catalog, &families, parity_correction)
    }

    /// Hue slots of the achromatic gray families
    pub fn gray_list(&self, catalog: &Catalog) -> Result<Vec<HuePoint>> {
        self.hue_points(catalog, &self.grays, false)
    }

    /// Hue slots of the earth family
    pub fn earth_list(&self, catalog: &Catalog) -> Result<Vec<HuePoint>> {
        self.hue_points(catalog, &self.earth, false)
    }

    fn hue_points(
        &self,
        catalog: &Catalog,
        families: &[Family],
        parity_correction: bool,
    ) -> Result<Vec<HuePoint>> {
        let mut hues = Vec::new();
        for &family in families {
            for group in self.blending_groups(catalog, family, parity_correction)? {
                hues.push(HuePoint::new(family, group));
            }
        }
        Ok(hues)
    }

    /// All intensities present in the catalog for the given hue slot,
    /// sorted lightest first
    pub fn intensities_at(&self, catalog: &Catalog, hue: &HuePoint) -> Result<Vec<Intensity>> {
        let mut intensities = BTreeSet::new();
        for code in catalog.codes() {
            let parsed = self.parse(code)?;
            if parsed.family == hue.family && parsed.group == hue.group {
                intensities.insert(parsed.intensity);
            }
        }
        Ok(intensities.into_iter().collect())
    }

    /// The single intensity a hue carries in a catalog already filtered
    /// down to one intensity step
    ///
    /// # Errors
    ///
    /// `AmbiguousIntensity` when the hue carries zero or several
    /// intensities; the wheel renderer requires exactly one per slot.
    pub fn sole_intensity(&self, catalog: &Catalog, hue: &HuePoint) -> Result<Intensity> {
        let found = self.intensities_at(catalog, hue)?;
        match found.as_slice() {
            [sole] => Ok(*sole),
            _ => Err(CatalogError::AmbiguousIntensity {
                hue: hue.to_string(),
                found: found.iter().map(|i| i.to_string()).collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ColorEntry;

    fn entry(name: &str) -> ColorEntry {
        ColorEntry::new(
            [
                "#111111".to_string(),
                "#222222".to_string(),
                "#333333".to_string(),
            ],
            name,
        )
    }

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for code in [
            "B00", "B01", "B12", "B21", "B60", "BV00", "BV23", "YR13", "Y00", "Y11", "Y21",
            "E0000", "E13", "E-4", "C3", "N3", "W3", "FY1",
        ] {
            catalog.insert(code, entry(code));
        }
        catalog
    }

    #[test]
    fn test_parse_yr13() {
        let scheme = CodeScheme::copic();
        let parsed = scheme.parse("YR13").unwrap();
        assert_eq!(parsed.family, Family::YR);
        assert_eq!(parsed.group, BlendingGroup::Group('1'));
        assert_eq!(parsed.intensity, Intensity::I3);
    }

    #[test]
    fn test_parse_earth_triple_zero() {
        // E0000: earth family, group 0, intensity 000
        let scheme = CodeScheme::copic();
        let parsed = scheme.parse("E0000").unwrap();
        assert_eq!(parsed.family, Family::E);
        assert_eq!(parsed.group, BlendingGroup::Group('0'));
        assert_eq!(parsed.intensity, Intensity::I000);
    }

    #[test]
    fn test_parse_fluorescent_blank_intensity() {
        let scheme = CodeScheme::copic();
        let parsed = scheme.parse("FY1").unwrap();
        assert_eq!(parsed.family, Family::FY);
        assert_eq!(parsed.group, BlendingGroup::Group('1'));
        assert_eq!(parsed.intensity, Intensity::Blank);
    }

    #[test]
    fn test_parse_variant_code() {
        let scheme = CodeScheme::copic();
        let parsed = scheme.parse("E-4").unwrap();
        assert_eq!(parsed.family, Family::E);
        assert_eq!(parsed.group, BlendingGroup::Variant);
        assert_eq!(parsed.intensity, Intensity::I4);
    }

    #[test]
    fn test_parse_malformed() {
        let scheme = CodeScheme::copic();
        for code in ["110", "Q13", "BVX2", "B1-2", "B123", ""] {
            let err = scheme.parse(code).unwrap_err();
            assert!(
                matches!(err, CatalogError::MalformedCode { .. }),
                "{:?} should be malformed",
                code
            );
        }
    }

    #[test]
    fn test_reconstruction_invariant() {
        let scheme = CodeScheme::copic();
        for code in ["YR13", "B00", "E0000", "BV23", "FY1", "W3"] {
            assert_eq!(scheme.parse(code).unwrap().code(), code);
        }
        // Variant codes reconstruct with the bare hyphen placeholder
        assert_eq!(scheme.parse("E-4").unwrap().code(), "E-4");
    }

    #[test]
    fn test_blending_groups_sorted_and_dedup() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();
        let groups = scheme.blending_groups(&catalog, Family::B, false).unwrap();
        assert_eq!(
            groups,
            vec![
                BlendingGroup::Group('0'),
                BlendingGroup::Group('1'),
                BlendingGroup::Group('2'),
                BlendingGroup::Group('6'),
            ]
        );
    }

    #[test]
    fn test_parity_correction_reverses_negative_families() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();

        // B has positive parity: correction is a no-op
        let forward = scheme.blending_groups(&catalog, Family::B, false).unwrap();
        let corrected = scheme.blending_groups(&catalog, Family::B, true).unwrap();
        assert_eq!(forward, corrected);

        // Y has negative parity: correction reverses
        let forward = scheme.blending_groups(&catalog, Family::Y, false).unwrap();
        let corrected = scheme.blending_groups(&catalog, Family::Y, true).unwrap();
        let rereversed: Vec<_> = corrected.into_iter().rev().collect();
        assert_eq!(forward, rereversed);
    }

    #[test]
    fn test_variant_group_sorts_first() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();
        let groups = scheme.blending_groups(&catalog, Family::E, false).unwrap();
        assert_eq!(groups[0], BlendingGroup::Variant);
    }

    #[test]
    fn test_hue_list_wheel_order() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();
        let hues = scheme.hue_list(&catalog, false).unwrap();

        // Families appear in wheel order; earth and grays are excluded
        let families: Vec<Family> = hues.iter().map(|h| h.family).collect();
        let mut seen = Vec::new();
        for family in &families {
            if seen.last() != Some(family) {
                seen.push(*family);
            }
        }
        assert_eq!(seen, vec![Family::B, Family::BV, Family::YR, Family::Y]);
        assert!(!families.contains(&Family::E));
        assert!(!families.contains(&Family::C));
    }

    #[test]
    fn test_earth_and_gray_lists() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();

        let earth = scheme.earth_list(&catalog).unwrap();
        assert!(earth.iter().all(|h| h.family == Family::E));
        assert!(earth.contains(&HuePoint::new(Family::E, BlendingGroup::Group('0'))));

        let grays = scheme.gray_list(&catalog).unwrap();
        let families: Vec<Family> = grays.iter().map(|h| h.family).collect();
        assert_eq!(families, vec![Family::C, Family::N, Family::W]);
    }

    #[test]
    fn test_filter_by_intensity() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();
        let zeros = scheme
            .filter_by_intensity(&catalog, Intensity::I0)
            .unwrap();
        let codes: Vec<&str> = zeros.codes().collect();
        assert_eq!(codes, vec!["B00", "B60", "BV00", "Y00"]);
    }

    #[test]
    fn test_filter_by_family_keeps_entries_intact() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();
        let blues = scheme.filter_by_family(&catalog, Family::B).unwrap();
        assert_eq!(blues.len(), 5);
        assert_eq!(blues.get("B00").unwrap(), catalog.get("B00").unwrap());
    }

    #[test]
    fn test_filter_by_pen() {
        let scheme = CodeScheme::copic();
        let mut catalog = Catalog::new();
        let mut classic = entry("one");
        classic.pens = vec!["classic".to_string(), "ciao".to_string()];
        catalog.insert("B00", classic);
        catalog.insert("B01", entry("two"));

        let filtered = scheme.filter_by_pen(&catalog, "classic");
        assert_eq!(filtered.codes().collect::<Vec<_>>(), vec!["B00"]);
        assert!(scheme.filter_by_pen(&catalog, "wide").is_empty());
    }

    #[test]
    fn test_intensities_at() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();
        let hue = HuePoint::new(Family::B, BlendingGroup::Group('0'));
        let intensities = scheme.intensities_at(&catalog, &hue).unwrap();
        assert_eq!(intensities, vec![Intensity::I0, Intensity::I1]);
    }

    #[test]
    fn test_sole_intensity() {
        let scheme = CodeScheme::copic();
        let catalog = small_catalog();

        let unique = HuePoint::new(Family::YR, BlendingGroup::Group('1'));
        assert_eq!(
            scheme.sole_intensity(&catalog, &unique).unwrap(),
            Intensity::I3
        );

        // Two intensities on B0 is an error, as is a hue absent entirely
        let ambiguous = HuePoint::new(Family::B, BlendingGroup::Group('0'));
        assert!(matches!(
            scheme.sole_intensity(&catalog, &ambiguous).unwrap_err(),
            CatalogError::AmbiguousIntensity { .. }
        ));
        let absent = HuePoint::new(Family::G, BlendingGroup::Group('9'));
        assert!(matches!(
            scheme.sole_intensity(&catalog, &absent).unwrap_err(),
            CatalogError::AmbiguousIntensity { .. }
        ));
    }
}
