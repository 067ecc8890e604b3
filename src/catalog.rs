//! Color catalog data model
//!
//! The catalog is a map from color code (e.g. `"YR13"`) to a [`ColorEntry`]
//! holding three hex color values, a display name, and the pen product lines
//! the code is available in. On disk each entry is a 4-or-5 element JSON
//! array, the format shared with the upstream catalog files:
//!
//! ```json
//! {
//!     "B00": ["#AEE5F2", "#CDEEF6", "#E8F7FA", "Frost Blue", ["classic", "ciao"]]
//! }
//! ```
//!
//! Entries are keyed in a `BTreeMap` so that saved catalogs are always
//! sorted by code.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// One catalog entry: three hex values, display name, pen availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Hex color values, one per intensity band of the sample image
    pub values: [String; 3],
    /// Human-readable color name (e.g. "Frost Blue")
    pub name: String,
    /// Pen product lines this code exists in ("classic", "ciao", "wide")
    pub pens: Vec<String>,
}

impl ColorEntry {
    /// Create an entry with no pen tags
    pub fn new(values: [String; 3], name: impl Into<String>) -> Self {
        Self {
            values,
            name: name.into(),
            pens: Vec::new(),
        }
    }

    /// Check whether the entry is available in the given pen line
    pub fn has_pen(&self, pen: &str) -> bool {
        self.pens.iter().any(|p| p == pen)
    }

    /// Copy of this entry with freshly sampled color values
    ///
    /// Display name and pen tags are preserved.
    pub fn merge_sampled(&self, values: [String; 3]) -> ColorEntry {
        ColorEntry {
            values,
            name: self.name.clone(),
            pens: self.pens.clone(),
        }
    }
}

impl Serialize for ColorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.pens.is_empty() { 4 } else { 5 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.serialize_element(&self.name)?;
        if !self.pens.is_empty() {
            seq.serialize_element(&self.pens)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ColorEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = ColorEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [value, value, value, name] or [value, value, value, name, pens] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<ColorEntry, A::Error> {
                let mut values: [String; 3] = Default::default();
                for (i, slot) in values.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;
                let pens: Vec<String> = seq.next_element()?.unwrap_or_default();
                Ok(ColorEntry { values, name, pens })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// The full color table, keyed by color code and sorted by key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, ColorEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the catalog to a JSON file, sorted by code and indented with
    /// four spaces (the format of the upstream catalog files)
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        std::fs::write(path, buf)?;
        Ok(())
    }

    /// Look up an entry, failing with `MissingKey` if absent
    pub fn get(&self, code: &str) -> Result<&ColorEntry> {
        self.entries.get(code).ok_or_else(|| CatalogError::MissingKey {
            code: code.to_string(),
        })
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, code: impl Into<String>, entry: ColorEntry) {
        self.entries.insert(code.into(), entry);
    }

    /// Iterate entries in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate codes in order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ColorEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, ColorEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
