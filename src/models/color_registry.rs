//! Named color registry and overlapping color families.
//!
//! The registry is a fixed, ordered mapping of color name to hex code loaded
//! from embedded JSON. Families ("Reds", "Warm Colors", "Broad Neutrals", ...)
//! are overlapping name sets over the same data. Nothing here is mutated
//! after load.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use super::RgbColor;
use crate::error::{PromptError, Result};
use once_cell::sync::OnceCell;

/// Family names used by the generators and the selector.
pub mod family {
    /// Red hues.
    pub const REDS: &str = "Reds";
    /// Pink hues.
    pub const PINKS: &str = "Pinks";
    /// Orange hues.
    pub const ORANGES: &str = "Oranges";
    /// Yellow hues.
    pub const YELLOWS: &str = "Yellows";
    /// Green hues.
    pub const GREENS: &str = "Greens";
    /// Blue hues.
    pub const BLUES: &str = "Blues";
    /// Purple hues.
    pub const PURPLES: &str = "Purples";
    /// Browns.
    pub const BROWNS: &str = "Browns";
    /// Greys.
    pub const GREYS: &str = "Greys";
    /// Neutrals.
    pub const NEUTRALS: &str = "Neutrals";
    /// Metallics.
    pub const METALLICS: &str = "Metallics";
    /// Pastels.
    pub const PASTELS: &str = "Pastels";
    /// Peaches.
    pub const PEACHES: &str = "Peaches";
    /// Warm temperature family.
    pub const WARM: &str = "Warm Colors";
    /// Cool temperature family.
    pub const COOL: &str = "Cool Colors";
    /// Filler family for non-hue palette slots.
    pub const BROAD_NEUTRALS: &str = "Broad Neutrals";

    /// Families a geometric palette may take its base color from.
    pub const HUEABLE: [&str; 7] = [REDS, PINKS, ORANGES, YELLOWS, GREENS, BLUES, PURPLES];
}

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Unique display name (original casing).
    pub name: String,
    /// Hex code as stored in the data file.
    pub hex: String,
    /// Parsed channels.
    pub rgb: RgbColor,
}

/// A named, ordered set of color names.
#[derive(Debug, Clone)]
pub struct ColorFamily {
    /// Family name (e.g. "Greys").
    pub name: String,
    /// Member names in data-file order.
    pub members: Vec<String>,
    lookup: HashSet<String>,
}

impl ColorFamily {
    /// Returns true if `color` belongs to this family.
    #[must_use]
    pub fn contains(&self, color: &str) -> bool {
        self.lookup.contains(color)
    }
}

#[derive(Debug, Deserialize)]
struct RegistryData {
    colors: Vec<RawColor>,
    families: Vec<RawFamily>,
}

#[derive(Debug, Deserialize)]
struct RawColor {
    name: String,
    hex: String,
}

#[derive(Debug, Deserialize)]
struct RawFamily {
    name: String,
    members: Vec<String>,
}

/// Read-only name -> hex store plus family -> names multimap.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    entries: Vec<ColorEntry>,
    index: HashMap<String, usize>,
    families: Vec<ColorFamily>,
}

static BUILTIN: OnceCell<ColorRegistry> = OnceCell::new();

impl ColorRegistry {
    /// The registry compiled into the binary, parsed on first use.
    ///
    /// # Errors
    /// Returns an error if the embedded data is malformed.
    pub fn builtin() -> Result<&'static Self> {
        BUILTIN.get_or_try_init(Self::load)
    }

    /// Load the registry from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed or is inconsistent.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("../data/colors.json"))
    }

    /// Parse a registry from JSON text in the embedded data layout.
    ///
    /// Family members that are not registry colors are rejected, as are
    /// duplicate names and malformed hex codes.
    ///
    /// # Errors
    /// Returns [`PromptError::Data`] or [`PromptError::Configuration`].
    pub fn from_json(json: &str) -> Result<Self> {
        let data: RegistryData = serde_json::from_str(json)?;

        if data.colors.is_empty() {
            return Err(PromptError::Configuration(
                "Color registry contains no colors".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(data.colors.len());
        let mut index = HashMap::with_capacity(data.colors.len());
        for raw in data.colors {
            if index.contains_key(&raw.name) {
                return Err(PromptError::Configuration(format!(
                    "Duplicate color name in registry: '{}'",
                    raw.name
                )));
            }
            let rgb = RgbColor::from_hex(&raw.hex)?;
            index.insert(raw.name.clone(), entries.len());
            entries.push(ColorEntry {
                name: raw.name,
                hex: raw.hex,
                rgb,
            });
        }

        let mut families = Vec::with_capacity(data.families.len());
        for raw in data.families {
            if let Some(missing) = raw.members.iter().find(|m| !index.contains_key(*m)) {
                return Err(PromptError::Configuration(format!(
                    "Family '{}' references unknown color '{missing}'",
                    raw.name
                )));
            }
            let lookup = raw.members.iter().cloned().collect();
            families.push(ColorFamily {
                name: raw.name,
                members: raw.members,
                lookup,
            });
        }

        Ok(Self {
            entries,
            index,
            families,
        })
    }

    /// All entries in registry order.
    #[must_use]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a loaded registry; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Look up an entry by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Hex code for `name`, if registered.
    #[must_use]
    pub fn hex(&self, name: &str) -> Option<&str> {
        self.get(name).map(|e| e.hex.as_str())
    }

    /// True if `name` is a registry color.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All families in data order.
    #[must_use]
    pub fn families(&self) -> &[ColorFamily] {
        &self.families
    }

    /// Look up a family by name.
    #[must_use]
    pub fn family(&self, name: &str) -> Option<&ColorFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Members of a family, or an empty slice if the family is unknown.
    #[must_use]
    pub fn family_members(&self, name: &str) -> &[String] {
        self.family(name)
            .map(|f| f.members.as_slice())
            .unwrap_or_default()
    }

    /// True if `color` belongs to family `family`.
    #[must_use]
    pub fn is_member(&self, family: &str, color: &str) -> bool {
        self.family(family).is_some_and(|f| f.contains(color))
    }

    /// Candidate base colors for hue-geometry palettes, in family order.
    ///
    /// A color listed in several hue families appears once per listing,
    /// which weights the random base pick towards it.
    #[must_use]
    pub fn hueable_colors(&self) -> Vec<&str> {
        family::HUEABLE
            .iter()
            .flat_map(|f| self.family_members(f).iter().map(String::as_str))
            .collect()
    }

    /// Name of the registry color nearest to `target` by Euclidean RGB
    /// distance.
    ///
    /// Linear scan; on ties the earliest entry in registry order wins. That
    /// tie-break is incidental, not a designed property, but golden outputs
    /// rely on it.
    #[must_use]
    pub fn closest_name(&self, target: RgbColor) -> &str {
        let mut best = &self.entries[0];
        let mut best_dist = f64::INFINITY;
        for entry in &self.entries {
            let dist = target.distance(&entry.rgb);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }
        &best.name
    }

    /// [`closest_name`](Self::closest_name) for a hex code.
    ///
    /// # Errors
    /// Returns [`PromptError::InvalidHex`] for malformed input.
    pub fn closest_name_to_hex(&self, hex: &str) -> Result<&str> {
        Ok(self.closest_name(RgbColor::from_hex(hex)?))
    }
}

/// Finds the registry name closest to `hex`.
///
/// # Errors
/// Returns [`PromptError::InvalidHex`] for malformed input.
pub fn find_closest_color_name<'a>(hex: &str, registry: &'a ColorRegistry) -> Result<&'a str> {
    registry.closest_name_to_hex(hex)
}
