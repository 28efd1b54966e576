//! Palette generation.
//!
//! Eight generator families turn a base hue (or a family pool) into an
//! ordered list of registry color names. [`selector`] picks among them and
//! applies family preferences.

pub mod analogous;
pub mod art_house;
pub mod chaotic;
pub mod complementary;
pub mod compound;
pub mod search;
pub mod selector;
pub mod split_complementary;
pub mod tetradic;
pub mod triadic;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PromptError, Result};
use crate::models::{ColorRegistry, Hls, RgbColor};

pub use selector::{
    select_palette, select_palette_with_rng, PaletteOutput, PaletteRequest, PaletteSelection,
    OUTPUT_SLOTS,
};

/// Palette generator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    /// Neighbouring hues plus a Broad Neutral.
    Analogous,
    /// Greys with warm accents.
    ArtHouse,
    /// Random registry colors.
    Chaotic,
    /// Base, its complement and analogous neighbours.
    Complementary,
    /// Analogous and split-complementary hues mixed.
    Compound,
    /// Base and the two hues either side of its complement.
    SplitComplementary,
    /// Double-complementary.
    Tetradic,
    /// Three hues a third of a turn apart.
    Triadic,
}

impl PaletteKind {
    /// All kinds, in selector order.
    pub const ALL: [Self; 8] = [
        Self::Analogous,
        Self::ArtHouse,
        Self::Chaotic,
        Self::Complementary,
        Self::Compound,
        Self::SplitComplementary,
        Self::Tetradic,
        Self::Triadic,
    ];

    /// Label reported as the palette type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::ArtHouse => "art_house",
            Self::Chaotic => "chaotic",
            Self::Complementary => "complementary",
            Self::Compound => "compound",
            Self::SplitComplementary => "split_complementary",
            Self::Tetradic => "tetradic",
            Self::Triadic => "triadic",
        }
    }

    /// Generates a palette of this kind.
    ///
    /// Three-color palettes are the first three names of a four-color one,
    /// never generated on their own.
    ///
    /// # Errors
    /// Returns [`PromptError::Configuration`] when the registry cannot supply
    /// the families a generator needs.
    pub fn generate<R: Rng + ?Sized>(
        self,
        registry: &ColorRegistry,
        size: PaletteSize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let five = size == PaletteSize::Five;
        let mut palette = match self {
            Self::Analogous if five => analogous::generate_five(registry, rng)?,
            Self::Analogous => analogous::generate_four(registry, rng)?,
            Self::ArtHouse if five => art_house::generate_five(registry, rng)?,
            Self::ArtHouse => art_house::generate_four(registry, rng)?,
            Self::Chaotic if five => chaotic::generate(registry, 5, rng),
            Self::Chaotic => chaotic::generate(registry, 4, rng),
            Self::Complementary if five => complementary::generate_five(registry, rng)?,
            Self::Complementary => complementary::generate_four(registry, rng)?,
            Self::Compound if five => compound::generate_five(registry, rng)?,
            Self::Compound => compound::generate_four(registry, rng)?,
            Self::SplitComplementary if five => split_complementary::generate_five(registry, rng)?,
            Self::SplitComplementary => split_complementary::generate_four(registry, rng)?,
            Self::Tetradic if five => tetradic::generate_five(registry, rng)?,
            Self::Tetradic => tetradic::generate_four(registry, rng)?,
            Self::Triadic if five => triadic::generate_five(registry, rng)?,
            Self::Triadic => triadic::generate_four(registry, rng)?,
        };
        palette.truncate(size.count());
        Ok(palette)
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaletteKind {
    type Err = PromptError;

    /// Accepts the label with `_`, `-` or a space as separator.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match wanted.as_str() {
            "double_complementary" => Ok(Self::Tetradic),
            "double_split_complementary" => Ok(Self::Compound),
            other => Self::ALL
                .into_iter()
                .find(|kind| kind.label() == other)
                .ok_or_else(|| PromptError::UnknownPaletteKind(s.to_string())),
        }
    }
}

/// Number of colors in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PaletteSize {
    /// Three colors.
    Three,
    #[default]
    /// Four colors.
    Four,
    /// Five colors.
    Five,
}

impl PaletteSize {
    /// Color count as a number.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl TryFrom<u8> for PaletteSize {
    type Error = PromptError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(PromptError::InvalidPaletteSize(other.to_string())),
        }
    }
}

impl From<PaletteSize> for u8 {
    fn from(size: PaletteSize) -> Self {
        match size {
            PaletteSize::Three => 3,
            PaletteSize::Four => 4,
            PaletteSize::Five => 5,
        }
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colors", self.count())
    }
}

impl FromStr for PaletteSize {
    type Err = PromptError;

    /// Accepts `"4"` or the drop-down form `"4 colors"`.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_end_matches("colors").trim();
        let value: u8 = digits
            .parse()
            .map_err(|_| PromptError::InvalidPaletteSize(s.trim().to_string()))?;
        Self::try_from(value)
    }
}

/// Picks a random base color from the hue families.
///
/// # Errors
/// Returns [`PromptError::Configuration`] if the hue families are empty.
pub(crate) fn random_base<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
) -> Result<RgbColor> {
    let candidates = registry.hueable_colors();
    let name = candidates.choose(rng).ok_or_else(|| {
        PromptError::Configuration("No hue family colors available for a base color".to_string())
    })?;
    registry
        .get(name)
        .map(|entry| entry.rgb)
        .ok_or_else(|| PromptError::UnknownColor((*name).to_string()))
}

/// Nearest registry name for each color, in order.
pub(crate) fn nearest_names(registry: &ColorRegistry, colors: &[RgbColor]) -> Vec<String> {
    colors
        .iter()
        .map(|c| registry.closest_name(*c).to_string())
        .collect()
}

/// Color at the same lightness and saturation as `base`, hue advanced by
/// `fraction` of a turn.
pub(crate) fn rotate(base: Hls, fraction: f64) -> RgbColor {
    RgbColor::from_hls(Hls {
        h: (base.h + fraction).rem_euclid(1.0),
        ..base
    })
}

/// Members of the Broad Neutrals family.
///
/// # Errors
/// Returns [`PromptError::Configuration`] if the family is missing or empty.
pub(crate) fn broad_neutrals(registry: &ColorRegistry) -> Result<&[String]> {
    let members = registry.family_members(crate::models::family::BROAD_NEUTRALS);
    if members.is_empty() {
        return Err(PromptError::Configuration(
            "Broad Neutrals family is empty".to_string(),
        ));
    }
    Ok(members)
}
