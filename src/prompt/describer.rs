//! Randomized character descriptions from weighted trait tables.
//!
//! Each trait draws from its own generator seeded with `seed + offset`, so
//! switching one trait on or off never changes what the others produce.

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use super::{pick_weighted, WeightedOption};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct FemaleTraits {
    eyes: Vec<WeightedOption>,
    nose: Vec<WeightedOption>,
    mouth: Vec<WeightedOption>,
    lips: Vec<WeightedOption>,
    face_shape: Vec<WeightedOption>,
    brow: Vec<WeightedOption>,
    ears: Vec<WeightedOption>,
    cheekbones: Vec<WeightedOption>,
    cheeks: Vec<WeightedOption>,
    chin: Vec<WeightedOption>,
    skin: Vec<WeightedOption>,
    makeup: Vec<WeightedOption>,
    neck: Vec<WeightedOption>,
    accessories: Vec<WeightedOption>,
    hair_style: Vec<WeightedOption>,
    hair_color: Vec<WeightedOption>,
    expression: Vec<WeightedOption>,
}

#[derive(Debug, Deserialize)]
struct MaleTraits {
    eyes: Vec<WeightedOption>,
    nose: Vec<WeightedOption>,
    mouth: Vec<WeightedOption>,
    face_shape: Vec<WeightedOption>,
    brow: Vec<WeightedOption>,
    ears: Vec<WeightedOption>,
    cheeks_cheekbones: Vec<WeightedOption>,
    chin: Vec<WeightedOption>,
    skin: Vec<WeightedOption>,
    neck: Vec<WeightedOption>,
    accessories: Vec<WeightedOption>,
    hair_style: Vec<WeightedOption>,
    hair_color: Vec<WeightedOption>,
    facial_hair: Vec<WeightedOption>,
    expression: Vec<WeightedOption>,
}

#[derive(Debug, Deserialize)]
struct TraitTables {
    female: FemaleTraits,
    male: MaleTraits,
}

static TRAITS: OnceCell<TraitTables> = OnceCell::new();

fn traits() -> Result<&'static TraitTables> {
    TRAITS.get_or_try_init(|| Ok(serde_json::from_str(include_str!("../data/traits.json"))?))
}

/// Weighted pick from a generator seeded with `seed + offset`.
fn pick(options: &[WeightedOption], seed: u64, offset: u64) -> Result<String> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(offset));
    pick_weighted(options, &mut rng).map(str::to_string)
}

/// Collects the enabled `Label: trait` lines.
struct Lines {
    seed: u64,
    lines: Vec<String>,
}

impl Lines {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            lines: Vec::new(),
        }
    }

    fn add(&mut self, enabled: bool, label: &str, options: &[WeightedOption], offset: u64) -> Result<()> {
        if enabled {
            let choice = pick(options, self.seed, offset)?;
            self.lines.push(format!("{label}: {choice}"));
        }
        Ok(())
    }

    fn join(self) -> String {
        self.lines.join("\n")
    }
}

/// Which facial features go into a female description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FemaleFeatures {
    /// Eyes line.
    pub eyes: bool,
    /// Nose line.
    pub nose: bool,
    /// Mouth line.
    pub mouth: bool,
    /// Lips line.
    pub lips: bool,
    /// Face shape line.
    pub face_shape: bool,
    /// Eyebrows and forehead line.
    pub brow: bool,
    /// Ears line.
    pub ears: bool,
    /// Cheekbones line.
    pub cheekbones: bool,
    /// Cheeks line.
    pub cheeks: bool,
    /// Chin and jaw line.
    pub chin: bool,
    /// Skin line.
    pub skin: bool,
    /// Makeup line (off by default).
    pub makeup: bool,
    /// Neck line (off by default).
    pub neck: bool,
    /// Accessories line (off by default).
    pub accessories: bool,
}

impl Default for FemaleFeatures {
    fn default() -> Self {
        Self {
            eyes: true,
            nose: true,
            mouth: true,
            lips: true,
            face_shape: true,
            brow: true,
            ears: true,
            cheekbones: true,
            cheeks: true,
            chin: true,
            skin: true,
            makeup: false,
            neck: false,
            accessories: false,
        }
    }
}

/// Which facial features go into a male description.
///
/// `cheeks_and_cheekbones` takes precedence over `cheekbones`; both draw
/// from the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaleFeatures {
    /// Eyes line.
    pub eyes: bool,
    /// Nose line.
    pub nose: bool,
    /// Mouth line.
    pub mouth: bool,
    /// Face shape line.
    pub face_shape: bool,
    /// Eyebrows and forehead line.
    pub brow: bool,
    /// Ears line.
    pub ears: bool,
    /// Combined "Cheeks & Cheekbones" line (off by default).
    pub cheeks_and_cheekbones: bool,
    /// Cheekbones line.
    pub cheekbones: bool,
    /// Chin and jaw line.
    pub chin: bool,
    /// Skin line.
    pub skin: bool,
    /// Neck line (off by default).
    pub neck: bool,
    /// Accessories line (off by default).
    pub accessories: bool,
}

impl Default for MaleFeatures {
    fn default() -> Self {
        Self {
            eyes: true,
            nose: true,
            mouth: true,
            face_shape: true,
            brow: true,
            ears: true,
            cheeks_and_cheekbones: false,
            cheekbones: true,
            chin: true,
            skin: true,
            neck: false,
            accessories: false,
        }
    }
}

/// Generated female character traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FemaleDescription {
    /// One `Label: trait` line per enabled feature.
    pub face_description: String,
    /// Hair style.
    pub hair_style: String,
    /// Hair color.
    pub hair_color: String,
    /// Facial expression.
    pub facial_expression: String,
}

/// Generated male character traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaleDescription {
    /// One `Label: trait` line per enabled feature.
    pub face_description: String,
    /// Hair style.
    pub hair_style: String,
    /// Hair color.
    pub hair_color: String,
    /// Beard or moustache.
    pub facial_hair: String,
    /// Facial expression.
    pub facial_expression: String,
}

/// Describes a female character. Any seed, including `0`, is reproducible.
///
/// # Errors
/// Returns an error only if the embedded trait tables are malformed.
pub fn describe_female(seed: u64, features: &FemaleFeatures) -> Result<FemaleDescription> {
    let t = &traits()?.female;
    let mut lines = Lines::new(seed);
    lines.add(features.eyes, "Eyes", &t.eyes, 1)?;
    lines.add(features.nose, "Nose", &t.nose, 2)?;
    lines.add(features.mouth, "Mouth", &t.mouth, 3)?;
    lines.add(features.lips, "Lips", &t.lips, 4)?;
    lines.add(features.face_shape, "Face Shape", &t.face_shape, 5)?;
    lines.add(features.brow, "Eyebrows & Forehead", &t.brow, 6)?;
    lines.add(features.ears, "Ears", &t.ears, 7)?;
    lines.add(features.cheekbones, "Cheekbones", &t.cheekbones, 8)?;
    lines.add(features.cheeks, "Cheeks", &t.cheeks, 9)?;
    lines.add(features.chin, "Chin/Jaw", &t.chin, 10)?;
    lines.add(features.skin, "Skin", &t.skin, 11)?;
    lines.add(features.makeup, "Makeup", &t.makeup, 12)?;
    lines.add(features.neck, "Neck", &t.neck, 13)?;
    lines.add(features.accessories, "Accessories", &t.accessories, 14)?;

    Ok(FemaleDescription {
        face_description: lines.join(),
        hair_style: pick(&t.hair_style, seed, 15)?,
        hair_color: pick(&t.hair_color, seed, 16)?,
        facial_expression: pick(&t.expression, seed, 17)?,
    })
}

/// Describes a male character. Any seed, including `0`, is reproducible.
///
/// # Errors
/// Returns an error only if the embedded trait tables are malformed.
pub fn describe_male(seed: u64, features: &MaleFeatures) -> Result<MaleDescription> {
    let t = &traits()?.male;
    let mut lines = Lines::new(seed);
    lines.add(features.eyes, "Eyes", &t.eyes, 1)?;
    lines.add(features.nose, "Nose", &t.nose, 2)?;
    lines.add(features.mouth, "Mouth", &t.mouth, 3)?;
    lines.add(features.face_shape, "Face Shape", &t.face_shape, 4)?;
    lines.add(features.brow, "Eyebrows & Forehead", &t.brow, 5)?;
    lines.add(features.ears, "Ears", &t.ears, 6)?;
    if features.cheeks_and_cheekbones {
        lines.add(true, "Cheeks & Cheekbones", &t.cheeks_cheekbones, 7)?;
    } else {
        lines.add(features.cheekbones, "Cheekbones", &t.cheeks_cheekbones, 7)?;
    }
    lines.add(features.chin, "Chin/Jaw", &t.chin, 8)?;
    lines.add(features.skin, "Skin", &t.skin, 9)?;
    lines.add(features.neck, "Neck", &t.neck, 10)?;
    lines.add(features.accessories, "Accessories", &t.accessories, 11)?;

    Ok(MaleDescription {
        face_description: lines.join(),
        hair_style: pick(&t.hair_style, seed, 12)?,
        hair_color: pick(&t.hair_color, seed, 13)?,
        facial_hair: pick(&t.facial_hair, seed, 14)?,
        facial_expression: pick(&t.expression, seed, 15)?,
    })
}
