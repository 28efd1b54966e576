//! Analogous palettes: the base hue and its near neighbours, plus a neutral.

use rand::seq::SliceRandom;
use rand::Rng;

use super::search::{fill_unique, is_distinct, search, Schedule};
use super::{broad_neutrals, nearest_names, random_base};
use crate::error::Result;
use crate::models::{ColorRegistry, RgbColor};

/// How the Broad Neutral slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filler {
    /// Any neutral, chosen at random.
    Random,
    /// The first neutral, in family order, not already in the palette.
    FirstUnique,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    offset: f64,
    filler: Filler,
}

impl Step {
    const fn new(offset: f64, filler: Filler) -> Self {
        Self { offset, filler }
    }
}

/// Base, base + offset, base - offset.
fn analogous_names(registry: &ColorRegistry, base: RgbColor, offset: f64) -> Vec<String> {
    nearest_names(
        registry,
        &[base, base.shift_hue(offset), base.shift_hue(-offset)],
    )
}

fn pick_neutral<R: Rng + ?Sized>(
    rng: &mut R,
    neutrals: &[String],
    palette: &[String],
    filler: Filler,
) -> Option<String> {
    match filler {
        Filler::Random => neutrals.choose(rng).cloned(),
        Filler::FirstUnique => neutrals.iter().find(|n| !palette.contains(n)).cloned(),
    }
}

/// Three analogous colors (15 degrees apart) and one Broad Neutral.
///
/// # Errors
/// Returns a configuration error if the Broad Neutrals or hue families are empty.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    let neutrals = broad_neutrals(registry)?;
    let schedule = Schedule::new(
        Step::new(15.0, Filler::Random),
        vec![Step::new(30.0, Filler::FirstUnique)],
    );

    let found = search(
        rng,
        &schedule,
        |rng, step| {
            let base = random_base(registry, rng)?;
            let mut palette = analogous_names(registry, base, step.offset);
            Ok(pick_neutral(rng, neutrals, &palette, step.filler).map(|neutral| {
                palette.push(neutral);
                palette
            }))
        },
        |palette| is_distinct(palette, 4),
    )?;

    match found {
        Some(palette) => Ok(palette),
        None => {
            let base = random_base(registry, rng)?;
            let seed = analogous_names(registry, base, 30.0);
            Ok(fill_unique(rng, registry, seed, 4))
        }
    }
}

/// Three analogous colors, a second neighbour at twice the offset, and one
/// Broad Neutral.
///
/// # Errors
/// Returns a configuration error if the Broad Neutrals or hue families are empty.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    let neutrals = broad_neutrals(registry)?;
    let schedule = Schedule::new(
        Step::new(15.0, Filler::Random),
        [20.0, 25.0, 30.0]
            .into_iter()
            .map(|offset| Step::new(offset, Filler::FirstUnique))
            .collect(),
    );

    let found = search(
        rng,
        &schedule,
        |rng, step| {
            let base = random_base(registry, rng)?;
            let mut palette = analogous_names(registry, base, step.offset);
            palette.push(
                registry
                    .closest_name(base.shift_hue(step.offset * 2.0))
                    .to_string(),
            );
            if step.filler == Filler::FirstUnique && !is_distinct(&palette, 4) {
                return Ok(None);
            }
            Ok(pick_neutral(rng, neutrals, &palette, step.filler).map(|neutral| {
                palette.push(neutral);
                palette
            }))
        },
        |palette| is_distinct(palette, 5),
    )?;

    match found {
        Some(palette) => Ok(palette),
        None => {
            let base = random_base(registry, rng)?;
            let seed = analogous_names(registry, base, 30.0);
            Ok(fill_unique(rng, registry, seed, 5))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::family;
    use crate::rng::seed_rng;

    #[test]
    fn test_four_ends_with_broad_neutral() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=30 {
            let palette = generate_four(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&palette, 4), "{palette:?}");
            assert!(registry.is_member(family::BROAD_NEUTRALS, &palette[3]));
        }
    }

    #[test]
    fn test_four_starts_with_hue_family_base() {
        let registry = ColorRegistry::builtin().unwrap();
        let hueable = registry.hueable_colors();
        for seed in 1..=30 {
            let palette = generate_four(registry, &mut seed_rng(seed)).unwrap();
            let base = registry.get(&palette[0]).unwrap().rgb;
            assert!(hueable
                .iter()
                .any(|n| registry.get(n).is_some_and(|e| e.rgb == base)));
        }
    }

    #[test]
    fn test_five_is_distinct() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=30 {
            let palette = generate_five(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&palette, 5), "{palette:?}");
        }
    }

    #[test]
    fn test_same_seed_same_palette() {
        let registry = ColorRegistry::builtin().unwrap();
        let a = generate_five(registry, &mut seed_rng(77)).unwrap();
        let b = generate_five(registry, &mut seed_rng(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_neutrals_is_configuration_error() {
        let json = r##"{
            "colors": [{"name": "Red", "hex": "#ff0000"}],
            "families": [{"name": "Reds", "members": ["Red"]}]
        }"##;
        let registry = ColorRegistry::from_json(json).unwrap();
        let err = generate_four(&registry, &mut seed_rng(1)).unwrap_err();
        assert!(matches!(err, crate::error::PromptError::Configuration(_)));
    }
}
