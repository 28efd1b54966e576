//! Split-complementary palettes: the base and the two hues either side of
//! its complement.

use rand::seq::SliceRandom;
use rand::Rng;

use super::search::{fill_unique, is_distinct, search, Schedule, MAX_ATTEMPTS};
use super::{broad_neutrals, nearest_names, random_base, rotate};
use crate::error::Result;
use crate::models::{family, ColorRegistry, RgbColor};

const ANALOGOUS_OFFSET: f64 = 15.0;

/// Base, complement + split, complement - split, then a fourth color that is
/// either the base + 15 degrees or a random Broad Neutral.
///
/// The neutral is only an option when none of the first three names is
/// already a Broad Neutral.
fn four_names<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
    neutrals: &[String],
    base: RgbColor,
    split_degrees: f64,
) -> Vec<String> {
    let hls = base.to_hls();
    let split = split_degrees / 360.0;
    let mut names = nearest_names(
        registry,
        &[
            rotate(hls, 0.0),
            rotate(hls, 0.5 + split),
            rotate(hls, 0.5 - split),
        ],
    );

    let has_neutral = names
        .iter()
        .any(|name| registry.is_member(family::BROAD_NEUTRALS, name));
    let use_analogous = rng.gen_bool(0.5) || has_neutral;
    let fourth = if use_analogous {
        None
    } else {
        neutrals.choose(rng).cloned()
    };
    names.push(fourth.unwrap_or_else(|| {
        registry
            .closest_name(base.shift_hue(ANALOGOUS_OFFSET))
            .to_string()
    }));
    names
}

/// Extends [`four_names`] with the option the fourth slot did not use: a
/// second distinct neutral, or the base - 15 degrees.
fn five_names<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
    neutrals: &[String],
    base: RgbColor,
    split_degrees: f64,
) -> Vec<String> {
    for _ in 0..MAX_ATTEMPTS {
        let mut names = four_names(registry, rng, neutrals, base, split_degrees);
        let extra = if registry.is_member(family::BROAD_NEUTRALS, &names[3]) {
            let unused: Vec<&String> = neutrals.iter().filter(|n| !names.contains(n)).collect();
            match unused.choose(rng) {
                Some(name) => (*name).clone(),
                None => continue,
            }
        } else {
            registry
                .closest_name(base.shift_hue(-ANALOGOUS_OFFSET))
                .to_string()
        };
        names.push(extra);
        if is_distinct(&names, 5) {
            return names;
        }
    }

    let names = four_names(registry, rng, neutrals, base, split_degrees);
    fill_unique(rng, registry, names, 5)
}

fn generate_sized<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
    size: usize,
) -> Result<Vec<String>> {
    let neutrals = broad_neutrals(registry)?;
    let schedule = Schedule::new(30.0, vec![45.0, 60.0]);
    let found = search(
        rng,
        &schedule,
        |rng, split| {
            let base = random_base(registry, rng)?;
            Ok(Some(if size == 5 {
                five_names(registry, rng, neutrals, base, *split)
            } else {
                four_names(registry, rng, neutrals, base, *split)
            }))
        },
        |palette| is_distinct(palette, size),
    )?;

    Ok(found.unwrap_or_else(|| fill_unique(rng, registry, Vec::new(), size)))
}

/// Four-color split-complementary palette.
///
/// # Errors
/// Returns a configuration error if the Broad Neutrals or hue families are empty.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_sized(registry, rng, 4)
}

/// Five-color split-complementary palette.
///
/// # Errors
/// Returns a configuration error if the Broad Neutrals or hue families are empty.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_sized(registry, rng, 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng;

    #[test]
    fn test_four_names_fourth_slot() {
        let registry = ColorRegistry::builtin().unwrap();
        let neutrals = broad_neutrals(registry).unwrap();
        let red = RgbColor::new(255, 0, 0);
        let analogous = registry.closest_name(red.shift_hue(15.0));
        let mut rng = seed_rng(8);
        for _ in 0..20 {
            let names = four_names(registry, &mut rng, neutrals, red, 30.0);
            assert_eq!(names.len(), 4);
            assert_eq!(names[0], "Red");
            assert!(names[3] == analogous || neutrals.contains(&names[3]));
        }
    }

    #[test]
    fn test_four_and_five_are_distinct() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=30 {
            let four = generate_four(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&four, 4), "{four:?}");
            let five = generate_five(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&five, 5), "{five:?}");
        }
    }
}
