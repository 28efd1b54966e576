//! Triadic palettes: three hues a third of a turn apart, plus extras.

use rand::seq::SliceRandom;
use rand::Rng;

use super::search::{fill_unique, is_distinct, search, Schedule};
use super::{broad_neutrals, nearest_names, random_base, rotate};
use crate::error::Result;
use crate::models::{family, ColorRegistry, RgbColor};

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Ways to pick the fourth color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fourth {
    Analogous,
    Tetradic,
    BroadNeutral,
}

fn triad_names(registry: &ColorRegistry, base: RgbColor) -> Vec<String> {
    let hls = base.to_hls();
    nearest_names(
        registry,
        &[base, rotate(hls, ONE_THIRD), rotate(hls, TWO_THIRDS)],
    )
}

/// Tries the fourth-color methods in random order; the first one that does
/// not repeat a triad name wins.
fn fourth_color<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
    neutrals: &[String],
    base: RgbColor,
    triad: &[String],
    offset: f64,
) -> Option<String> {
    let mut methods = vec![Fourth::Analogous, Fourth::Tetradic];
    if !triad
        .iter()
        .any(|name| registry.is_member(family::BROAD_NEUTRALS, name))
    {
        methods.push(Fourth::BroadNeutral);
    }

    while !methods.is_empty() {
        let index = rng.gen_range(0..methods.len());
        let candidate = match methods[index] {
            Fourth::Analogous => Some(registry.closest_name(base.shift_hue(offset)).to_string()),
            Fourth::Tetradic => Some(registry.closest_name(base.shift_hue(180.0)).to_string()),
            Fourth::BroadNeutral => neutrals.choose(rng).cloned(),
        };
        match candidate {
            Some(name) if !triad.contains(&name) => return Some(name),
            _ => {
                methods.remove(index);
            }
        }
    }
    None
}

/// Triad plus one analogous, complementary or neutral color.
///
/// # Errors
/// Returns a configuration error if the Broad Neutrals or hue families are empty.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    let neutrals = broad_neutrals(registry)?;
    let schedule = Schedule::new(15.0, vec![30.0]);
    let found = search(
        rng,
        &schedule,
        |rng, offset| {
            let base = random_base(registry, rng)?;
            let mut palette = triad_names(registry, base);
            Ok(fourth_color(registry, rng, neutrals, base, &palette, *offset).map(|fourth| {
                palette.push(fourth);
                palette
            }))
        },
        |palette| is_distinct(palette, 4),
    )?;

    match found {
        Some(palette) => Ok(palette),
        None => {
            let base = random_base(registry, rng)?;
            let seed = triad_names(registry, base);
            Ok(fill_unique(rng, registry, seed, 4))
        }
    }
}

/// Triad plus two extras; each extra is independently a fresh Broad Neutral
/// or an analogous neighbour of the base.
///
/// # Errors
/// Returns a configuration error if the Broad Neutrals or hue families are empty.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    let neutrals = broad_neutrals(registry)?;
    let schedule = Schedule::new(15.0, vec![30.0]);
    let found = search(
        rng,
        &schedule,
        |rng, offset| {
            let base = random_base(registry, rng)?;
            let mut palette = triad_names(registry, base);
            for slot in 0..2 {
                if rng.gen_bool(0.5) {
                    let available: Vec<&String> =
                        neutrals.iter().filter(|n| !palette.contains(n)).collect();
                    if let Some(name) = available.choose(rng) {
                        palette.push((*name).clone());
                        continue;
                    }
                }
                let shift = if slot == 0 { *offset } else { -*offset };
                let name = registry.closest_name(base.shift_hue(shift)).to_string();
                if !palette.contains(&name) {
                    palette.push(name);
                }
            }
            Ok(Some(palette))
        },
        |palette| is_distinct(palette, 5),
    )?;

    match found {
        Some(palette) => Ok(palette),
        None => {
            let base = random_base(registry, rng)?;
            let seed = triad_names(registry, base);
            Ok(fill_unique(rng, registry, seed, 5))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng;

    #[test]
    fn test_triad_of_red() {
        let registry = ColorRegistry::builtin().unwrap();
        let names = triad_names(registry, RgbColor::new(255, 0, 0));
        assert_eq!(names[0], "Red");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_four_keeps_triad_geometry() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=30 {
            let palette = generate_four(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&palette, 4), "{palette:?}");
            let base = registry.get(&palette[0]).unwrap().rgb;
            let hls = base.to_hls();
            assert_eq!(palette[1], registry.closest_name(rotate(hls, ONE_THIRD)));
            assert_eq!(palette[2], registry.closest_name(rotate(hls, TWO_THIRDS)));
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
    fn test_seed_42_is_reproducible() {
        let registry = ColorRegistry::builtin().unwrap();
        let first = generate_four(registry, &mut seed_rng(42)).unwrap();
        let second = generate_four(registry, &mut seed_rng(42)).unwrap();
        assert_eq!(first, second);
    }
}
