//! Complementary palettes: the base, its opposite, and a neighbouring pair.

use rand::Rng;

use super::search::{fill_unique, is_distinct, search, Schedule};
use super::{nearest_names, random_base};
use crate::error::Result;
use crate::models::{ColorRegistry, RgbColor};

/// Base, complement, base + offset, complement of base + offset.
fn four_colors(base: RgbColor, offset: f64) -> [RgbColor; 4] {
    let analogous = base.shift_hue(offset);
    [
        base,
        base.shift_hue(180.0),
        analogous,
        analogous.shift_hue(180.0),
    ]
}

/// As [`four_colors`] with base - offset inserted before the last color.
fn five_colors(base: RgbColor, offset: f64) -> [RgbColor; 5] {
    let [base, complement, analogous, analogous_complement] = four_colors(base, offset);
    [
        base,
        complement,
        analogous,
        base.shift_hue(-offset),
        analogous_complement,
    ]
}

fn generate_sized<R, F>(registry: &ColorRegistry, rng: &mut R, size: usize, colors: F) -> Result<Vec<String>>
where
    R: Rng + ?Sized,
    F: Fn(RgbColor, f64) -> Vec<RgbColor>,
{
    let schedule = Schedule::new(15.0, vec![30.0]);
    let found = search(
        rng,
        &schedule,
        |rng, offset| {
            let base = random_base(registry, rng)?;
            Ok(Some(nearest_names(registry, &colors(base, *offset))))
        },
        |palette| is_distinct(palette, size),
    )?;

    match found {
        Some(palette) => Ok(palette),
        None => {
            let base = random_base(registry, rng)?;
            let seed = nearest_names(registry, &[base, base.shift_hue(180.0)]);
            Ok(fill_unique(rng, registry, seed, size))
        }
    }
}

/// Four-color complementary palette.
///
/// # Errors
/// Returns a configuration error if the hue families are empty.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_sized(registry, rng, 4, |base, offset| four_colors(base, offset).to_vec())
}

/// Five-color complementary palette.
///
/// # Errors
/// Returns a configuration error if the hue families are empty.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_sized(registry, rng, 5, |base, offset| five_colors(base, offset).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng;

    #[test]
    fn test_recipe_offsets() {
        let red = RgbColor::new(255, 0, 0);
        let colors = five_colors(red, 15.0);
        assert_eq!(colors[0], red);
        // truncation, not rounding
        assert_eq!(colors[1], RgbColor::new(0, 254, 255));
        assert_eq!(colors[2], red.shift_hue(15.0));
        assert_eq!(colors[3], red.shift_hue(-15.0));
        assert_eq!(colors[4], red.shift_hue(15.0).shift_hue(180.0));
    }

    #[test]
    fn test_second_color_is_complement_of_first() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=30 {
            let palette = generate_four(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&palette, 4), "{palette:?}");
            let base = registry.get(&palette[0]).unwrap().rgb;
            assert_eq!(palette[1], registry.closest_name(base.shift_hue(180.0)));
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
}
