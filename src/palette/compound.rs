//! Compound (double split-complementary) palettes.

use rand::seq::SliceRandom;
use rand::Rng;

use super::search::{fill_unique, is_distinct, pad_with_last, search, Schedule};
use super::{nearest_names, random_base};
use crate::error::Result;
use crate::models::{ColorRegistry, RgbColor};

/// Analogous and split offsets in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Offsets {
    analogous: f64,
    split: f64,
}

impl Offsets {
    const BASE: Self = Self {
        analogous: 15.0,
        split: 30.0,
    };

    fn scaled(self, factor: f64) -> Self {
        Self {
            analogous: self.analogous * factor,
            split: self.split * factor,
        }
    }
}

/// Base, base + a, complement - s, complement + s, base - a.
fn compound_colors(base: RgbColor, offsets: Offsets) -> [RgbColor; 5] {
    [
        base,
        base.shift_hue(offsets.analogous),
        base.shift_hue(180.0 - offsets.split),
        base.shift_hue(180.0 + offsets.split),
        base.shift_hue(-offsets.analogous),
    ]
}

/// Five-color compound palette.
///
/// # Errors
/// Returns a configuration error if the hue families are empty.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    let schedule = Schedule::new(
        Offsets::BASE,
        [1.2, 1.5, 2.0]
            .into_iter()
            .map(|factor| Offsets::BASE.scaled(factor))
            .collect(),
    );
    let found = search(
        rng,
        &schedule,
        |rng, offsets| {
            let base = random_base(registry, rng)?;
            Ok(Some(nearest_names(registry, &compound_colors(base, *offsets))))
        },
        |palette| is_distinct(palette, 5),
    )?;

    Ok(found.unwrap_or_else(|| fill_unique(rng, registry, Vec::new(), 5)))
}

/// Four colors sampled at random from a five-color compound palette.
///
/// # Errors
/// Returns a configuration error if the hue families are empty.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    let schedule = Schedule::new((), Vec::new());
    let found = search(
        rng,
        &schedule,
        |rng, _| {
            let five = generate_five(registry, rng)?;
            Ok(Some(five.choose_multiple(rng, 4).cloned().collect::<Vec<_>>()))
        },
        |palette| is_distinct(palette, 4),
    )?;

    match found {
        Some(palette) => Ok(palette),
        None => {
            let mut palette: Vec<String> = Vec::with_capacity(4);
            for name in generate_five(registry, rng)? {
                if palette.len() < 4 && !palette.contains(&name) {
                    palette.push(name);
                }
            }
            pad_with_last(&mut palette, 4);
            Ok(palette)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng;

    #[test]
    fn test_recipe_offsets() {
        let red = RgbColor::new(255, 0, 0);
        let colors = compound_colors(red, Offsets::BASE);
        assert_eq!(colors[1], red.shift_hue(15.0));
        assert_eq!(colors[2], red.shift_hue(150.0));
        assert_eq!(colors[3], red.shift_hue(210.0));
        assert_eq!(colors[4], red.shift_hue(-15.0));
    }

    #[test]
    fn test_relaxed_offsets_scale_together() {
        assert_eq!(
            Offsets::BASE.scaled(2.0),
            Offsets {
                analogous: 30.0,
                split: 60.0
            }
        );
    }

    #[test]
    fn test_four_is_distinct() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=20 {
            let four = generate_four(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&four, 4), "{four:?}");
        }
    }

    #[test]
    fn test_five_is_distinct() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=20 {
            let five = generate_five(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&five, 5), "{five:?}");
        }
    }
}
