//! Tetradic (double-complementary) palettes: two complementary pairs.

use rand::Rng;

use super::search::{fill_unique, is_distinct, search, Schedule};
use super::{nearest_names, random_base, rotate};
use crate::error::Result;
use crate::models::{ColorRegistry, RgbColor};

/// Distance between the two pairs, as a fraction of a turn, and the hue
/// shift of the optional fifth color in degrees.
#[derive(Debug, Clone, Copy)]
struct Shape {
    pair_shift: f64,
    extra_degrees: f64,
}

const SHAPE: Shape = Shape {
    pair_shift: 1.0 / 6.0,
    extra_degrees: 30.0,
};

const RELAXED: [Shape; 2] = [
    Shape {
        pair_shift: 1.0 / 5.0,
        extra_degrees: 45.0,
    },
    Shape {
        pair_shift: 1.0 / 4.0,
        extra_degrees: 60.0,
    },
];

fn pairs(base: RgbColor, pair_shift: f64) -> Vec<RgbColor> {
    let hls = base.to_hls();
    vec![
        rotate(hls, 0.0),
        rotate(hls, 0.5),
        rotate(hls, pair_shift),
        rotate(hls, pair_shift + 0.5),
    ]
}

fn generate_sized<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
    size: usize,
) -> Result<Vec<String>> {
    let schedule = Schedule::new(SHAPE, RELAXED.to_vec());
    let found = search(
        rng,
        &schedule,
        |rng, shape| {
            let base = random_base(registry, rng)?;
            let mut colors = pairs(base, shape.pair_shift);
            if size == 5 {
                colors.push(base.shift_hue(shape.extra_degrees));
            }
            Ok(Some(nearest_names(registry, &colors)))
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

/// Base, complement, and a second complementary pair a sixth of a turn on.
///
/// # Errors
/// Returns a configuration error if the hue families are empty.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_sized(registry, rng, 4)
}

/// The four-color palette plus the base shifted by 30 degrees.
///
/// # Errors
/// Returns a configuration error if the hue families are empty.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_sized(registry, rng, 5)
}
