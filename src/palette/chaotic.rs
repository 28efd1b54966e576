//! Chaotic palettes: distinct names drawn uniformly from the whole registry.

use rand::seq::SliceRandom;
use rand::Rng;

use super::search::pad_with_last;
use crate::models::ColorRegistry;

/// `count` distinct random registry names, padded by repetition only when
/// the registry is smaller than `count`.
pub fn generate<R: Rng + ?Sized>(registry: &ColorRegistry, count: usize, rng: &mut R) -> Vec<String> {
    let mut palette: Vec<String> = registry
        .entries()
        .choose_multiple(rng, count)
        .map(|entry| entry.name.clone())
        .collect();
    pad_with_last(&mut palette, count);
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::search::is_distinct;
    use crate::rng::seed_rng;

    #[test]
    fn test_distinct_registry_names() {
        let registry = ColorRegistry::builtin().unwrap();
        let mut rng = seed_rng(13);
        for _ in 0..50 {
            let palette = generate(registry, 5, &mut rng);
            assert!(is_distinct(&palette, 5));
            assert!(palette.iter().all(|n| registry.contains(n)));
        }
    }

    #[test]
    fn test_small_registry_pads() {
        let json = r##"{
            "colors": [
                {"name": "Red", "hex": "#ff0000"},
                {"name": "Blue", "hex": "#0000ff"}
            ],
            "families": []
        }"##;
        let registry = ColorRegistry::from_json(json).unwrap();
        let palette = generate(&registry, 4, &mut seed_rng(1));
        assert_eq!(palette.len(), 4);
        assert_eq!(palette[2], palette[1]);
        assert_eq!(palette[3], palette[1]);
    }
}
