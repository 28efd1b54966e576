//! Art-house palettes: several greys and a single warm accent.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::search::{is_distinct, pad_with_last, search, Schedule};
use crate::error::{PromptError, Result};
use crate::models::{family, ColorRegistry};

/// How the warm accent is chosen.
#[derive(Debug, Clone, Copy)]
enum Accent {
    Random,
    /// First warm color, in family order, that keeps the palette distinct.
    Scan,
}

/// Warm colors usable as an accent: not metallic, grey or pastel.
fn accent_pool(registry: &ColorRegistry) -> Vec<&str> {
    let excluded: HashSet<&str> = [family::METALLICS, family::GREYS, family::PASTELS]
        .iter()
        .flat_map(|f| registry.family_members(f).iter().map(String::as_str))
        .collect();
    registry
        .family_members(family::WARM)
        .iter()
        .map(String::as_str)
        .filter(|name| !excluded.contains(name))
        .collect()
}

fn generate_with_greys<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    rng: &mut R,
    grey_count: usize,
) -> Result<Vec<String>> {
    let greys = registry.family_members(family::GREYS);
    if greys.len() < grey_count {
        return Err(PromptError::Configuration(format!(
            "Not enough grey colors available: need {grey_count}, found {}",
            greys.len()
        )));
    }
    let warm = accent_pool(registry);
    if warm.is_empty() {
        return Err(PromptError::Configuration(
            "No valid Warm Colors available".to_string(),
        ));
    }

    let size = grey_count + 1;
    let schedule = Schedule::new(Accent::Random, vec![Accent::Scan]);
    let found = search(
        rng,
        &schedule,
        |rng, accent| {
            let mut palette: Vec<String> = greys.choose_multiple(rng, grey_count).cloned().collect();
            let pick = match accent {
                Accent::Random => warm.choose(rng).copied(),
                Accent::Scan => warm.iter().copied().find(|w| !palette.iter().any(|p| p == w)),
            };
            Ok(pick.map(|name| {
                palette.push(name.to_string());
                palette
            }))
        },
        |palette| is_distinct(palette, size),
    )?;

    Ok(found.unwrap_or_else(|| {
        let mut palette: Vec<String> = greys.choose_multiple(rng, grey_count).cloned().collect();
        pad_with_last(&mut palette, size);
        palette
    }))
}

/// Three distinct greys and one warm accent.
///
/// # Errors
/// Returns [`PromptError::Configuration`] with fewer than three greys or no
/// usable warm color.
pub fn generate_four<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_with_greys(registry, rng, 3)
}

/// Four distinct greys and one warm accent.
///
/// # Errors
/// Returns [`PromptError::Configuration`] with fewer than four greys or no
/// usable warm color.
pub fn generate_five<R: Rng + ?Sized>(registry: &ColorRegistry, rng: &mut R) -> Result<Vec<String>> {
    generate_with_greys(registry, rng, 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seed_rng;

    const THREE_GREYS: &str = r##"{
        "colors": [
            {"name": "Ash", "hex": "#b2beb5"},
            {"name": "Slate", "hex": "#708090"},
            {"name": "Charcoal", "hex": "#36454f"},
            {"name": "Rust", "hex": "#b7410e"},
            {"name": "Gold", "hex": "#ffd700"}
        ],
        "families": [
            {"name": "Greys", "members": ["Ash", "Slate", "Charcoal"]},
            {"name": "Metallics", "members": ["Gold"]},
            {"name": "Warm Colors", "members": ["Rust", "Gold"]}
        ]
    }"##;

    #[test]
    fn test_greys_then_warm_accent() {
        let registry = ColorRegistry::builtin().unwrap();
        let pool = accent_pool(registry);
        for seed in 1..=30 {
            let palette = generate_five(registry, &mut seed_rng(seed)).unwrap();
            assert!(is_distinct(&palette, 5), "{palette:?}");
            assert!(palette[..4]
                .iter()
                .all(|name| registry.is_member(family::GREYS, name)));
            assert!(pool.contains(&palette[4].as_str()));
        }
    }

    #[test]
    fn test_accent_pool_excludes_metallics_and_pastels() {
        let registry = ColorRegistry::builtin().unwrap();
        for name in accent_pool(registry) {
            assert!(registry.is_member(family::WARM, name));
            assert!(!registry.is_member(family::METALLICS, name));
            assert!(!registry.is_member(family::PASTELS, name));
            assert!(!registry.is_member(family::GREYS, name));
        }
    }

    #[test]
    fn test_too_few_greys_for_five_is_configuration_error() {
        let registry = ColorRegistry::from_json(THREE_GREYS).unwrap();
        let err = generate_five(&registry, &mut seed_rng(1)).unwrap_err();
        assert!(matches!(err, PromptError::Configuration(_)));

        let four = generate_four(&registry, &mut seed_rng(1)).unwrap();
        assert_eq!(four.len(), 4);
        assert_eq!(four[3], "Rust");
    }

    #[test]
    fn test_no_warm_accent_is_configuration_error() {
        let json = THREE_GREYS.replace(r#"["Rust", "Gold"]"#, r#"["Gold"]"#);
        let registry = ColorRegistry::from_json(&json).unwrap();
        let err = generate_four(&registry, &mut seed_rng(1)).unwrap_err();
        assert!(matches!(err, PromptError::Configuration(_)));
    }
}
