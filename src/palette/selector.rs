//! Palette selection across enabled generator kinds with family constraints.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use super::search::MAX_ATTEMPTS;
use super::{PaletteKind, PaletteSize};
use crate::error::{PromptError, Result};
use crate::models::{ColorRegistry, FamilyFilter};
use crate::rng::seed_rng;

/// Number of name slots in [`PaletteOutput`].
pub const OUTPUT_SLOTS: usize = 5;

/// Inputs to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRequest {
    /// Enabled generator kinds. Empty means all.
    pub kinds: Vec<PaletteKind>,
    /// Requested palette size.
    pub size: PaletteSize,
    /// Family the palette should include.
    pub prefer: FamilyFilter,
    /// Family the palette should leave out.
    pub avoid: FamilyFilter,
    /// Random seed; `0` is non-deterministic.
    pub seed: u64,
}

impl Default for PaletteRequest {
    fn default() -> Self {
        Self {
            kinds: PaletteKind::ALL.to_vec(),
            size: PaletteSize::default(),
            prefer: FamilyFilter::None,
            avoid: FamilyFilter::None,
            seed: 0,
        }
    }
}

impl PaletteRequest {
    /// Enabled kinds in canonical order without repeats, or all kinds when
    /// none are enabled.
    fn enabled_kinds(&self) -> Vec<PaletteKind> {
        let kinds: Vec<PaletteKind> = PaletteKind::ALL
            .into_iter()
            .filter(|kind| self.kinds.contains(kind))
            .collect();
        if kinds.is_empty() {
            warn!("No palette types were enabled, defaulting to all palette types");
            return PaletteKind::ALL.to_vec();
        }
        kinds
    }

    /// Prefer and avoid, cleared when both name the same family.
    fn constraints(&self) -> (FamilyFilter, FamilyFilter) {
        if self.prefer != FamilyFilter::None && self.prefer == self.avoid {
            warn!(
                "The same color family ({}) was selected for both prefer and avoid, ignoring both",
                self.prefer
            );
            return (FamilyFilter::None, FamilyFilter::None);
        }
        (self.prefer, self.avoid)
    }
}

/// A chosen palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSelection {
    /// Generator that produced the palette.
    pub kind: PaletteKind,
    /// Registry names in palette order.
    pub names: Vec<String>,
    /// False when the prefer/avoid constraints could not be met and the last
    /// attempt was returned anyway.
    pub constraints_met: bool,
}

impl PaletteSelection {
    /// Host-facing rendering of the selection.
    #[must_use]
    pub fn to_output(&self, registry: &ColorRegistry) -> PaletteOutput {
        let display: Vec<String> = self.names.iter().map(|n| n.to_lowercase()).collect();
        let mut colors = display.clone();
        colors.resize(OUTPUT_SLOTS.max(display.len()), String::new());
        let hex_values: Vec<&str> = self
            .names
            .iter()
            .map(|name| registry.hex(name).unwrap_or_default())
            .collect();

        PaletteOutput {
            palette: display.join(", "),
            colors,
            palette_type: self.kind.label().to_string(),
            hex_values: hex_values.join(", "),
            constraints_met: self.constraints_met,
        }
    }
}

/// Selector result as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteOutput {
    /// Lower-case names joined with ", ".
    pub palette: String,
    /// Lower-case names padded with empty strings to five slots.
    pub colors: Vec<String>,
    /// Label of the generator used.
    pub palette_type: String,
    /// Registry hex codes of the names, joined with ", ".
    pub hex_values: String,
    /// Whether prefer/avoid were satisfied.
    pub constraints_met: bool,
}

/// Selects a palette using a generator seeded from `request.seed`.
///
/// # Errors
/// Returns a configuration error when a generator's required families are
/// missing from the registry.
pub fn select_palette(registry: &ColorRegistry, request: &PaletteRequest) -> Result<PaletteSelection> {
    let mut rng = seed_rng(request.seed);
    select_palette_with_rng(registry, request, &mut rng)
}

/// Selects a palette drawing from `rng`; `request.seed` is ignored.
///
/// Up to [`MAX_ATTEMPTS`] palettes are generated, each from a uniformly
/// chosen enabled kind. The first that satisfies both constraints wins;
/// otherwise the last one is returned with `constraints_met` unset.
///
/// # Errors
/// Returns a configuration error when a generator's required families are
/// missing from the registry.
pub fn select_palette_with_rng<R: Rng + ?Sized>(
    registry: &ColorRegistry,
    request: &PaletteRequest,
    rng: &mut R,
) -> Result<PaletteSelection> {
    let (prefer, avoid) = request.constraints();
    let kinds = request.enabled_kinds();

    let mut last = None;
    for attempt in 1..=MAX_ATTEMPTS {
        let kind = kinds[rng.gen_range(0..kinds.len())];
        let names = kind.generate(registry, request.size, rng)?;
        if prefer.prefers(registry, &names) && avoid.avoids(registry, &names) {
            debug!("Selected {kind} palette on attempt {attempt}: {names:?}");
            return Ok(PaletteSelection {
                kind,
                names,
                constraints_met: true,
            });
        }
        last = Some((kind, names));
    }

    warn!(
        "Attempted {MAX_ATTEMPTS} times to meet color preferences (prefer {prefer}, avoid {avoid}) but wasn't able to"
    );
    let (kind, names) = last.ok_or_else(|| {
        PromptError::Configuration("No palette was generated".to_string())
    })?;
    Ok(PaletteSelection {
        kind,
        names,
        constraints_met: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::family;

    fn request(kinds: &[PaletteKind], size: PaletteSize, seed: u64) -> PaletteRequest {
        PaletteRequest {
            kinds: kinds.to_vec(),
            size,
            seed,
            ..PaletteRequest::default()
        }
    }

    #[test]
    fn test_seed_42_triadic_four_is_pinned() {
        let registry = ColorRegistry::builtin().unwrap();
        let req = request(&[PaletteKind::Triadic], PaletteSize::Four, 42);
        let selection = select_palette(registry, &req).unwrap();
        assert_eq!(selection.kind, PaletteKind::Triadic);
        assert_eq!(selection.names, vec!["Royal Purple", "Mocha", "Emerald", "Moss"]);
        assert!(selection.constraints_met);

        let output = selection.to_output(registry);
        assert_eq!(output.palette, "royal purple, mocha, emerald, moss");
        assert_eq!(output.hex_values, "#7851a9, #967969, #50c878, #8a9a5b");
        assert_eq!(output.palette_type, "triadic");
        assert_eq!(
            output.colors,
            vec!["royal purple", "mocha", "emerald", "moss", ""]
        );
        assert_eq!(select_palette(registry, &req).unwrap(), selection);
    }

    #[test]
    fn test_output_format() {
        let registry = ColorRegistry::builtin().unwrap();
        let selection = PaletteSelection {
            kind: PaletteKind::Chaotic,
            names: vec!["Red".to_string(), "Navy".to_string(), "Crimson".to_string()],
            constraints_met: true,
        };
        let output = selection.to_output(registry);
        assert_eq!(output.palette, "red, navy, crimson");
        assert_eq!(output.colors, vec!["red", "navy", "crimson", "", ""]);
        assert_eq!(output.palette_type, "chaotic");
        let hexes: Vec<&str> = output.hex_values.split(", ").collect();
        assert_eq!(hexes[0], "#ff0000");
        assert_eq!(hexes[1], registry.hex("Navy").unwrap());
    }

    #[test]
    fn test_three_is_truncated_four() {
        let registry = ColorRegistry::builtin().unwrap();
        for kind in PaletteKind::ALL {
            let three = select_palette(registry, &request(&[kind], PaletteSize::Three, 9)).unwrap();
            let four = select_palette(registry, &request(&[kind], PaletteSize::Four, 9)).unwrap();
            assert_eq!(three.names[..], four.names[..3], "{kind}");
        }
    }

    #[test]
    fn test_warm_preference_holds_when_met() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=40 {
            let req = PaletteRequest {
                prefer: FamilyFilter::WarmColors,
                seed,
                ..PaletteRequest::default()
            };
            let selection = select_palette(registry, &req).unwrap();
            if selection.constraints_met {
                let warm = selection
                    .names
                    .iter()
                    .filter(|n| registry.is_member(family::WARM, n))
                    .count();
                let cool = selection
                    .names
                    .iter()
                    .filter(|n| registry.is_member(family::COOL, n))
                    .count();
                assert!(warm > cool, "{:?}", selection.names);
            }
        }
    }

    #[test]
    fn test_avoid_greys_excludes_greys_when_met() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=20 {
            let req = PaletteRequest {
                avoid: FamilyFilter::Greys,
                seed,
                ..PaletteRequest::default()
            };
            let selection = select_palette(registry, &req).unwrap();
            assert!(selection.constraints_met);
            assert!(!selection
                .names
                .iter()
                .any(|n| registry.is_member(family::GREYS, n)));
        }
    }

    #[test]
    fn test_same_prefer_and_avoid_cancel_out() {
        let registry = ColorRegistry::builtin().unwrap();
        for seed in 1..=20 {
            let unconstrained = request(&PaletteKind::ALL, PaletteSize::Five, seed);
            let cancelled = PaletteRequest {
                prefer: FamilyFilter::Reds,
                avoid: FamilyFilter::Reds,
                ..unconstrained.clone()
            };
            assert_eq!(
                select_palette(registry, &unconstrained).unwrap(),
                select_palette(registry, &cancelled).unwrap()
            );
        }
    }

    #[test]
    fn test_no_kinds_enabled_uses_all() {
        let registry = ColorRegistry::builtin().unwrap();
        let empty = request(&[], PaletteSize::Four, 5);
        let all = request(&PaletteKind::ALL, PaletteSize::Four, 5);
        assert_eq!(
            select_palette(registry, &empty).unwrap(),
            select_palette(registry, &all).unwrap()
        );
    }

    #[test]
    fn test_unmet_constraints_return_last_palette() {
        let registry = ColorRegistry::builtin().unwrap();
        // art-house is all greys plus a warm accent, so it can never prefer Greens
        let req = PaletteRequest {
            kinds: vec![PaletteKind::ArtHouse],
            prefer: FamilyFilter::Greens,
            seed: 3,
            ..PaletteRequest::default()
        };
        let selection = select_palette(registry, &req).unwrap();
        assert!(!selection.constraints_met);
        assert_eq!(selection.kind, PaletteKind::ArtHouse);
        assert_eq!(selection.names.len(), 4);
    }
}
