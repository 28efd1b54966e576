//! Family selector used for palette preference and avoidance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::color_registry::{family, ColorRegistry};
use crate::error::PromptError;

/// One of the sixteen family choices offered to callers, including `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FamilyFilter {
    /// No constraint.
    #[default]
    None,
    /// Reds
    Reds,
    /// Pinks
    Pinks,
    /// Oranges
    Oranges,
    /// Yellows
    Yellows,
    /// Greens
    Greens,
    /// Blues
    Blues,
    /// Purples
    Purples,
    /// Browns
    Browns,
    /// Greys
    Greys,
    /// Neutrals
    Neutrals,
    /// Metallics
    Metallics,
    /// Pastels
    Pastels,
    /// Peaches
    Peaches,
    /// Warm Colors (temperature family)
    #[serde(rename = "Warm Colors")]
    WarmColors,
    /// Cool Colors (temperature family)
    #[serde(rename = "Cool Colors")]
    CoolColors,
}

impl FamilyFilter {
    /// Every selectable option, in display order.
    pub const ALL: [Self; 16] = [
        Self::None,
        Self::Reds,
        Self::Pinks,
        Self::Oranges,
        Self::Yellows,
        Self::Greens,
        Self::Blues,
        Self::Purples,
        Self::Browns,
        Self::Greys,
        Self::Neutrals,
        Self::Metallics,
        Self::Pastels,
        Self::Peaches,
        Self::WarmColors,
        Self::CoolColors,
    ];

    /// Display label; equals the registry family name for everything but `None`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Reds => family::REDS,
            Self::Pinks => family::PINKS,
            Self::Oranges => family::ORANGES,
            Self::Yellows => family::YELLOWS,
            Self::Greens => family::GREENS,
            Self::Blues => family::BLUES,
            Self::Purples => family::PURPLES,
            Self::Browns => family::BROWNS,
            Self::Greys => family::GREYS,
            Self::Neutrals => family::NEUTRALS,
            Self::Metallics => family::METALLICS,
            Self::Pastels => family::PASTELS,
            Self::Peaches => family::PEACHES,
            Self::WarmColors => family::WARM,
            Self::CoolColors => family::COOL,
        }
    }

    /// Registry family this filter refers to, or `None` for no constraint.
    #[must_use]
    pub const fn family_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            other => Some(other.label()),
        }
    }

    /// True for `Warm Colors` / `Cool Colors`, which compare counts instead of presence.
    #[must_use]
    pub const fn is_temperature(self) -> bool {
        matches!(self, Self::WarmColors | Self::CoolColors)
    }

    /// Whether `palette` satisfies this filter as a preference.
    ///
    /// Ordinary families need at least one member present. Temperature
    /// families need a strict majority over the opposite temperature.
    #[must_use]
    pub fn prefers(self, registry: &ColorRegistry, palette: &[String]) -> bool {
        match self {
            Self::None => true,
            Self::WarmColors => {
                let (warm, cool) = temperature_counts(registry, palette);
                warm > cool
            }
            Self::CoolColors => {
                let (warm, cool) = temperature_counts(registry, palette);
                cool > warm
            }
            other => palette
                .iter()
                .any(|name| registry.is_member(other.label(), name)),
        }
    }

    /// Whether `palette` satisfies this filter as an avoidance.
    ///
    /// Ordinary families need zero members present. An avoided temperature
    /// must be outnumbered by the opposite temperature by at least one.
    #[must_use]
    pub fn avoids(self, registry: &ColorRegistry, palette: &[String]) -> bool {
        match self {
            Self::None => true,
            Self::WarmColors => {
                let (warm, cool) = temperature_counts(registry, palette);
                warm < cool
            }
            Self::CoolColors => {
                let (warm, cool) = temperature_counts(registry, palette);
                cool < warm
            }
            other => !palette
                .iter()
                .any(|name| registry.is_member(other.label(), name)),
        }
    }
}

fn temperature_counts(registry: &ColorRegistry, palette: &[String]) -> (usize, usize) {
    let warm = palette
        .iter()
        .filter(|name| registry.is_member(family::WARM, name))
        .count();
    let cool = palette
        .iter()
        .filter(|name| registry.is_member(family::COOL, name))
        .count();
    (warm, cool)
}

impl fmt::Display for FamilyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FamilyFilter {
    type Err = PromptError;

    /// Accepts the display label ("Warm Colors") or a kebab/snake form
    /// ("warm-colors", "warm_colors"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|f| normalize(f.label()) == wanted)
            .ok_or_else(|| PromptError::UnknownFamily(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_labels_and_aliases() {
        assert_eq!("Warm Colors".parse::<FamilyFilter>().unwrap(), FamilyFilter::WarmColors);
        assert_eq!("warm-colors".parse::<FamilyFilter>().unwrap(), FamilyFilter::WarmColors);
        assert_eq!("cool_colors".parse::<FamilyFilter>().unwrap(), FamilyFilter::CoolColors);
        assert_eq!("greys".parse::<FamilyFilter>().unwrap(), FamilyFilter::Greys);
        assert_eq!("None".parse::<FamilyFilter>().unwrap(), FamilyFilter::None);
        assert!("Broad Neutrals".parse::<FamilyFilter>().is_err());
        assert!("Teals".parse::<FamilyFilter>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for filter in FamilyFilter::ALL {
            assert_eq!(filter.to_string().parse::<FamilyFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&FamilyFilter::WarmColors).unwrap();
        assert_eq!(json, "\"Warm Colors\"");
        let back: FamilyFilter = serde_json::from_str("\"Greys\"").unwrap();
        assert_eq!(back, FamilyFilter::Greys);
    }

    #[test]
    fn test_prefer_ordinary_family_needs_one_member() {
        let registry = ColorRegistry::builtin().unwrap();
        assert!(FamilyFilter::Reds.prefers(registry, &names(&["Navy", "Crimson", "Grey"])));
        assert!(!FamilyFilter::Reds.prefers(registry, &names(&["Navy", "Grey"])));
        assert!(FamilyFilter::None.prefers(registry, &names(&["Navy"])));
    }

    #[test]
    fn test_prefer_warm_needs_strict_majority() {
        let registry = ColorRegistry::builtin().unwrap();
        // one warm, one cool: tie is not enough
        assert!(!FamilyFilter::WarmColors.prefers(registry, &names(&["Crimson", "Navy"])));
        assert!(FamilyFilter::WarmColors.prefers(registry, &names(&["Crimson", "Orange", "Navy"])));
        assert!(FamilyFilter::CoolColors.prefers(registry, &names(&["Navy", "Teal", "Crimson"])));
        assert!(!FamilyFilter::CoolColors.prefers(registry, &names(&["Grey"])));
    }

    #[test]
    fn test_avoid_conditions() {
        let registry = ColorRegistry::builtin().unwrap();
        assert!(FamilyFilter::Greys.avoids(registry, &names(&["Navy", "Crimson"])));
        assert!(!FamilyFilter::Greys.avoids(registry, &names(&["Navy", "Grey"])));
        assert!(FamilyFilter::WarmColors.avoids(registry, &names(&["Navy", "Teal", "Crimson"])));
        assert!(!FamilyFilter::WarmColors.avoids(registry, &names(&["Navy", "Crimson"])));
        assert!(FamilyFilter::CoolColors.avoids(registry, &names(&["Crimson", "Orange", "Navy"])));
        assert!(!FamilyFilter::CoolColors.avoids(registry, &names(&["White"])));
    }
}
