//! String utilities for assembling prompts.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{NoExpand, Regex, RegexBuilder};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use crate::error::{PromptError, Result};

// Weighted option: "3>>text"
static WEIGHTED_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)\s*>>(.*)$").expect("valid regex"));

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("valid regex"));

/// Replaces every `|`-separated target in `text` with `replacement`.
///
/// Blank `targets` leave the text unchanged. Case-insensitive matching treats
/// targets literally.
#[must_use]
pub fn replace_words(text: &str, targets: &str, replacement: &str, case_sensitive: bool) -> String {
    if targets.trim().is_empty() {
        return text.to_string();
    }
    replace_all(text, targets, replacement, case_sensitive)
}

fn replace_all(text: &str, targets: &str, replacement: &str, case_sensitive: bool) -> String {
    let mut revised = text.to_string();
    for target in targets.split('|') {
        if target.is_empty() {
            continue;
        }
        if case_sensitive {
            revised = revised.replace(target, replacement);
        } else if let Ok(pattern) = RegexBuilder::new(&regex::escape(target))
            .case_insensitive(true)
            .build()
        {
            revised = pattern.replace_all(&revised, NoExpand(replacement)).into_owned();
        }
    }
    revised
}

/// Separator between the options given to [`randomize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    /// One option per line.
    Newlines,
    /// Comma separated.
    Commas,
    /// Semicolon separated.
    Semicolons,
}

impl Delimiter {
    fn split(self, options: &str) -> Vec<String> {
        let parts: Vec<&str> = match self {
            Self::Newlines => options.lines().collect(),
            Self::Commas => options.split(',').collect(),
            Self::Semicolons => options.split(';').collect(),
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl FromStr for Delimiter {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newlines" | "newline" | "lines" => Ok(Self::Newlines),
            "commas" | "comma" => Ok(Self::Commas),
            "semi-colons" | "semicolons" | "semicolon" => Ok(Self::Semicolons),
            other => Err(PromptError::Configuration(format!(
                "Unknown delimiter '{other}'. Use newlines, commas or semi-colons"
            ))),
        }
    }
}

/// Largest weight honored for a single `N>>option`.
pub const MAX_OPTION_WEIGHT: usize = 1000;

/// Expands `N>>option` into `N` copies of `option`, with `N` capped at
/// [`MAX_OPTION_WEIGHT`].
fn expand_weights(options: Vec<String>) -> Vec<String> {
    let mut expanded = Vec::with_capacity(options.len());
    for option in options {
        match WEIGHTED_OPTION.captures(&option) {
            Some(caps) => {
                // digits only, so a parse failure is an overflow
                let weight: usize = caps[1].parse().unwrap_or(usize::MAX);
                if weight > MAX_OPTION_WEIGHT {
                    warn!("Option weight {weight} capped at {MAX_OPTION_WEIGHT}");
                }
                let count = weight.min(MAX_OPTION_WEIGHT);
                let text = caps[2].trim().to_string();
                expanded.extend(std::iter::repeat(text).take(count));
            }
            None => expanded.push(option),
        }
    }
    expanded
}

/// Picks one of `options` and substitutes it for every target in `text`.
///
/// Options may carry a weight as `3>>option`. Returns the updated text and
/// the option picked; with no usable option the text is returned unchanged
/// with an empty selection.
pub fn randomize<R: Rng + ?Sized>(
    text: &str,
    targets: &str,
    options: &str,
    delimiter: Delimiter,
    case_sensitive: bool,
    rng: &mut R,
) -> (String, String) {
    let expanded = expand_weights(delimiter.split(options));
    match expanded.choose(rng) {
        Some(selected) => (
            replace_all(text, targets, selected, case_sensitive),
            selected.clone(),
        ),
        None => (text.to_string(), String::new()),
    }
}

/// Joins the non-empty inputs with `joiner`.
#[must_use]
pub fn combine(first: &str, second: &str, joiner: &str) -> String {
    [first, second]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Shuffles the lines of `list` and keeps up to `count` of them.
///
/// Existing `N.` numbering and blank lines are dropped first. With
/// `numbered`, the result is renumbered from 1.
pub fn sample_list<R: Rng + ?Sized>(list: &str, count: usize, numbered: bool, rng: &mut R) -> String {
    let mut lines: Vec<String> = list
        .split('\n')
        .map(|line| LEADING_NUMBER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    lines.shuffle(rng);
    lines.truncate(count);

    if numbered {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {line}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        lines.join("\n")
    }
}

/// Result of [`consume_list_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumed {
    /// Prompt with the target replaced by the selection.
    pub prompt: String,
    /// The option taken from the list.
    pub selected: String,
    /// The remaining options, one per line.
    pub remaining: String,
}

/// Takes one random line out of `list` and substitutes it for `target`.
pub fn consume_list_item<R: Rng + ?Sized>(
    prompt: &str,
    target: &str,
    list: &str,
    rng: &mut R,
) -> Consumed {
    let mut options: Vec<&str> = list
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if options.is_empty() {
        return Consumed {
            prompt: prompt.to_string(),
            selected: String::new(),
            remaining: String::new(),
        };
    }

    let index = rng.gen_range(0..options.len());
    let selected = options.remove(index);
    let prompt = if target.is_empty() {
        prompt.to_string()
    } else {
        prompt.replace(target, selected)
    };
    Consumed {
        prompt,
        selected: selected.to_string(),
        remaining: options.join("\n"),
    }
}

/// Which side of the marker [`truncate`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncateMode {
    #[default]
    /// Drop the text before the marker.
    DeleteBefore,
    /// Drop the text after the marker.
    DeleteAfter,
}

impl fmt::Display for TruncateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteBefore => f.write_str("delete before"),
            Self::DeleteAfter => f.write_str("delete after"),
        }
    }
}

impl FromStr for TruncateMode {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "delete before" | "before" => Ok(Self::DeleteBefore),
            "delete after" | "after" => Ok(Self::DeleteAfter),
            other => Err(PromptError::Configuration(format!(
                "Unknown truncate mode '{other}'. Use 'delete before' or 'delete after'"
            ))),
        }
    }
}

/// Cuts `prompt` at the first occurrence of `marker`.
///
/// `inclusive` removes the marker as well. A missing marker leaves the
/// prompt unchanged.
#[must_use]
pub fn truncate(prompt: &str, marker: &str, mode: TruncateMode, inclusive: bool) -> String {
    let Some(index) = prompt.find(marker) else {
        return prompt.to_string();
    };
    let end = index + marker.len();
    match (mode, inclusive) {
        (TruncateMode::DeleteBefore, true) => prompt[end..].to_string(),
        (TruncateMode::DeleteBefore, false) => prompt[index..].to_string(),
        (TruncateMode::DeleteAfter, true) => prompt[..index].to_string(),
        (TruncateMode::DeleteAfter, false) => prompt[..end].to_string(),
    }
}

/// Reads `dir/name` as UTF-8 text.
///
/// # Errors
/// Returns [`PromptError::Io`] if the file cannot be read.
pub fn read_file(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| PromptError::Io { path, source })
}

/// Reads `dir/name`, logging a warning and returning an empty string on
/// failure.
#[must_use]
pub fn load_file(dir: &Path, name: &str) -> String {
    read_file(dir, name).unwrap_or_else(|e| {
        warn!("Error reading file: {e}");
        String::new()
    })
}
